pub mod details_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod log_pane;
pub mod modal;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use details_pane::render_details_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use log_pane::render_log_pane;
use modal::render_confirm_purge_modal;
use ratatui::Frame;
use std::time::Instant;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState, now: Instant) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_timer_pane(f, app, layout.timer_area, now);
    render_list_pane(f, app, layout.list_area);
    render_details_pane(f, app, layout.details_area);
    render_log_pane(f, app, layout.log_area);

    // Render confirmation if active
    render_confirm_purge_modal(f, app, size);

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
