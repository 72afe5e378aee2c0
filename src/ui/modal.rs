use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the empty-trash confirmation
pub fn render_confirm_purge_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode == UiMode::ConfirmPurge {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let lines = vec![
            Line::raw(""),
            Line::raw(format!(
                "  Permanently delete {} task(s) in the trash?",
                app.trash_count()
            )),
            Line::raw(""),
            Line::raw("  This cannot be undone."),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  [y]", modal_title_style()),
                Span::raw(" Empty trash  "),
                Span::styled("[n]", modal_title_style()),
                Span::raw(" Keep  "),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" 🗑 Empty Trash ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
