use crate::app::AppState;
use crate::ui::styles::{border_style, phase_style, title_style};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the session log (newest first)
pub fn render_log_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|record| ListItem::new(Span::styled(record.summary(), phase_style(record.phase))))
        .collect();

    let title = format!(" Session Log ({} work) ", app.work_cycles_today());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
