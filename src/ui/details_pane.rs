use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Details ", title_style()));

    let Some(task) = app.selected_task() else {
        f.render_widget(Paragraph::new("No task selected").block(block), area);
        return;
    };

    let field = |name: &'static str, value: String| {
        Line::from(vec![Span::styled(name, title_style()), Span::raw(value)])
    };

    let status = if task.removed {
        "TRASH"
    } else if task.checked {
        "FINISHED"
    } else {
        "IN PROGRESS"
    };

    let mut lines = vec![
        field("Title:    ", task.title.clone()),
        Line::raw(""),
        field("Tag:      ", task.tag.clone()),
        field("Project:  ", task.project.clone()),
        field("Pomodoro: ", task.pomodoro_badge()),
        field("Progress: ", format!("{:.0}%", (task.progress_ratio() * 100.0).min(999.9))),
        field("Status:   ", status.to_string()),
        field("Created:  ", task.created_at.format("%H:%M").to_string()),
    ];

    if app.target == Some(task.id) {
        lines.push(Line::raw(""));
        lines.push(Line::styled("Credited by the timer", default_style()));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
