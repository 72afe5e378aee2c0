use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, default_style, done_style, over_estimate_style, project_style, removed_style,
    running_style, selected_style, tag_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the filtered task list
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.visible_tasks();

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let is_target = app.target == Some(task.id);
            let line = create_task_line(task, is_target);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(" Tasks: {} ({}) ", app.filter.name(), visible.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for a task
/// Format: ▶ [x] Write proposal [doc] @core  2/4
fn create_task_line(task: &Task, is_target: bool) -> Line<'static> {
    let mut spans = Vec::new();

    // Target marker
    if is_target {
        spans.push(Span::styled("▶ ".to_string(), running_style()));
    } else {
        spans.push(Span::raw("  ".to_string()));
    }

    // Checkbox
    let checkbox = if task.checked { "[x] " } else { "[ ] " };
    spans.push(Span::raw(checkbox.to_string()));

    // Title
    let text_style = if task.removed {
        removed_style()
    } else if task.checked {
        done_style()
    } else {
        default_style()
    };
    spans.push(Span::styled(task.title.clone(), text_style));

    if !task.tag.is_empty() {
        spans.push(Span::raw(" ".to_string()));
        spans.push(Span::styled(format!("[{}]", task.tag), tag_style()));
    }
    if !task.project.is_empty() {
        spans.push(Span::raw(" ".to_string()));
        spans.push(Span::styled(format!("@{}", task.project), project_style()));
    }

    // Pomodoro count
    let count_style = if task.is_over_estimate() {
        over_estimate_style()
    } else {
        default_style()
    };
    spans.push(Span::raw("  ".to_string()));
    spans.push(Span::styled(format!("🍅 {}", task.pomodoro_badge()), count_style));

    Line::from(spans)
}
