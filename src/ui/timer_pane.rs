use crate::app::AppState;
use crate::domain::{format_mm_ss, WORK_CYCLES_BEFORE_LUNCH};
use crate::ui::styles::{
    border_style, default_style, gauge_style, paused_style, phase_style, running_style,
    title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::time::Instant;

/// Render the Pomodoro countdown pane
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect, now: Instant) {
    let phase = app.phase.phase();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Pomorks ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Phase + countdown
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Target task
            Constraint::Min(0),    // Status line
        ])
        .split(inner);

    let (badge, badge_style) = if app.countdown.is_running() {
        ("RUNNING", running_style())
    } else {
        ("PAUSED", paused_style())
    };

    let remaining = format_mm_ss(app.countdown.remaining(now));
    let header = Line::from(vec![
        Span::styled(format!(" {} ", app.phase.label()), phase_style(phase)),
        Span::raw("  "),
        Span::styled(remaining, phase_style(phase)),
        Span::raw(format!(" / {}  ", format_mm_ss(app.countdown.total()))),
        Span::styled(format!("({})", badge), badge_style),
        Span::raw(format!(
            "   cycle {}/{}   🍅 {} today",
            app.phase.completed_work_cycles(),
            WORK_CYCLES_BEFORE_LUNCH,
            app.work_cycles_today()
        )),
    ]);
    f.render_widget(Paragraph::new(header), rows[0]);

    let ratio = app.countdown.progress_ratio(now);
    let gauge = Gauge::default()
        .gauge_style(gauge_style(phase))
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));
    f.render_widget(gauge, rows[1]);

    let target = match app.target_task() {
        Some(task) => Line::from(vec![
            Span::styled(" Target: ", title_style()),
            Span::raw(task.title.clone()),
            Span::raw(format!("  ({})", task.pomodoro_badge())),
        ]),
        None => Line::from(vec![
            Span::styled(" Target: ", title_style()),
            Span::styled("none (Enter on a task to target it)", default_style()),
        ]),
    };
    f.render_widget(Paragraph::new(target), rows[2]);

    if let Some(status) = &app.status {
        f.render_widget(
            Paragraph::new(Line::raw(format!(" {}", status))).style(paused_style()),
            rows[3],
        );
    }
}
