use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Space start/pause   "),
        Span::raw("r restart   "),
        Span::raw("n/b next/prev phase   "),
        Span::raw("Enter target   "),
        Span::raw("u untarget   "),
        Span::raw("a add   "),
        Span::raw("e edit   "),
        Span::raw("x done   "),
        Span::raw("d trash/restore   "),
        Span::raw("p empty trash   "),
        Span::raw("Tab filter   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
