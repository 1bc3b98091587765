use crate::domain::{Theme, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, area: Rect, mode: UiMode, theme: Theme) {
    let hints = match mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" Space start/pause "),
            Span::raw("r reset "),
            Span::raw("1-3 preset "),
            Span::raw("4/5 quick "),
            Span::raw("n note "),
            Span::raw("a add "),
            Span::raw("↑/↓ select "),
            Span::raw("x done "),
            Span::raw("e edit "),
            Span::raw("d delete "),
            Span::raw("C clear "),
            Span::raw("t theme "),
            Span::raw("q quit"),
        ]),
        UiMode::AddingTask => Line::raw(" Type a task   Enter add   Esc back to list"),
        UiMode::EditingTask => Line::raw(" Editing   Enter save   Esc cancel"),
        UiMode::ConfirmDelete => Line::raw(" y delete   n keep"),
    };

    let paragraph = Paragraph::new(hints).style(hint_style(theme));
    f.render_widget(paragraph, area);
}
