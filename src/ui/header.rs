use crate::app::AppState;
use crate::domain::Theme;
use crate::ui::styles::{active_preset_style, border_style, hint_style, title_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "Stargaze Focus";
const SUBTITLE: &str = "Focus timer · tasks · progress";
const FOOTER: &str = "Stargaze Focus • Local state only • No account required";

/// Render the title bar with the theme selector on the right
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(theme));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(format!("✦ {}", TITLE), title_style(theme)),
        Span::raw("  "),
        Span::styled(SUBTITLE, hint_style(theme)),
    ]);
    f.render_widget(Paragraph::new(title), columns[0]);

    let mut selector = vec![Span::styled("Theme [t]: ", hint_style(theme))];
    for option in Theme::all() {
        let style = if *option == theme {
            active_preset_style(theme)
        } else {
            hint_style(theme)
        };
        selector.push(Span::styled(format!(" {} ", option.label()), style));
    }
    f.render_widget(
        Paragraph::new(Line::from(selector)).alignment(Alignment::Right),
        columns[1],
    );
}

/// Render the footer line
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let footer = Paragraph::new(Span::styled(FOOTER, hint_style(app.theme)))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
