use crate::app::AppState;
use crate::domain::QUICK_PRESETS;
use crate::ui::styles::{border_style, gauge_style, hint_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const ABOUT: &str = "Stargaze Focus helps you focus with short bursts of deep work, track tasks, \
and keep momentum. It stores your state locally.";

/// Render the progress card: completion count, progress bar, quick actions
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(" Progress ", title_style(theme)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Completed count
            Constraint::Length(1), // Progress bar
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Quick actions
        ])
        .split(inner);

    let summary = Line::from(vec![
        Span::raw("Completed tasks: "),
        Span::styled(
            format!("{}/{}", app.tasks.done_count(), app.tasks.len()),
            title_style(theme),
        ),
    ]);
    f.render_widget(Paragraph::new(summary), rows[0]);

    let percent = app.tasks.completion_percent().min(100);
    let gauge = Gauge::default()
        .gauge_style(gauge_style(theme))
        .percent(percent)
        .label(format!("{}%", percent));
    f.render_widget(gauge, rows[1]);

    let mut lines = vec![Line::from(Span::styled("Quick Actions", title_style(theme)))];
    for (key, preset) in ['4', '5'].iter().zip(QUICK_PRESETS.iter()) {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", key), title_style(theme)),
            Span::raw(preset.label),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("[n] ", title_style(theme)),
        Span::raw("Add a note"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("[C] ", title_style(theme)),
        Span::raw("Clear tasks"),
    ]));
    f.render_widget(Paragraph::new(lines), rows[3]);
}

/// Render the about card
pub fn render_about_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let paragraph = Paragraph::new(Span::styled(ABOUT, hint_style(theme)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(theme))
                .title(Span::styled(" About ", title_style(theme))),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
