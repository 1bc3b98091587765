use crate::app::AppState;
use crate::domain::{arc_points, format_time, PRESETS};
use crate::ui::styles::{
    active_preset_style, border_style, clock_style, hint_style, running_style, title_style,
    Palette,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

/// Resolution of the progress ring
const ARC_STEPS: usize = 96;

/// Render the timer card: presets, progress ring, clock and controls
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(" Focus Timer ", title_style(theme)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Preset row
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Ring + clock
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    f.render_widget(Paragraph::new(preset_line(app)), rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(rows[2]);

    render_ring(f, app, body[0]);
    render_clock(f, app, body[1]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Tip: press ", hint_style(theme)),
        Span::styled("Space", title_style(theme)),
        Span::styled(" to start/pause", hint_style(theme)),
    ]));
    f.render_widget(hint, rows[3]);
}

/// Preset buttons with the active one highlighted
fn preset_line(app: &AppState) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, preset) in PRESETS.iter().enumerate() {
        let style = if app.timer.preset_secs == preset.secs {
            active_preset_style(app.theme)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, preset.label), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Circular progress arc, filled clockwise from the top
fn render_ring(f: &mut Frame, app: &AppState, area: Rect) {
    if area.width < 4 || area.height < 2 {
        return;
    }
    let palette = Palette::for_theme(app.theme);
    let track = arc_points(100.0, 1.0, ARC_STEPS);
    let progress = arc_points(app.timer.percent(), 1.0, ARC_STEPS);
    let label = format!("{:.0}%", app.timer.percent());

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.3, 1.3])
        .y_bounds([-1.3, 1.3])
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &track,
                color: palette.track,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &progress,
                color: palette.accent,
            });
            ctx.print(-0.3, 0.0, label.clone());
        });

    f.render_widget(canvas, area);
}

/// Digital clock, status, caption and controls
fn render_clock(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let status = if app.timer.running {
        Span::styled("Running", running_style(theme))
    } else {
        Span::styled("Paused", hint_style(theme))
    };

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(format_time(app.timer.remaining_secs), clock_style(theme))),
        Line::from(status),
        Line::raw(""),
        Line::from(Span::styled(
            app.quote,
            hint_style(theme).add_modifier(Modifier::ITALIC),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Space] ", title_style(theme)),
            Span::raw(app.timer.start_label()),
            Span::raw("   "),
            Span::styled("[r] ", title_style(theme)),
            Span::raw("Reset"),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
