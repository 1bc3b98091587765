use crate::domain::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub danger: Color,
    pub track: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::LightCyan,
                highlight: Color::Magenta,
                success: Color::Green,
                danger: Color::LightRed,
                track: Color::DarkGray,
            },
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                accent: Color::Blue,
                highlight: Color::Magenta,
                success: Color::Green,
                danger: Color::Red,
                track: Color::Gray,
            },
        }
    }
}

/// Base style for the whole frame
pub fn default_style(theme: Theme) -> Style {
    let p = Palette::for_theme(theme);
    Style::default().fg(p.fg).bg(p.bg)
}

/// Selected row highlight style
pub fn selected_style(theme: Theme) -> Style {
    let p = Palette::for_theme(theme);
    Style::default()
        .fg(p.bg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Title style for cards
pub fn title_style(theme: Theme) -> Style {
    Style::default()
        .fg(Palette::for_theme(theme).accent)
        .add_modifier(Modifier::BOLD)
}

pub fn border_style(theme: Theme) -> Style {
    Style::default().fg(Palette::for_theme(theme).muted)
}

/// Big clock digits
pub fn clock_style(theme: Theme) -> Style {
    Style::default()
        .fg(Palette::for_theme(theme).fg)
        .add_modifier(Modifier::BOLD)
}

/// Active preset button
pub fn active_preset_style(theme: Theme) -> Style {
    let p = Palette::for_theme(theme);
    Style::default()
        .fg(p.bg)
        .bg(p.highlight)
        .add_modifier(Modifier::BOLD)
}

pub fn running_style(theme: Theme) -> Style {
    Style::default()
        .fg(Palette::for_theme(theme).highlight)
        .add_modifier(Modifier::BOLD)
}

/// Muted hint text
pub fn hint_style(theme: Theme) -> Style {
    Style::default().fg(Palette::for_theme(theme).muted)
}

/// Completed task text
pub fn done_style(theme: Theme) -> Style {
    Style::default()
        .fg(Palette::for_theme(theme).muted)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn danger_style(theme: Theme) -> Style {
    Style::default()
        .fg(Palette::for_theme(theme).danger)
        .add_modifier(Modifier::BOLD)
}

/// Progress bar fill
pub fn gauge_style(theme: Theme) -> Style {
    let p = Palette::for_theme(theme);
    Style::default().fg(p.success).bg(p.track)
}

/// Modal background style
pub fn modal_style(theme: Theme) -> Style {
    let p = Palette::for_theme(theme);
    Style::default().fg(p.fg).bg(p.track)
}
