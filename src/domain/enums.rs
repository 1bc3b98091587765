use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colour theme applied to every rendered style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Persisted form ("dark" / "light")
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Display name for the theme selector
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Derived lifecycle phase of the countdown timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Full preset remaining, not running
    Idle,
    Running,
    /// Stopped part-way through
    Paused,
    /// Counted down to zero
    Finished,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Task input line has focus
    AddingTask,
    /// A task is being edited inline
    EditingTask,
    /// Waiting for the user to confirm a deletion
    ConfirmDelete,
}
