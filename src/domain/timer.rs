use super::enums::TimerPhase;

/// Default preset: 25 minutes
pub const DEFAULT_PRESET_SECS: u32 = 25 * 60;

/// A selectable countdown duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub secs: u32,
}

/// The three fixed presets offered in the preset row
pub const PRESETS: [Preset; 3] = [
    Preset { label: "Focus 25", secs: 25 * 60 },
    Preset { label: "Short 10", secs: 10 * 60 },
    Preset { label: "Micro 5", secs: 5 * 60 },
];

/// Quick-action shortcuts (retarget without touching the running flag)
pub const QUICK_PRESETS: [Preset; 2] = [
    Preset { label: "Quick 5m", secs: 5 * 60 },
    Preset { label: "Quick 15m", secs: 15 * 60 },
];

/// Countdown timer state
///
/// `remaining_secs` stays within `[0, preset_secs]` on every mutation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub remaining_secs: u32,
    pub running: bool,
    pub preset_secs: u32,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_PRESET_SECS)
    }
}

impl TimerState {
    /// Idle timer with the full preset remaining
    pub fn new(preset_secs: u32) -> Self {
        Self {
            remaining_secs: preset_secs,
            running: false,
            preset_secs,
        }
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.remaining_secs == 0 {
            TimerPhase::Finished
        } else if self.remaining_secs == self.preset_secs {
            TimerPhase::Idle
        } else {
            TimerPhase::Paused
        }
    }

    /// Select a preset: any state -> Idle
    pub fn choose_preset(&mut self, secs: u32) {
        self.preset_secs = secs;
        self.remaining_secs = secs;
        self.running = false;
    }

    /// Retarget both the preset and the countdown, leaving `running` alone
    pub fn retarget(&mut self, secs: u32) {
        self.preset_secs = secs;
        self.remaining_secs = secs;
    }

    /// Start/pause. A finished timer restarts from the full preset.
    pub fn toggle_start_pause(&mut self) {
        if self.remaining_secs == 0 {
            self.remaining_secs = self.preset_secs;
            self.running = true;
        } else {
            self.running = !self.running;
        }
    }

    /// Any state -> Idle
    pub fn reset(&mut self) {
        self.remaining_secs = self.preset_secs;
        self.running = false;
    }

    /// Elapsed share of the preset in percent
    pub fn percent(&self) -> f64 {
        percent(self.remaining_secs, self.preset_secs)
    }

    /// Label for the start/pause control
    pub fn start_label(&self) -> &'static str {
        if self.running {
            "Pause"
        } else if self.remaining_secs == 0 {
            "Start"
        } else {
            "Start / Resume"
        }
    }
}

/// Apply one tick. Returns the new state and whether the countdown just
/// completed. Non-running or already-finished states are returned as is.
pub fn tick(state: TimerState) -> (TimerState, bool) {
    if !state.running {
        return (state, false);
    }
    if state.remaining_secs == 0 {
        return (TimerState { running: false, ..state }, false);
    }

    let remaining_secs = state.remaining_secs - 1;
    let completed = remaining_secs == 0;
    (
        TimerState {
            remaining_secs,
            running: !completed,
            ..state
        },
        completed,
    )
}

/// `clamp(0, 100, (1 - remaining / preset) * 100)`, 0 for a zero preset
pub fn percent(remaining_secs: u32, preset_secs: u32) -> f64 {
    if preset_secs == 0 {
        return 0.0;
    }
    let ratio = remaining_secs as f64 / preset_secs as f64;
    ((1.0 - ratio) * 100.0).clamp(0.0, 100.0)
}

/// Format seconds as zero-padded "MM:SS"
pub fn format_time(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
