pub mod enums;
pub mod task;
pub mod timer;
pub mod views;

pub use enums::{Theme, TimerPhase, UiMode};
pub use task::{Task, TaskList, NOTE_TEXT};
pub use timer::{format_time, tick, TimerState, DEFAULT_PRESET_SECS, PRESETS, QUICK_PRESETS};
pub use views::{arc_points, pick_quote, QUOTES};
