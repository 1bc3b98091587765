//! Typed load/save of the persisted entities on top of a `KeyValueStore`.
//!
//! Loads never fail: a missing or malformed value yields its default.
//! Saves never report: a failed write is logged and dropped.

use super::store::KeyValueStore;
use crate::domain::{Task, TaskList, Theme, TimerState, DEFAULT_PRESET_SECS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

pub const KEY_THEME: &str = "theme";
pub const KEY_TASKS: &str = "tasks";
pub const KEY_SECONDS_REMAINING: &str = "secondsRemaining";
pub const KEY_RUNNING: &str = "running";
pub const KEY_SELECTED_PRESET: &str = "selectedPreset";

/// Load a scalar stored as its string form
pub fn load_scalar<T: FromStr>(store: &dyn KeyValueStore, key: &str, fallback: T) -> T {
    match store.get(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, raw = %raw, "malformed stored value, using default");
                fallback
            }
        },
        None => fallback,
    }
}

/// Load a JSON-encoded value
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, fallback: T) -> T {
    match store.get(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed stored JSON, using default");
                fallback
            }
        },
        None => fallback,
    }
}

/// Store a scalar as its string form
pub fn save_scalar<T: Display>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    if let Err(e) = store.set(key, &value.to_string()) {
        tracing::warn!(key, error = %e, "failed to save value");
    }
}

/// Store a value as JSON
pub fn save_json<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to encode value");
            return;
        }
    };
    if let Err(e) = store.set(key, &encoded) {
        tracing::warn!(key, error = %e, "failed to save value");
    }
}

pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
    load_scalar(store, KEY_THEME, Theme::default())
}

pub fn save_theme(store: &mut dyn KeyValueStore, theme: Theme) {
    save_scalar(store, KEY_THEME, &theme);
}

pub fn load_tasks(store: &dyn KeyValueStore) -> TaskList {
    TaskList::from_tasks(load_json::<Vec<Task>>(store, KEY_TASKS, Vec::new()))
}

pub fn save_tasks(store: &mut dyn KeyValueStore, tasks: &TaskList) {
    save_json(store, KEY_TASKS, tasks.tasks());
}

/// Load the timer, repairing values that would break its invariants
pub fn load_timer(store: &dyn KeyValueStore) -> TimerState {
    let mut preset_secs = load_scalar(store, KEY_SELECTED_PRESET, DEFAULT_PRESET_SECS);
    if preset_secs == 0 {
        tracing::warn!("stored preset is zero, using default");
        preset_secs = DEFAULT_PRESET_SECS;
    }

    let remaining_secs =
        load_scalar(store, KEY_SECONDS_REMAINING, DEFAULT_PRESET_SECS).min(preset_secs);
    let running = load_scalar(store, KEY_RUNNING, false) && remaining_secs > 0;

    TimerState {
        remaining_secs,
        running,
        preset_secs,
    }
}

pub fn save_timer(store: &mut dyn KeyValueStore, timer: &TimerState) {
    save_scalar(store, KEY_SECONDS_REMAINING, &timer.remaining_secs);
    save_scalar(store, KEY_RUNNING, &timer.running);
    save_scalar(store, KEY_SELECTED_PRESET, &timer.preset_secs);
}
