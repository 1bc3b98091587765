use crate::domain::{pick_quote, tick, TaskList, Theme, TimerState, UiMode, NOTE_TEXT, QUOTES};
use crate::notifications::CompletionCue;
use crate::persistence::{
    load_tasks, load_theme, load_timer, save_tasks, save_theme, save_timer, KeyValueStore,
};
use crate::ticker::Ticker;
use rand::rngs::StdRng;
use std::time::Instant;

/// Inline edit of a single task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub task_id: u64,
    pub buffer: String,
}

/// Main application state
pub struct AppState {
    pub timer: TimerState,
    pub tasks: TaskList,
    pub theme: Theme,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    /// Contents of the task input line
    pub input: String,
    /// At most one task is editable at a time
    pub editing: Option<EditState>,
    pub pending_delete: Option<u64>,
    pub quote: &'static str,
    ticker: Ticker,
    store: Box<dyn KeyValueStore>,
    cue: Box<dyn CompletionCue>,
    rng: StdRng,
}

impl AppState {
    /// Load persisted state and resume the countdown if it was running
    pub fn new(
        store: Box<dyn KeyValueStore>,
        cue: Box<dyn CompletionCue>,
        rng: StdRng,
        now: Instant,
    ) -> Self {
        let timer = load_timer(store.as_ref());
        let tasks = load_tasks(store.as_ref());
        let theme = load_theme(store.as_ref());

        let mut app = Self {
            timer,
            tasks,
            theme,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            input: String::new(),
            editing: None,
            pending_delete: None,
            quote: "",
            ticker: Ticker::default(),
            store,
            cue,
            rng,
        };

        app.sync_ticker(now);
        app.refresh_quote();
        app
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    #[cfg(test)]
    pub fn ticker_active(&self) -> bool {
        self.ticker.is_active()
    }

    /// Draw a new caption; called after every state change
    fn refresh_quote(&mut self) {
        self.quote = pick_quote(&mut self.rng, QUOTES);
    }

    /// Keep exactly one schedule alive while the timer runs, none otherwise
    fn sync_ticker(&mut self, now: Instant) {
        if self.timer.running {
            self.ticker.start(now);
        } else {
            self.ticker.stop();
        }
    }

    fn timer_changed(&mut self, now: Instant) {
        save_timer(self.store.as_mut(), &self.timer);
        self.sync_ticker(now);
        self.refresh_quote();
    }

    fn tasks_changed(&mut self) {
        save_tasks(self.store.as_mut(), &self.tasks);
        self.clamp_selection();
        self.refresh_quote();
    }

    // ---- timer -------------------------------------------------------------

    pub fn choose_preset(&mut self, secs: u32, now: Instant) {
        self.timer.choose_preset(secs);
        tracing::info!(secs, "preset selected");
        self.timer_changed(now);
    }

    /// Quick action: retarget the countdown without stopping it
    pub fn quick_preset(&mut self, secs: u32, now: Instant) {
        self.timer.retarget(secs);
        tracing::info!(secs, "quick preset applied");
        self.timer_changed(now);
    }

    pub fn toggle_start_pause(&mut self, now: Instant) {
        self.timer.toggle_start_pause();
        tracing::debug!(running = self.timer.running, remaining = self.timer.remaining_secs, "timer toggled");
        self.timer_changed(now);
    }

    pub fn reset_timer(&mut self, now: Instant) {
        self.timer.reset();
        self.timer_changed(now);
    }

    /// Apply every tick that fell due by `now`. Fires the completion cue
    /// once when the countdown reaches zero.
    pub fn on_tick(&mut self, now: Instant) {
        if !self.ticker.is_active() {
            return;
        }
        let due = self.ticker.due(now);
        if due == 0 {
            return;
        }

        for _ in 0..due {
            let (next, completed) = tick(self.timer);
            self.timer = next;
            if completed {
                tracing::info!(preset = self.timer.preset_secs, "countdown complete");
                self.cue.signal();
            }
            if !self.timer.running {
                break;
            }
        }

        self.timer_changed(now);
    }

    /// Stop the schedule and flush everything to the store
    pub fn shutdown(&mut self) {
        self.ticker.stop();
        save_timer(self.store.as_mut(), &self.timer);
        save_tasks(self.store.as_mut(), &self.tasks);
        save_theme(self.store.as_mut(), self.theme);
    }

    // ---- theme -------------------------------------------------------------

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        save_theme(self.store.as_mut(), theme);
        self.refresh_quote();
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    // ---- tasks -------------------------------------------------------------

    /// Add a task directly. Blank text is ignored.
    pub fn add_task(&mut self, text: &str) -> Option<u64> {
        let id = self.tasks.add(text)?;
        tracing::info!(id, "task added");
        self.tasks_changed();
        Some(id)
    }

    /// Quick action: append a reminder task at the end of the list
    pub fn add_note(&mut self) {
        let id = self.tasks.append(NOTE_TEXT);
        tracing::info!(id, "note added");
        self.tasks_changed();
    }

    pub fn clear_tasks(&mut self) {
        self.tasks.clear();
        self.editing = None;
        self.pending_delete = None;
        tracing::info!("tasks cleared");
        self.tasks_changed();
    }

    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    pub fn selected_task_id(&self) -> Option<u64> {
        self.tasks.tasks().get(self.selected_index).map(|t| t.id)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if self.tasks.toggle(id) {
                self.tasks_changed();
            }
        }
    }

    // ---- task input line ---------------------------------------------------

    pub fn start_adding(&mut self) {
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the input line. The line is cleared even when the text is blank.
    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        self.add_task(&text);
    }

    /// Leave the input line, keeping whatever was typed
    pub fn stop_adding(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    // ---- inline edit -------------------------------------------------------

    /// Open the selected task for editing, replacing any other open edit
    pub fn start_edit_selected(&mut self) {
        let Some(task) = self.tasks.tasks().get(self.selected_index) else {
            return;
        };
        self.editing = Some(EditState {
            task_id: task.id,
            buffer: task.text.clone(),
        });
        self.ui_mode = UiMode::EditingTask;
    }

    pub fn edit_add_char(&mut self, c: char) {
        if let Some(edit) = &mut self.editing {
            edit.buffer.push(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(edit) = &mut self.editing {
            edit.buffer.pop();
        }
    }

    /// Save the edit verbatim (no trimming, empty text allowed)
    pub fn save_edit(&mut self) {
        if let Some(edit) = self.editing.take() {
            if self.tasks.edit(edit.task_id, &edit.buffer) {
                self.tasks_changed();
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.ui_mode = UiMode::Normal;
    }

    // ---- delete confirmation -----------------------------------------------

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.pending_delete = Some(id);
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            if self.tasks.remove(id).is_some() {
                tracing::info!(id, "task deleted");
                self.tasks_changed();
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.ui_mode = UiMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimerPhase;
    use crate::notifications::CountingCue;
    use crate::persistence::state::{KEY_RUNNING, KEY_SECONDS_REMAINING, KEY_TASKS, KEY_THEME};
    use crate::persistence::MemoryStore;
    use rand::SeedableRng;
    use std::time::Duration;

    fn create_test_app_with(store: MemoryStore) -> (AppState, CountingCue, Instant) {
        let cue = CountingCue::default();
        let now = Instant::now();
        let app = AppState::new(
            Box::new(store),
            Box::new(cue.clone()),
            StdRng::seed_from_u64(3),
            now,
        );
        (app, cue, now)
    }

    fn create_test_app() -> (AppState, CountingCue, Instant) {
        create_test_app_with(MemoryStore::new())
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_app_state_new() {
        let (app, _, _) = create_test_app();
        assert_eq!(app.timer, TimerState::new(1500));
        assert!(app.tasks.is_empty());
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.ticker_active());
        assert!(QUOTES.contains(&app.quote));
    }

    #[test]
    fn test_five_second_countdown_signals_once() {
        let (mut app, cue, t0) = create_test_app();
        app.choose_preset(5, t0);
        app.toggle_start_pause(t0);
        assert!(app.ticker_active());

        for i in 1..=5 {
            app.on_tick(t0 + secs(i));
        }

        assert_eq!(app.timer.remaining_secs, 0);
        assert!(!app.timer.running);
        assert_eq!(app.timer.phase(), TimerPhase::Finished);
        assert_eq!(cue.count.get(), 1);
        assert!(!app.ticker_active());

        // Nothing more happens afterwards
        app.on_tick(t0 + secs(10));
        assert_eq!(app.timer.remaining_secs, 0);
        assert_eq!(cue.count.get(), 1);
    }

    #[test]
    fn test_stalled_loop_catches_up_but_stops_at_zero() {
        let (mut app, cue, t0) = create_test_app();
        app.choose_preset(3, t0);
        app.toggle_start_pause(t0);

        app.on_tick(t0 + secs(30));
        assert_eq!(app.timer.remaining_secs, 0);
        assert_eq!(cue.count.get(), 1);
        assert!(!app.ticker_active());
    }

    #[test]
    fn test_pause_stops_ticking() {
        let (mut app, _, t0) = create_test_app();
        app.toggle_start_pause(t0);
        app.on_tick(t0 + secs(2));
        assert_eq!(app.timer.remaining_secs, 1498);

        app.toggle_start_pause(t0 + secs(2));
        assert!(!app.ticker_active());
        app.on_tick(t0 + secs(10));
        assert_eq!(app.timer.remaining_secs, 1498);
    }

    #[test]
    fn test_rapid_toggles_never_double_tick() {
        let (mut app, _, t0) = create_test_app();
        for i in 0..9 {
            app.toggle_start_pause(t0 + Duration::from_millis(i * 10));
        }
        // Odd number of toggles: running, with one schedule
        assert!(app.timer.running);
        app.on_tick(t0 + Duration::from_millis(80) + secs(1));
        assert_eq!(app.timer.remaining_secs, 1499);
    }

    #[test]
    fn test_reset_and_presets() {
        let (mut app, _, t0) = create_test_app();
        app.toggle_start_pause(t0);
        app.on_tick(t0 + secs(1));

        app.reset_timer(t0 + secs(1));
        assert_eq!(app.timer, TimerState::new(1500));
        assert!(!app.ticker_active());

        app.choose_preset(600, t0);
        assert_eq!(app.timer, TimerState::new(600));
    }

    #[test]
    fn test_quick_preset_keeps_running() {
        let (mut app, _, t0) = create_test_app();
        app.toggle_start_pause(t0);
        app.quick_preset(900, t0);
        assert_eq!(app.timer.remaining_secs, 900);
        assert_eq!(app.timer.preset_secs, 900);
        assert!(app.timer.running);
        assert!(app.ticker_active());
    }

    #[test]
    fn test_timer_persisted_on_change() {
        let (mut app, _, t0) = create_test_app();
        app.toggle_start_pause(t0);
        assert_eq!(app.store().get(KEY_RUNNING).as_deref(), Some("true"));

        app.on_tick(t0 + secs(1));
        assert_eq!(app.store().get(KEY_SECONDS_REMAINING).as_deref(), Some("1499"));
    }

    #[test]
    fn test_running_timer_resumes_on_load() {
        let store = MemoryStore::with_values([
            (KEY_SECONDS_REMAINING, "10"),
            (KEY_RUNNING, "true"),
            ("selectedPreset", "300"),
        ]);
        let (mut app, _, t0) = create_test_app_with(store);
        assert!(app.ticker_active());
        app.on_tick(t0 + secs(1));
        assert_eq!(app.timer.remaining_secs, 9);
    }

    #[test]
    fn test_add_via_input_line() {
        let (mut app, _, _) = create_test_app();
        app.start_adding();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        for c in "Read".chars() {
            app.input_add_char(c);
        }
        app.submit_input();
        for c in "Write".chars() {
            app.input_add_char(c);
        }
        app.submit_input();

        let texts: Vec<&str> = app.tasks.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Write", "Read"]);
        assert!(app.input.is_empty());
        assert_eq!(app.ui_mode, UiMode::AddingTask);
    }

    #[test]
    fn test_blank_input_is_cleared_and_ignored() {
        let (mut app, _, _) = create_test_app();
        app.start_adding();
        app.input = "   ".to_string();
        app.submit_input();
        assert!(app.tasks.is_empty());
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_toggle_selected_and_ratio() {
        let (mut app, _, _) = create_test_app();
        app.add_task("Read");
        app.add_task("Write");
        app.move_selection_down();
        app.toggle_selected();

        assert!(app.tasks.tasks()[1].done);
        assert_eq!(app.tasks.done_count(), 1);
        assert_eq!(app.tasks.completion_ratio(), 0.5);
        let stored = app.store().get(KEY_TASKS).unwrap();
        assert!(stored.contains(r#""text":"Read","done":true"#));
    }

    #[test]
    fn test_inline_edit() {
        let (mut app, _, _) = create_test_app();
        app.add_task("draft");
        app.start_edit_selected();
        assert_eq!(app.ui_mode, UiMode::EditingTask);
        assert_eq!(app.editing.as_ref().unwrap().buffer, "draft");

        app.edit_backspace();
        app.edit_add_char('!');
        app.save_edit();

        assert_eq!(app.tasks.tasks()[0].text, "draf!");
        assert!(app.editing.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_edit_allows_empty_text() {
        let (mut app, _, _) = create_test_app();
        app.add_task("gone");
        app.start_edit_selected();
        for _ in 0..4 {
            app.edit_backspace();
        }
        app.save_edit();
        assert_eq!(app.tasks.tasks()[0].text, "");
    }

    #[test]
    fn test_only_one_task_editable() {
        let (mut app, _, _) = create_test_app();
        app.add_task("one");
        app.add_task("two");

        app.start_edit_selected();
        let first = app.editing.as_ref().unwrap().task_id;
        app.move_selection_down();
        app.start_edit_selected();
        let second = app.editing.as_ref().unwrap().task_id;
        assert_ne!(first, second);
    }

    #[test]
    fn test_cancel_edit_keeps_text() {
        let (mut app, _, _) = create_test_app();
        app.add_task("keep");
        app.start_edit_selected();
        app.edit_add_char('x');
        app.cancel_edit();
        assert_eq!(app.tasks.tasks()[0].text, "keep");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let (mut app, _, _) = create_test_app();
        app.add_task("a");
        app.add_task("b");

        app.request_delete_selected();
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);
        app.cancel_delete();
        assert_eq!(app.tasks.len(), 2);

        app.move_selection_down();
        app.request_delete_selected();
        app.confirm_delete();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.tasks()[0].text, "b");
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_note_and_clear() {
        let (mut app, _, _) = create_test_app();
        app.add_task("first");
        app.add_note();
        assert_eq!(app.tasks.tasks()[1].text, NOTE_TEXT);

        app.clear_tasks();
        assert!(app.tasks.is_empty());
        assert_eq!(app.store().get(KEY_TASKS).as_deref(), Some("[]"));
    }

    #[test]
    fn test_theme_persisted() {
        let (mut app, _, _) = create_test_app();
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.store().get(KEY_THEME).as_deref(), Some("light"));
    }

    #[test]
    fn test_shutdown_stops_ticker() {
        let (mut app, cue, t0) = create_test_app();
        app.toggle_start_pause(t0);
        app.shutdown();
        assert!(!app.ticker_active());
        app.on_tick(t0 + secs(5));
        assert_eq!(app.timer.remaining_secs, 1500);
        assert_eq!(cue.count.get(), 0);
    }
}
