use crate::app::AppState;
use crate::domain::{UiMode, PRESETS, QUICK_PRESETS};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key, now),
        UiMode::AddingTask => handle_task_input_mode(app, key),
        UiMode::EditingTask => handle_edit_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_delete_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    match key.code {
        // Start/pause. Text fields never reach this branch, so typing a
        // space in the input line or an edit is unaffected.
        KeyCode::Char(' ') => app.toggle_start_pause(now),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(now),

        // Presets
        KeyCode::Char('1') => app.choose_preset(PRESETS[0].secs, now),
        KeyCode::Char('2') => app.choose_preset(PRESETS[1].secs, now),
        KeyCode::Char('3') => app.choose_preset(PRESETS[2].secs, now),

        // Quick actions
        KeyCode::Char('4') => app.quick_preset(QUICK_PRESETS[0].secs, now),
        KeyCode::Char('5') => app.quick_preset(QUICK_PRESETS[1].secs, now),
        KeyCode::Char('n') | KeyCode::Char('N') => app.add_note(),

        // Task list
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char('X') => app.toggle_selected(),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('i') => app.start_adding(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.start_edit_selected(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.request_delete_selected()
        }
        KeyCode::Char('C') => app.clear_tasks(),

        // Theme
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}

/// Handle keys while the task input line has focus
fn handle_task_input_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.stop_adding(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_add_char(c),
        _ => {}
    }
    false
}

/// Handle keys while a task is being edited inline
fn handle_edit_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.save_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.edit_backspace(),
        KeyCode::Char(c) => app.edit_add_char(c),
        _ => {}
    }
    false
}

/// Handle keys in the "Delete this task?" prompt
fn handle_confirm_delete_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::CountingCue;
    use crate::persistence::MemoryStore;
    use crossterm::event::KeyModifiers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_test_app() -> AppState {
        AppState::new(
            Box::new(MemoryStore::new()),
            Box::new(CountingCue::default()),
            StdRng::seed_from_u64(9),
            Instant::now(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, key(code), Instant::now())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_space_toggles_timer_in_normal_mode() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.timer.running);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.timer.running);
    }

    #[test]
    fn test_space_is_text_in_input_line() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Read one chapter");
        assert!(!app.timer.running);
        assert_eq!(app.input, "Read one chapter");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tasks.tasks()[0].text, "Read one chapter");
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_space_is_text_in_edit() {
        let mut app = create_test_app();
        app.add_task("one");
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, " two");
        assert!(!app.timer.running);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tasks.tasks()[0].text, "one two");
    }

    #[test]
    fn test_preset_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.timer.preset_secs, 600);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.timer.preset_secs, 300);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.timer.preset_secs, 900);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.timer.remaining_secs, 300);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.timer.preset_secs, 1500);
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();
        app.add_task("Task 1");
        app.add_task("Task 2");

        assert_eq!(app.selected_index, 0);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index, 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index, 1);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_delete_flow() {
        let mut app = create_test_app();
        app.add_task("doomed");

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.tasks.len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.tasks.is_empty());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_toggle_done_and_theme() {
        let mut app = create_test_app();
        app.add_task("task");
        press(&mut app, KeyCode::Char('x'));
        assert!(app.tasks.tasks()[0].done);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, crate::domain::Theme::Light);
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        assert!(press(&mut app, KeyCode::Char('q')));

        // 'q' is plain text inside the input line
        press(&mut app, KeyCode::Char('a'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.input, "q");
    }
}
