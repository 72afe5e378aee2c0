use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTask => handle_input_form_mode(app, key),
        UiMode::ConfirmPurge => handle_confirm_purge_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Any key press clears the last status message
    app.status = None;
    let now = Instant::now();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        // Ctrl+C quits; other control chords are not bound
        return Ok(key.code == KeyCode::Char('c'));
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Timer controls
        KeyCode::Char(' ') => {
            app.toggle_timer(now);
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart_timer(now);
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.skip_phase(now);
            Ok(false)
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            app.back_phase(now);
            Ok(false)
        }

        // Target task
        KeyCode::Enter => {
            app.set_target_selected();
            Ok(false)
        }
        KeyCode::Char('u') | KeyCode::Char('U') => {
            app.clear_target();
            Ok(false)
        }

        // Task edits
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_task();
            Ok(false)
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.toggle_checked_selected();
            Ok(false)
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.toggle_removed_selected();
            Ok(false)
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.request_empty_trash();
            Ok(false)
        }

        // Cycle filter
        KeyCode::Tab | KeyCode::Char('f') | KeyCode::Char('F') => {
            app.cycle_filter();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in the empty-trash confirmation
fn handle_confirm_purge_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_empty_trash();
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_modal();
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys in input form mode (adding or editing a task)
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }

        // Switch between fields
        KeyCode::Tab => {
            app.input_form_toggle_field();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }

        // Add character
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::{Phase, TaskFilter};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, key(code)).unwrap()
    }

    fn type_str(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn test_app() -> AppState {
        AppState::new(&Config {
            notify: false,
            ..Config::default()
        })
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_q_in_form_is_text() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.input_form.as_ref().unwrap().title, "q");
    }

    fn press_ctrl(app: &mut AppState, c: char) -> bool {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)).unwrap()
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = test_app();
        assert!(press_ctrl(&mut app, 'c'));
    }

    #[test]
    fn test_ctrl_chords_are_not_commands() {
        let mut app = test_app();
        app.add_task("Keep", "", "", 1);

        assert!(!press_ctrl(&mut app, 'd'));
        assert!(!press_ctrl(&mut app, 'q'));
        assert!(!app.tasks[0].removed);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_ctrl_chords_do_not_type_in_form() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "ab");
        assert!(!press_ctrl(&mut app, 'x'));
        assert_eq!(app.input_form.as_ref().unwrap().title, "ab");
    }

    #[test]
    fn test_add_task_through_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Write report");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "doc");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "core");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "3");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "Write report");
        assert_eq!(app.tasks[0].project, "core");
        assert_eq!(app.tasks[0].estimate_count, 3);
    }

    #[test]
    fn test_space_toggles_timer() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.countdown.is_running());
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.countdown.is_running());
    }

    #[test]
    fn test_skip_and_back() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.phase.phase(), Phase::Break);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.phase.phase(), Phase::Work);
    }

    #[test]
    fn test_trash_and_empty() {
        let mut app = test_app();
        app.add_task("Old", "", "", 1);
        app.add_task("Keep", "", "", 1);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        for _ in 0..3 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.filter, TaskFilter::Trash);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.ui_mode, UiMode::ConfirmPurge);

        // Declining keeps the trash
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.len(), 2);

        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "Keep");
    }

    #[test]
    fn test_enter_sets_target() {
        let mut app = test_app();
        app.add_task("Focus", "", "", 2);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.target_task().map(|t| t.title.as_str()), Some("Focus"));

        press(&mut app, KeyCode::Char('u'));
        assert!(app.target.is_none());
    }
}
