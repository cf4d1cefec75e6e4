use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence::KeyValueStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Input => handle_input_mode(app, key),
        UiMode::OptionPanel => handle_option_panel_mode(app, key),
        UiMode::EditModal => handle_edit_modal_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_delete_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Toggle complete
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),

        // Focus the new-todo field
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus_input(),

        // Option panel for the selected todo
        KeyCode::Char('o') | KeyCode::Char('O') => app.open_options(),

        // Dismiss the snackbar early
        KeyCode::Esc if app.snackbar.is_visible() => app.snackbar.close(),

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}

/// Handle keys while typing a new todo
fn handle_input_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_new_todo(),
        KeyCode::Esc => app.blur_input(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_add_char(c)
        }
        _ => {}
    }
    false
}

/// Handle keys in the option panel
fn handle_option_panel_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('e') | KeyCode::Char('E') => app.start_edit(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.request_delete(),
        KeyCode::Esc | KeyCode::Char('q') => app.close_options(),
        _ => {}
    }
    false
}

/// Handle keys in the edit modal
fn handle_edit_modal_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.edit_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_add_char(c)
        }
        _ => {}
    }
    false
}

/// Handle keys while a delete is awaiting confirmation
fn handle_confirm_delete_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        _ => app.cancel_delete(),
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryKvStore, Settings};
    use crate::repository::TodoRepository;

    fn create_test_app() -> AppState<MemoryKvStore> {
        let mut repo = TodoRepository::initialize(MemoryKvStore::new());
        let _ = repo.add("Test todo").unwrap();
        AppState::new(repo, &Settings::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_str(app: &mut AppState<MemoryKvStore>, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))));

        let mut app = create_test_app();
        app.focus_input();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c));
    }

    #[test]
    fn test_q_is_text_while_typing() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert!(!handle_key(&mut app, key(KeyCode::Char('q'))));
        assert_eq!(app.input, "q");
    }

    #[test]
    fn test_handle_add_todo() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.ui_mode, UiMode::Input);

        type_str(&mut app, "New");
        handle_key(&mut app, key(KeyCode::Backspace));
        type_str(&mut app, "w!");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.repo.len(), 2);
        assert_eq!(app.repo.list()[0].content, "New!");

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_navigation_and_toggle() {
        let mut app = create_test_app();
        let _ = app.repo.add("Second").unwrap();

        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_index, 1);
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.repo.find_by_id(1).unwrap().is_completed);

        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_handle_edit_flow() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('o')));
        assert_eq!(app.ui_mode, UiMode::OptionPanel);
        handle_key(&mut app, key(KeyCode::Char('e')));
        assert_eq!(app.ui_mode, UiMode::EditModal);

        type_str(&mut app, " v2");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.repo.list()[0].content, "Test todo v2");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_delete_flow() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('o')));
        handle_key(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);
        handle_key(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.repo.len(), 1);
        assert_eq!(app.ui_mode, UiMode::Normal);

        handle_key(&mut app, key(KeyCode::Char('o')));
        handle_key(&mut app, key(KeyCode::Char('d')));
        handle_key(&mut app, key(KeyCode::Char('y')));
        assert!(app.repo.is_empty());
        assert!(!app.option_panel.is_open());
    }

    #[test]
    fn test_options_on_empty_list_stay_closed() {
        let mut app = AppState::new(
            TodoRepository::initialize(MemoryKvStore::new()),
            &Settings::default(),
        );
        handle_key(&mut app, key(KeyCode::Char('o')));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.option_panel.is_open());
    }
}
