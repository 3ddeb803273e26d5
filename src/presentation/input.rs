use crate::application::{App, AppMode, Screen};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => match app.screen {
                Screen::SignIn => Self::handle_sign_in(app, key),
                Screen::Home => Self::handle_home(app, key),
            },
            AppMode::ErrorDialog => Self::handle_error_dialog(app, key),
            AppMode::SuccessDialog => Self::handle_success_dialog(app, key),
        }
    }

    fn handle_sign_in(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                // Submit is disabled while the field is empty; an invalid
                // non-empty attempt raises the blocking dialog.
                if !app.input.is_empty() {
                    app.submit();
                }
            }
            KeyCode::Backspace => {
                app.pop_input();
            }
            KeyCode::Char(c) => {
                app.push_input(c);
            }
            _ => {}
        }
    }

    fn handle_home(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char('b') => {
                app.return_to_sign_in();
            }
            KeyCode::Char('q') => {
                // Handled by the main loop
            }
            _ => {}
        }
    }

    fn handle_error_dialog(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => {
                app.dismiss_error();
            }
            _ => {}
        }
    }

    fn handle_success_dialog(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => {
                app.acknowledge_success();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{App, AppMode, Screen};

    fn type_digits(app: &mut App, digits: &str) {
        for c in digits.chars() {
            InputHandler::handle_key_event(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_typed_digits_are_grouped_live() {
        let mut app = App::default();

        type_digits(&mut app, "0912");
        assert_eq!(app.input, "0912");

        type_digits(&mut app, "345678");
        assert_eq!(app.input, "0912 345 678");
        assert_eq!(app.error_message, None);
    }

    #[test]
    fn test_enter_with_valid_number_opens_success_dialog() {
        let mut app = App::default();
        type_digits(&mut app, "0912345678");

        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::SuccessDialog);
        assert_eq!(app.session.phone_number(), Some("0912 345 678"));

        // Dismissing the success dialog navigates to the home screen
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_enter_with_invalid_number_opens_error_dialog() {
        let mut app = App::default();
        type_digits(&mut app, "12345");

        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::ErrorDialog);
        assert_eq!(app.screen, Screen::SignIn);
        assert_eq!(app.session.phone_number(), None);

        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.input, "12345");
    }

    #[test]
    fn test_enter_with_empty_field_does_nothing() {
        let mut app = App::default();

        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.screen, Screen::SignIn);
    }

    #[test]
    fn test_letters_are_stripped_from_input() {
        let mut app = App::default();
        type_digits(&mut app, "09a12b");

        assert_eq!(app.input, "0912");
    }

    #[test]
    fn test_backspace_removes_last_digit() {
        let mut app = App::default();
        type_digits(&mut app, "0912");

        InputHandler::handle_key_event(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input, "091");
    }

    #[test]
    fn test_home_screen_navigates_back_to_fresh_form() {
        let mut app = App::default();
        type_digits(&mut app, "0912345678");
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::Home);

        InputHandler::handle_key_event(&mut app, KeyCode::Char('b'), KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::SignIn);
        assert_eq!(app.input, "");
        assert_eq!(app.session.phone_number(), Some("0912 345 678"));
    }
}
