//! Integration tests for the end-to-end sign-in flow.
//!
//! Drives the application state through the public API the way the
//! presentation layer does: one recompute per keystroke, then submit.

use signin_tui::application::{App, AppMode, Screen};
use signin_tui::domain::{PhoneFormatter, PhoneNumber, PhoneValidator};

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.push_input(c);
    }
}

#[test]
fn test_valid_number_signs_in_and_navigates_home() {
    let mut app = App::default();

    type_text(&mut app, "0912345678");
    assert_eq!(app.input, "0912 345 678");
    assert_eq!(app.error_message, None);
    assert!(app.can_submit());

    app.submit();
    assert_eq!(app.mode, AppMode::SuccessDialog);

    app.acknowledge_success();
    assert_eq!(app.screen, Screen::Home);
    // The shared slot holds the formatted display value, as typed
    assert_eq!(app.session.phone_number(), Some("0912 345 678"));
}

#[test]
fn test_short_number_shows_error_and_blocks_submission() {
    let mut app = App::default();

    type_text(&mut app, "12345");
    assert!(app.error_message.is_some());
    assert!(!app.can_submit());

    app.submit();
    assert_eq!(app.mode, AppMode::ErrorDialog);
    assert_eq!(app.screen, Screen::SignIn);
    assert_eq!(app.session.phone_number(), None);
}

#[test]
fn test_stray_characters_are_stripped_before_validation() {
    let mut app = App::default();

    type_text(&mut app, "091234567a");
    assert_eq!(app.input, "091234567");

    type_text(&mut app, "8");
    assert_eq!(app.input, "0912 345 678");
    assert!(app.can_submit());
}

#[test]
fn test_validator_and_formatter_agree_on_the_grouped_form() {
    let number = PhoneNumber::from_input("0912 345 678");

    // Grouping spaces never affect validity
    assert!(!PhoneValidator::is_valid(number.raw()));
    assert!(PhoneValidator::is_valid(&number.cleaned()));

    // Strip-then-format round-trips to the same grouped string
    let stripped = PhoneFormatter::clean(number.raw());
    assert_eq!(PhoneFormatter::group(&stripped), "0912 345 678");
}
