//! Application state management for the sign-in flow.
//!
//! This module contains the main application state: which screen is
//! showing, which dialog (if any) is open, the live contents of the phone
//! input field, and the shared session value handed from the sign-in
//! screen to the home screen.

use crate::domain::{PhoneNumber, MAX_INPUT_LEN};

/// Inline error shown under the input field while the value is invalid.
pub const INVALID_PHONE_MESSAGE: &str = "Invalid phone number.";

/// The screen currently being displayed.
///
/// Navigation between the two screens is a plain state switch; there is no
/// screen stack because the flow only ever moves between these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Phone-number entry form
    SignIn,
    /// Welcome screen showing the signed-in number
    Home,
}

/// Represents the current mode of the application.
///
/// Dialogs are blocking: while one is open, key input only dismisses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal mode - the current screen receives input
    Normal,
    /// Validation failure dialog is open
    ErrorDialog,
    /// Sign-in success dialog is open
    SuccessDialog,
}

/// Shared state visible to both screens.
///
/// A single mutable slot written once by the sign-in screen on a
/// successful submit and read by the home screen. Everything runs on one
/// thread, so there is no locking discipline around it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionState {
    phone_number: Option<String>,
}

impl SessionState {
    /// Stores the signed-in phone number, replacing any previous value.
    pub fn set_phone_number(&mut self, number: String) {
        self.phone_number = Some(number);
    }

    /// The stored phone number, if a sign-in has completed.
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }
}

/// Main application state for the two-screen sign-in flow.
///
/// # Examples
///
/// ```
/// use signin_tui::application::{App, AppMode, Screen};
///
/// let app = App::default();
/// assert_eq!(app.screen, Screen::SignIn);
/// assert_eq!(app.mode, AppMode::Normal);
/// assert!(app.input.is_empty());
/// ```
#[derive(Debug)]
pub struct App {
    /// Current screen
    pub screen: Screen,
    /// Current application mode
    pub mode: AppMode,
    /// Phone input field contents, kept in grouped display form
    pub input: String,
    /// Inline validation error, shown under the input field
    pub error_message: Option<String>,
    /// Message body for the blocking error dialog
    pub dialog_message: Option<String>,
    /// Shared session state read by the home screen
    pub session: SessionState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::SignIn,
            mode: AppMode::Normal,
            input: String::new(),
            error_message: None,
            dialog_message: None,
            session: SessionState::default(),
        }
    }
}

impl App {
    /// Replaces the phone input field with `text`, recomputing everything.
    ///
    /// The field is recomputed from scratch on every change: non-digits are
    /// stripped, the remaining digits are regrouped for display, and the
    /// inline error is set when the cleaned value is non-empty and invalid
    /// and cleared otherwise.
    pub fn set_phone_input(&mut self, text: &str) {
        let number = PhoneNumber::from_input(text);
        self.input = number.formatted();
        self.error_message = if number.cleaned().is_empty() || number.is_valid() {
            None
        } else {
            Some(INVALID_PHONE_MESSAGE.to_string())
        };
    }

    /// Appends a typed character to the input field.
    ///
    /// Non-digit characters survive only until the recompute strips them,
    /// so typing a letter leaves the field unchanged. Input is capped at
    /// [`MAX_INPUT_LEN`] characters of formatted display.
    pub fn push_input(&mut self, c: char) {
        if self.input.len() >= MAX_INPUT_LEN {
            return;
        }
        let candidate = format!("{}{}", self.input, c);
        self.set_phone_input(&candidate);
    }

    /// Removes the last character from the input field.
    ///
    /// Removing a grouping space effectively removes nothing, so the
    /// recompute is what actually decides the new display value.
    pub fn pop_input(&mut self) {
        let mut candidate = self.input.clone();
        candidate.pop();
        self.set_phone_input(&candidate);
    }

    /// Whether the submit control is enabled.
    ///
    /// Mirrors the inline error: enabled only when the field is non-empty
    /// and currently valid.
    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && self.error_message.is_none()
    }

    /// Attempts to submit the current phone number.
    ///
    /// Re-validates the cleaned value. On success the formatted display
    /// string is written into the shared session slot and the success
    /// dialog opens; on failure a blocking error dialog opens and the form
    /// keeps its contents.
    pub fn submit(&mut self) {
        let number = PhoneNumber::from_input(&self.input);
        match number.validate() {
            Ok(()) => {
                self.session.set_phone_number(self.input.clone());
                self.mode = AppMode::SuccessDialog;
            }
            Err(err) => {
                self.dialog_message = Some(err.to_string());
                self.mode = AppMode::ErrorDialog;
            }
        }
    }

    /// Closes the success dialog and navigates to the home screen.
    pub fn acknowledge_success(&mut self) {
        self.mode = AppMode::Normal;
        self.screen = Screen::Home;
    }

    /// Closes the error dialog, staying on the sign-in form.
    pub fn dismiss_error(&mut self) {
        self.mode = AppMode::Normal;
        self.dialog_message = None;
    }

    /// Navigates from the home screen back to a freshly mounted form.
    ///
    /// The input field and inline error reset to their empty mount state;
    /// the shared session value is kept.
    pub fn return_to_sign_in(&mut self) {
        self.screen = Screen::SignIn;
        self.mode = AppMode::Normal;
        self.input.clear();
        self.error_message = None;
        self.dialog_message = None;
    }
}
