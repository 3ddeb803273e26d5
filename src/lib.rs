//! Phone sign-in flow for the terminal.
//!
//! A two-screen terminal application: a phone-number sign-in form and a
//! welcome screen that displays the entered number.

pub mod domain;
pub mod application;
pub mod presentation;

pub use domain::*;
pub use application::*;
