//! Application layer managing state and the sign-in workflow.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing screen navigation, the live input field, and the shared
//! session value.

pub mod state;

pub use state::*;
