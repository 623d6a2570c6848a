//! Session state for the terminal browser.
//!
//! Public re-exports keep `crate::state::*` paths short.

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{Focus, Toast};
