//! Terminal runtime for the app store browser.

mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{draw_once, run};

/// Result type shared by the runtime and terminal helpers.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
