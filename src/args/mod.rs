//! Command-line argument parsing and handling.

pub mod definition;
pub mod list;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, process_args};
pub use utils::determine_log_level;
