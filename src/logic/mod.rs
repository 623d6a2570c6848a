//! Core non-UI logic: the catalog filter engine and session helpers.
//!
//! `filter`, `featured`, `distinct_people` and `has_recent_update` are pure
//! functions over catalog records. The `*_selection`/`cycle_filter` helpers
//! apply them to a live [`crate::state::AppState`].

pub mod filter;
pub mod people;
pub mod recent;
pub mod selection;

// Re-export public APIs to keep import paths short (crate::logic::...)
pub use filter::{
    FilterField, FilterState, apply_filters_preserve_selection, featured, filter,
    result_count_label,
};
pub use people::distinct_people;
pub use recent::{RECENT_UPDATE_DAYS, has_recent_update, has_update_within};
pub use selection::{clear_filters, cycle_filter, jump_selection, move_selection};
