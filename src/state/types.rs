//! Core value types used by the browsing session.

use crate::logic::FilterField;

/// Which part of the screen receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search box and results list: typing edits the query, arrows move the selection.
    #[default]
    Search,
    /// Filter bar: arrows pick a selector and step through its options.
    Filters(FilterField),
}

/// Short-lived message shown in the footer (e.g., why a link could not open).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Message text.
    pub text: String,
    /// Remaining redraws before the message disappears.
    pub ttl: u16,
}

impl Toast {
    /// Number of event-loop ticks a toast stays visible.
    pub const DEFAULT_TTL: u16 = 30;

    /// Build a toast with the default lifetime.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ttl: Self::DEFAULT_TTL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Default focus is the search box; toasts start with the default lifetime
    fn state_types_defaults() {
        assert_eq!(Focus::default(), Focus::Search);
        let t = Toast::new("hello");
        assert_eq!(t.text, "hello");
        assert_eq!(t.ttl, Toast::DEFAULT_TTL);
    }
}
