//! Library entry for appstore exposing the catalog, filter engine and TUI for integration tests.

pub mod app;
pub mod args;
pub mod catalog;
pub mod events;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
