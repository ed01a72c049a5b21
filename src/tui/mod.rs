//! Terminal host (crossterm + ratatui).
//!
//! Kept apart from `field` so the state machine can be embedded in other hosts without
//! pulling in terminal crates.

pub mod app;
pub mod crossterm;
pub mod field_view;
pub mod status;
pub mod terminal_guard;

pub use app::{AppError, DemoApp};
pub use field_view::TerminalFieldView;
