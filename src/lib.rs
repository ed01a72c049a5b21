//! dragnum - click-to-edit, drag-to-adjust numeric fields
//!
//! Modules:
//! - core: host-neutral events and positions
//! - field: the per-field interaction state machine and its host traits
//! - controller: one field per target input
//! - services: settings and on-disk locations
//! - tui: terminal host (crossterm + ratatui), behind the `tui` feature

pub mod controller;
pub mod core;
pub mod field;
pub mod services;

#[cfg(feature = "tui")]
pub mod tui;

pub use controller::DraggableNumbers;
pub use field::{FieldOptions, Mode, NumericField};
