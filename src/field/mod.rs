//! Numeric field interaction.
//!
//! ## Modules
//!
//! - `numeric` - the per-field state machine (label/edit modes, drag sessions)
//! - `drag` - click/drag classification and dominant-axis deltas
//! - `modifier` - modifier keys to signed increments
//! - `number` - permissive parsing and display formatting
//! - `options` - threshold and multiplier configuration
//! - `host` - traits a host implements to embed fields
//! - `listeners` - subscription registry hosts route events through
//! - `headless` - in-memory view for tests

pub mod drag;
pub mod headless;
pub mod host;
pub mod listeners;
pub mod modifier;
pub mod number;
mod numeric;
pub mod options;

pub use host::{EventSource, FieldId, FieldView, ListenerId, Part, PointerCapture, Subscription};
pub use listeners::ListenerRegistry;
pub use modifier::{number_offset, Modifier};
pub use numeric::{Mode, NumericField};
pub use options::{FieldOptions, OptionsError};
