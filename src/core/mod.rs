//! Core types shared by the field state machine and its hosts:
//! - geom: pointer positions
//! - event: host-neutral pointer and key events

pub mod event;
pub mod geom;

pub use event::{FieldEvent, KeyCode, KeyEvent, Modifiers, PointerEvent};
pub use geom::Pos;
