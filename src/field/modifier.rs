use super::options::FieldOptions;
use crate::core::event::Modifiers;

/// Increment granularity selected by the keyboard qualifiers of a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Modifier {
    #[default]
    None,
    Large,
    Small,
}

impl Modifier {
    /// Shift selects the large step and wins over ctrl, which selects the small step.
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.shift {
            Modifier::Large
        } else if modifiers.ctrl {
            Modifier::Small
        } else {
            Modifier::None
        }
    }
}

/// Signed value change for one drag step.
///
/// The magnitude comes from `modifier`. The sign follows `delta`, and a zero delta counts
/// as positive.
pub fn number_offset(delta: f64, modifier: Modifier, options: &FieldOptions) -> f64 {
    let increment = options.multiplier(modifier);
    if delta < 0.0 {
        -increment
    } else {
        increment
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/modifier.rs"]
mod tests;
