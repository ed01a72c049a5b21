use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::modifier::Modifier;

pub const DEFAULT_DRAG_THRESHOLD: f64 = 10.0;
pub const DEFAULT_SMALL_MULTIPLIER: f64 = 0.1;
pub const DEFAULT_LARGE_MULTIPLIER: f64 = 10.0;

/// Tuning knobs for a numeric field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Minimum movement on either axis, in pointer units, before a press becomes a drag.
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f64,
    /// Step multiplier while the small modifier (ctrl) is held.
    #[serde(default = "default_small_multiplier")]
    pub small_multiplier: f64,
    /// Step multiplier while the large modifier (shift) is held.
    #[serde(default = "default_large_multiplier")]
    pub large_multiplier: f64,
}

fn default_drag_threshold() -> f64 {
    DEFAULT_DRAG_THRESHOLD
}

fn default_small_multiplier() -> f64 {
    DEFAULT_SMALL_MULTIPLIER
}

fn default_large_multiplier() -> f64 {
    DEFAULT_LARGE_MULTIPLIER
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            small_multiplier: DEFAULT_SMALL_MULTIPLIER,
            large_multiplier: DEFAULT_LARGE_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("drag_threshold must be a finite number >= 0, got {0}")]
    DragThreshold(f64),

    #[error("{name} must be a finite number > 0, got {value}")]
    Multiplier { name: &'static str, value: f64 },
}

impl FieldOptions {
    /// Step multiplier for the given modifier; the unmodified step is 1.
    pub fn multiplier(&self, modifier: Modifier) -> f64 {
        match modifier {
            Modifier::None => 1.0,
            Modifier::Large => self.large_multiplier,
            Modifier::Small => self.small_multiplier,
        }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0.0 {
            return Err(OptionsError::DragThreshold(self.drag_threshold));
        }
        for (name, value) in [
            ("small_multiplier", self.small_multiplier),
            ("large_multiplier", self.large_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OptionsError::Multiplier { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/options.rs"]
mod tests;
