/// A pointer position in host units (pixels, terminal cells, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pos {
    pub x: f64,
    pub y: f64,
}

impl Pos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Flips the y-axis so that moving the pointer up yields a positive change.
    pub fn invert_y(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Per-axis change from `from` to `self`.
    pub fn delta_from(self, from: Pos) -> Pos {
        Pos::new(self.x - from.x, self.y - from.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/geom.rs"]
mod tests;
