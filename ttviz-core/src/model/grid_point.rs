use serde::{Deserialize, Serialize};

/// alpha of a cell that is not de-emphasized by a selection
pub const FULL_ALPHA: f64 = 1.0;

/// one rendered cell of a 7x7 adjustment grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    /// coverage level axis, 0..=6
    pub col: usize,
    /// uncertainty level axis, 0..=6, row 0 at the bottom
    pub row: usize,
    /// travel time adjustment in minutes. NaN when the source cell was empty.
    pub value: f64,
    /// visual emphasis in [0, 1], set by [crate::grid::apply_highlight]
    pub highlight_alpha: f64,
}

impl GridPoint {
    pub fn new(col: usize, row: usize, value: f64) -> Self {
        Self {
            col,
            row,
            value,
            highlight_alpha: FULL_ALPHA,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_nan()
    }
}
