use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// Sampling resolution of a generated field.
///
/// Independent from the noise `scale`, which only decides how much of the
/// lattice the grid spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells, or `None` if the count overflows `usize`.
    pub const fn checked_len(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Reject grids with a zero dimension or an unrepresentable cell count.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.width == 0 {
            return Err(ConfigurationError::EmptyGrid {
                axis: "width",
                value: self.width,
            });
        }
        if self.height == 0 {
            return Err(ConfigurationError::EmptyGrid {
                axis: "height",
                value: self.height,
            });
        }
        if self.checked_len().is_none() {
            return Err(ConfigurationError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(64, 64)
    }
}

/// Integer lattice cell containing a continuous coordinate.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug)]
pub struct LatticeCell {
    pub x: i64,
    pub y: i64,
}

impl LatticeCell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Cell containing `(x, y)`, using floor so negative coordinates land in
    /// the cell below rather than being truncated toward zero.
    pub fn containing(x: f64, y: f64) -> Self {
        Self {
            x: x.floor() as i64,
            y: y.floor() as i64,
        }
    }
}
