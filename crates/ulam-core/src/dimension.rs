//! The validated side length of a square lattice.

use crate::error::SpiralError;
use std::fmt;

/// Side length of a square Ulam lattice.
///
/// Always at least 1, and small enough that the largest cell value
/// (`side * side`) fits in a `u32`.
///
/// # Examples
///
/// ```
/// use ulam_core::{Dimension, SpiralError};
///
/// let dim = Dimension::new(7).unwrap();
/// assert_eq!(dim.cell_count(), 49);
/// assert_eq!(dim.max_value(), 49);
///
/// assert_eq!(
///     Dimension::new(0),
///     Err(SpiralError::InvalidDimension { dim: 0 })
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dimension(u32);

impl Dimension {
    /// Largest accepted side length: `MAX * MAX` is the largest square below `u32::MAX`.
    pub const MAX: u32 = u16::MAX as u32;

    /// Validate a requested side length.
    ///
    /// Returns `Err(SpiralError::InvalidDimension)` for `dim <= 0` and
    /// `Err(SpiralError::DimensionTooLarge)` above [`Dimension::MAX`].
    pub fn new(dim: i64) -> Result<Self, SpiralError> {
        if dim <= 0 {
            return Err(SpiralError::InvalidDimension { dim });
        }
        if dim > i64::from(Self::MAX) {
            return Err(SpiralError::DimensionTooLarge {
                dim,
                max: Self::MAX,
            });
        }
        Ok(Self(dim as u32))
    }

    /// The side length.
    pub fn get(self) -> u32 {
        self.0
    }

    /// The side length as an index bound.
    pub fn side(self) -> usize {
        self.0 as usize
    }

    /// Number of cells, `side * side`.
    pub fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Largest value placed in the lattice, `side * side`.
    pub fn max_value(self) -> u32 {
        self.0 * self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Dimension {
    type Error = SpiralError;

    fn try_from(dim: i64) -> Result<Self, Self::Error> {
        Self::new(dim)
    }
}

impl From<Dimension> for u32 {
    fn from(dim: Dimension) -> Self {
        dim.0
    }
}
