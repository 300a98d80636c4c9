//! Spiral Builder: walk, sieve, and fill the lattice.

use ulam_core::{Dimension, Lattice, SpiralError};

use crate::sieve::sieve;
use crate::walk::SpiralWalk;

/// Build the `dim x dim` Ulam lattice.
///
/// Every value in `[1, dim²]` is assigned to exactly one cell by the
/// spiral walk; cells whose value is prime keep it, all others hold `0`.
///
/// Returns `Err(SpiralError::InvalidDimension)` for `dim <= 0` and
/// `Err(SpiralError::DimensionTooLarge)` when `dim²` would not fit a `u32`.
/// No partial lattice is produced on error.
///
/// # Examples
///
/// ```
/// use ulam_spiral::build_spiral;
///
/// assert_eq!(build_spiral(1).unwrap().to_rows(), vec![vec![0]]);
/// assert!(build_spiral(-1).is_err());
/// ```
pub fn build_spiral(dim: i64) -> Result<Lattice, SpiralError> {
    let dimension = Dimension::new(dim)?;
    Ok(build_lattice(dimension))
}

/// Build the Ulam lattice for an already-validated dimension.
pub fn build_lattice(dimension: Dimension) -> Lattice {
    let primes = sieve(dimension.max_value());
    let mut cells = vec![0u32; dimension.cell_count()];

    for step in SpiralWalk::new(dimension) {
        // The walk only yields in-bounds positions.
        if let Some(idx) = step.position.index(dimension) {
            cells[idx] = if primes.contains(step.value) {
                step.value
            } else {
                0
            };
        }
    }

    let lattice = Lattice::from_cells(dimension, cells);
    tracing::debug!(
        dimension = dimension.get(),
        primes = primes.len(),
        "spiral built"
    );
    lattice
}
