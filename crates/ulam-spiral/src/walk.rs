//! The inward spiral walk over a square grid.
//!
//! The walk starts in the bottom-right corner heading west with the
//! counter at `D²`. After each cell it tries to continue straight; if the
//! next cell is off the grid or already visited it turns once, following
//! [`Direction::CYCLE`], and steps in the new heading without re-checking.
//! For any `D` that forced step always lands on a fresh in-bounds cell;
//! debug builds assert it.

use std::iter::FusedIterator;

use ulam_core::{Dimension, Direction, Position, SpiralError};

/// One visited cell: where the walk was and the counter value assigned there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// The visited cell.
    pub position: Position,
    /// Value assigned to the cell, counting down from `D²` to 1.
    pub value: u32,
}

/// Iterator over the cells of a spiral, in visitation order.
///
/// Yields exactly `D²` [`Step`]s, each position once, values `D²` down to `1`.
///
/// # Examples
///
/// ```
/// use ulam_core::Position;
/// use ulam_spiral::spiral_order;
///
/// let order: Vec<Position> = spiral_order(2).unwrap().map(|s| s.position).collect();
/// assert_eq!(
///     order,
///     vec![
///         Position::new(1, 1),
///         Position::new(1, 0),
///         Position::new(0, 0),
///         Position::new(0, 1),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct SpiralWalk {
    dimension: Dimension,
    position: Position,
    direction: Direction,
    remaining: u32,
    visited: Vec<bool>,
    turns: usize,
}

impl SpiralWalk {
    /// Start a walk at the bottom-right corner of a `dimension x dimension` grid.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            position: Position::bottom_right(dimension),
            direction: Direction::West,
            remaining: dimension.max_value(),
            visited: vec![false; dimension.cell_count()],
            turns: 0,
        }
    }

    /// Side length of the grid being walked.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Number of direction changes taken so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    fn is_open(&self, pos: Position) -> bool {
        pos.index(self.dimension).is_some_and(|i| !self.visited[i])
    }

    /// Move to the next cell, turning once if straight ahead is blocked.
    fn advance(&mut self) {
        let candidate = self.position + self.direction;
        if self.is_open(candidate) {
            self.position = candidate;
            return;
        }

        self.direction = self.direction.turn();
        self.turns += 1;
        self.position = self.position + self.direction;
        debug_assert!(
            self.is_open(self.position),
            "forced turn to {:?} landed on {:?}, which is off-grid or already visited",
            self.direction,
            self.position,
        );
    }
}

impl Iterator for SpiralWalk {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.position.index(self.dimension)?;
        let step = Step {
            position: self.position,
            value: self.remaining,
        };

        self.remaining -= 1;
        self.visited[idx] = true;
        // No move follows the final cell.
        if self.remaining > 0 {
            self.advance();
        }
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SpiralWalk {}

impl FusedIterator for SpiralWalk {}

/// Start a spiral walk over a `dim x dim` grid.
///
/// Returns `Err(SpiralError::InvalidDimension)` for `dim <= 0`.
pub fn spiral_order(dim: i64) -> Result<SpiralWalk, SpiralError> {
    Dimension::new(dim).map(SpiralWalk::new)
}
