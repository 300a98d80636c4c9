//! Grid positions and the four walking directions.

use crate::dimension::Dimension;
use std::ops::Add;

/// A cell coordinate `(row, col)`, 0-indexed from the top-left corner.
///
/// Positions may temporarily lie outside a lattice while a walk probes
/// its next move; use [`in_bounds`](Position::in_bounds) before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, growing southwards.
    pub row: i32,
    /// Column index, growing eastwards.
    pub col: i32,
}

impl Position {
    /// Create a position.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The bottom-right corner of a lattice, where every spiral starts.
    pub fn bottom_right(dim: Dimension) -> Self {
        let last = dim.get() as i32 - 1;
        Self::new(last, last)
    }

    /// Translate by one unit in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.offset();
        Self::new(self.row + dr, self.col + dc)
    }

    /// Whether both coordinates lie in `[0, dim)`.
    pub fn in_bounds(self, dim: Dimension) -> bool {
        let n = dim.get() as i64;
        let (r, c) = (i64::from(self.row), i64::from(self.col));
        r >= 0 && r < n && c >= 0 && c < n
    }

    /// Row-major cell index, or `None` when out of bounds.
    pub fn index(self, dim: Dimension) -> Option<usize> {
        if self.in_bounds(dim) {
            Some(self.row as usize * dim.side() + self.col as usize)
        } else {
            None
        }
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, dir: Direction) -> Position {
        self.step(dir)
    }
}

/// One of the four unit moves on the grid.
///
/// The spiral turns through these in the fixed order of
/// [`Direction::CYCLE`]. Reordering it changes the spiral's shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One column left (col - 1).
    West,
    /// One row up (row - 1).
    North,
    /// One column right (col + 1).
    East,
    /// One row down (row + 1).
    South,
}

impl Direction {
    /// Turning order, starting from the initial heading.
    pub const CYCLE: [Direction; 4] = [
        Direction::West,
        Direction::North,
        Direction::East,
        Direction::South,
    ];

    /// Returns the (row_offset, col_offset) for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
        }
    }

    /// The next heading in [`Direction::CYCLE`], wrapping South back to West.
    pub fn turn(self) -> Direction {
        match self {
            Direction::West => Direction::North,
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim(n: i64) -> Dimension {
        Dimension::new(n).unwrap()
    }

    // ── Direction ───────────────────────────────────────────────

    #[test]
    fn turn_follows_cycle_and_wraps() {
        for (i, d) in Direction::CYCLE.iter().enumerate() {
            assert_eq!(d.turn(), Direction::CYCLE[(i + 1) % 4]);
        }
        assert_eq!(Direction::South.turn(), Direction::West);
    }

    #[test]
    fn four_turns_is_identity() {
        for d in Direction::CYCLE {
            assert_eq!(d.turn().turn().turn().turn(), d);
        }
    }

    #[test]
    fn offsets_are_unit_vectors() {
        for d in Direction::CYCLE {
            let (dr, dc) = d.offset();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
    }

    // ── Position ────────────────────────────────────────────────

    #[test]
    fn step_and_add_agree() {
        let p = Position::new(2, 2);
        assert_eq!(p + Direction::West, Position::new(2, 1));
        assert_eq!(p + Direction::North, Position::new(1, 2));
        assert_eq!(p.step(Direction::East), Position::new(2, 3));
        assert_eq!(p.step(Direction::South), Position::new(3, 2));
    }

    #[test]
    fn bounds_checks_both_axes() {
        let d = dim(3);
        assert!(Position::new(0, 0).in_bounds(d));
        assert!(Position::new(2, 2).in_bounds(d));
        assert!(!Position::new(-1, 0).in_bounds(d));
        assert!(!Position::new(0, 3).in_bounds(d));
        assert!(!Position::new(3, 0).in_bounds(d));
    }

    #[test]
    fn index_is_row_major() {
        let d = dim(4);
        assert_eq!(Position::new(0, 0).index(d), Some(0));
        assert_eq!(Position::new(1, 2).index(d), Some(6));
        assert_eq!(Position::new(3, 3).index(d), Some(15));
        assert_eq!(Position::new(0, -1).index(d), None);
    }

    #[test]
    fn bottom_right_corner() {
        assert_eq!(Position::bottom_right(dim(1)), Position::new(0, 0));
        assert_eq!(Position::bottom_right(dim(201)), Position::new(200, 200));
    }
}
