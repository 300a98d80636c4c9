//! The finished square lattice.

use crate::dimension::Dimension;
use crate::error::ReferenceError;
use crate::hash::lattice_hash;
use std::ops::Index;

/// A `D x D` grid of cell values in row-major order.
///
/// Each cell holds the prime placed there by the spiral walk, or `0`.
/// A lattice is immutable once built.
///
/// # Examples
///
/// ```
/// use ulam_core::Lattice;
///
/// let lattice = Lattice::from_rows(vec![vec![2, 0], vec![3, 0]]).unwrap();
/// assert_eq!(lattice.dimension().get(), 2);
/// assert_eq!(lattice[(1, 0)], 3);
/// assert_eq!(lattice.prime_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lattice {
    dimension: Dimension,
    cells: Vec<u32>,
}

impl Lattice {
    /// Wrap a row-major cell buffer.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != dimension.cell_count()`.
    pub fn from_cells(dimension: Dimension, cells: Vec<u32>) -> Self {
        assert_eq!(
            cells.len(),
            dimension.cell_count(),
            "cell buffer does not match a {dimension}x{dimension} lattice"
        );
        Self { dimension, cells }
    }

    /// Build a lattice from nested rows, validating the shape.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, ReferenceError> {
        let Some(first) = rows.first() else {
            return Err(ReferenceError::Empty);
        };
        let cols = first.len();
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ReferenceError::RaggedRow {
                    line: i + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        if rows.len() != cols {
            return Err(ReferenceError::NotSquare {
                rows: rows.len(),
                cols,
            });
        }
        let dimension = Dimension::new(rows.len() as i64)?;
        Ok(Self { dimension, cells })
    }

    /// Side length.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Cell value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        let side = self.dimension.side();
        if row < side && col < side {
            Some(self.cells[row * side + col])
        } else {
            None
        }
    }

    /// Whether the cell at `(row, col)` holds a prime. Out-of-bounds cells are unmarked.
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|v| v != 0)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.dimension.side())
    }

    /// Copy into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Number of nonzero (prime) cells.
    pub fn prime_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// FNV-1a fingerprint of the side length and every cell.
    pub fn fingerprint(&self) -> u64 {
        lattice_hash(self)
    }
}

impl Index<(usize, usize)> for Lattice {
    type Output = u32;

    fn index(&self, (row, col): (usize, usize)) -> &u32 {
        let side = self.dimension.side();
        assert!(
            row < side && col < side,
            "cell ({row}, {col}) out of bounds for a {side}x{side} lattice"
        );
        &self.cells[row * side + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_empty() {
        assert!(matches!(
            Lattice::from_rows(vec![]),
            Err(ReferenceError::Empty)
        ));
        assert!(matches!(
            Lattice::from_rows(vec![vec![]]),
            Err(ReferenceError::NotSquare { rows: 1, cols: 0 })
        ));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Lattice::from_rows(vec![vec![0, 0], vec![0]]).unwrap_err();
        assert!(matches!(
            err,
            ReferenceError::RaggedRow {
                line: 2,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn from_rows_rejects_rectangles() {
        let err = Lattice::from_rows(vec![vec![0, 0, 0], vec![0, 0, 0]]).unwrap_err();
        assert!(matches!(err, ReferenceError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn from_cells_panics_on_length_mismatch() {
        let _ = Lattice::from_cells(Dimension::new(2).unwrap(), vec![0; 3]);
    }

    #[test]
    fn accessors_agree() {
        let l = Lattice::from_rows(vec![vec![5, 0, 3], vec![0, 0, 2], vec![7, 0, 0]]).unwrap();
        assert_eq!(l.get(0, 2), Some(3));
        assert_eq!(l.get(3, 0), None);
        assert_eq!(l[(2, 0)], 7);
        assert!(l.is_marked(1, 2));
        assert!(!l.is_marked(1, 1));
        assert!(!l.is_marked(9, 9));
        assert_eq!(l.rows().len(), 3);
        assert_eq!(l.to_rows()[1], vec![0, 0, 2]);
        assert_eq!(l.prime_count(), 4);
        assert_eq!(l.cells().len(), 9);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds_panics() {
        let l = Lattice::from_rows(vec![vec![0]]).unwrap();
        let _ = l[(0, 1)];
    }
}
