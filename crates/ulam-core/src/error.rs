//! Error types for lattice construction and reference data.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors from validating a spiral dimension.
///
/// Construction never produces a partial lattice: any of these errors
/// means no lattice exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpiralError {
    /// The side length is zero or negative.
    InvalidDimension {
        /// The rejected side length.
        dim: i64,
    },
    /// The side length is so large that `dim * dim` no longer fits a cell value.
    DimensionTooLarge {
        /// The rejected side length.
        dim: i64,
        /// Largest accepted side length.
        max: u32,
    },
}

impl fmt::Display for SpiralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { dim } => write!(f, "invalid dimension {dim}"),
            Self::DimensionTooLarge { dim, max } => {
                write!(f, "dimension {dim} too large (max {max})")
            }
        }
    }
}

impl Error for SpiralError {}

/// Errors from reading a lattice in the plain-text reference format.
#[derive(Debug)]
pub enum ReferenceError {
    /// An I/O error occurred while reading.
    Io(io::Error),
    /// The input contained no rows.
    Empty,
    /// A token could not be parsed as a cell value.
    InvalidValue {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A row has a different number of cells than the first row.
    RaggedRow {
        /// 1-based line number.
        line: usize,
        /// Number of cells in the first row.
        expected: usize,
        /// Number of cells in this row.
        found: usize,
    },
    /// Row count and column count differ.
    NotSquare {
        /// Number of rows read.
        rows: usize,
        /// Number of cells per row.
        cols: usize,
    },
    /// The side length is outside what a [`Dimension`](crate::Dimension) accepts.
    Dimension(SpiralError),
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Empty => write!(f, "reference lattice is empty"),
            Self::InvalidValue { line, token } => {
                write!(f, "line {line}: invalid cell value '{token}'")
            }
            Self::RaggedRow {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected {expected} cells, found {found}"),
            Self::NotSquare { rows, cols } => {
                write!(f, "reference lattice is not square: {rows} rows x {cols} cols")
            }
            Self::Dimension(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ReferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Dimension(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReferenceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<SpiralError> for ReferenceError {
    fn from(e: SpiralError) -> Self {
        Self::Dimension(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_message_names_the_value() {
        let e = SpiralError::InvalidDimension { dim: -1 };
        assert_eq!(e.to_string(), "invalid dimension -1");
    }

    #[test]
    fn reference_io_error_exposes_source() {
        let e = ReferenceError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(e.source().is_some());
        assert!(ReferenceError::Empty.source().is_none());
    }

    #[test]
    fn ragged_row_message() {
        let e = ReferenceError::RaggedRow {
            line: 3,
            expected: 5,
            found: 4,
        };
        assert_eq!(e.to_string(), "line 3: expected 5 cells, found 4");
    }
}
