//! Plain-text reference format.
//!
//! One lattice row per line, cells as space-separated decimal integers,
//! each line terminated by `\n`:
//!
//! ```text
//! 5 0 3
//! 0 0 2
//! 7 0 0
//! ```
//!
//! [`write_lattice`] writes to any `Write` sink and [`read_lattice`] reads
//! from any `BufRead` source, so tests can use in-memory buffers and
//! production code can use files.

use std::io::{BufRead, Write};

use crate::error::ReferenceError;
use crate::lattice::Lattice;

/// Write `lattice` in the reference format.
pub fn write_lattice<W: Write>(mut writer: W, lattice: &Lattice) -> std::io::Result<()> {
    for row in lattice.rows() {
        let mut cells = row.iter();
        if let Some(first) = cells.next() {
            write!(writer, "{first}")?;
        }
        for v in cells {
            write!(writer, " {v}")?;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Read a lattice in the reference format.
///
/// Runs of whitespace between cells are accepted. Blank lines are
/// skipped, but line numbers in errors count them.
pub fn read_lattice<R: BufRead>(reader: R) -> Result<Lattice, ReferenceError> {
    let mut rows: Vec<Vec<u32>> = Vec::new();
    let mut expected: Option<usize> = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<u32>().map_err(|_| ReferenceError::InvalidValue {
                    line: line_no,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<u32>, _>>()?;

        match expected {
            None => expected = Some(row.len()),
            Some(cols) if cols != row.len() => {
                return Err(ReferenceError::RaggedRow {
                    line: line_no,
                    expected: cols,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    Lattice::from_rows(rows)
}

/// Render `lattice` to a `String` in the reference format.
pub fn to_text(lattice: &Lattice) -> String {
    let mut buf = Vec::with_capacity(lattice.cells().len() * 2);
    // Writing into a Vec cannot fail.
    let _ = write_lattice(&mut buf, lattice);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Parse a lattice from a reference-format string.
pub fn parse(text: &str) -> Result<Lattice, ReferenceError> {
    read_lattice(text.as_bytes())
}
