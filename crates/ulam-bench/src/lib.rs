//! Benchmark profiles for the Ulam spiral crates.
//!
//! - [`PROFILE_DIMENSIONS`]: lattice sides swept by every benchmark group
//! - [`sieve_bound`]: the sieve limit a given side requires
//! - [`reference_lattice`]: a pre-built lattice for render-only benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ulam_core::{Dimension, Lattice};

/// Lattice sides swept by the benchmarks, smallest first.
pub const PROFILE_DIMENSIONS: [u32; 6] = [128, 256, 512, 1024, 2048, 4096];

/// Largest value placed on a `side x side` lattice.
pub fn sieve_bound(side: u32) -> u32 {
    side * side
}

/// Build the lattice for `side`.
///
/// # Panics
///
/// Panics if `side` is not a valid [`Dimension`]; every entry of
/// [`PROFILE_DIMENSIONS`] is.
pub fn reference_lattice(side: u32) -> Lattice {
    let dim = Dimension::new(i64::from(side)).expect("benchmark dimension must be valid");
    ulam_spiral::build_lattice(dim)
}
