//! Ulam spiral construction.
//!
//! The two pieces of real logic in the workspace live here:
//!
//! - [`sieve`]: Sieve of Eratosthenes producing a [`PrimeSet`]
//! - [`build_spiral`]: walks a `D x D` grid inward from the bottom-right
//!   corner, counting down from `D²`, and keeps only the primes
//!
//! The walk itself is exposed as [`SpiralWalk`] (via [`spiral_order`]) so
//! the visitation order can be inspected without any primality logic.
//!
//! # Examples
//!
//! ```
//! use ulam_spiral::build_spiral;
//!
//! let lattice = build_spiral(3).unwrap();
//! assert_eq!(
//!     lattice.to_rows(),
//!     vec![vec![5, 0, 3], vec![0, 0, 2], vec![7, 0, 0]]
//! );
//! assert!(build_spiral(0).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod sieve;
pub mod walk;

pub use builder::{build_lattice, build_spiral};
pub use sieve::{sieve, PrimeSet};
pub use walk::{spiral_order, SpiralWalk, Step};
