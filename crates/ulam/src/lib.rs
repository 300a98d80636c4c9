//! Ulam: prime spirals on a square lattice, rendered as monochrome images.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Ulam sub-crates and adds the end-to-end [`run`] pipeline driven by
//! an [`UlamConfig`].
//!
//! # Quick start
//!
//! ```rust
//! use ulam::prelude::*;
//!
//! let lattice = build_spiral(7).unwrap();
//! assert_eq!(lattice.to_rows()[3], vec![0, 19, 0, 0, 2, 11, 0]);
//!
//! let img = render(&lattice);
//! assert_eq!(img.dimensions(), (7, 7));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ulam-core` | Dimension, positions, directions, lattice, reference text format |
//! | [`spiral`] | `ulam-spiral` | Prime sieve, spiral walk, spiral builder |
//! | [`render`] | `ulam-render` | Grayscale rendering and image output |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod pipeline;

pub use config::{ConfigError, UlamConfig, DEFAULT_DIMENSION};
pub use pipeline::{run, RunSummary, UlamError};

/// Core types and the reference text format (`ulam-core`).
pub use ulam_core as types;

/// Prime sieve and spiral construction (`ulam-spiral`).
pub use ulam_spiral as spiral;

/// Grayscale rendering and image output (`ulam-render`).
pub use ulam_render as render;

/// Common imports for typical Ulam usage.
///
/// ```rust
/// use ulam::prelude::*;
/// ```
pub mod prelude {
    pub use ulam_core::{Dimension, Direction, Lattice, Position, SpiralError};
    pub use ulam_render::{render, write_image, RenderError};
    pub use ulam_spiral::{build_spiral, sieve, spiral_order, PrimeSet};

    pub use crate::config::{UlamConfig, DEFAULT_DIMENSION};
    pub use crate::pipeline::{run, RunSummary, UlamError};
}
