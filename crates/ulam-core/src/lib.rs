//! Core types for Ulam spiral generation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data model shared by the rest of the workspace: the validated
//! [`Dimension`], grid [`Position`]s and [`Direction`]s, the finished
//! [`Lattice`], error types, and the plain-text reference format.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dimension;
pub mod error;
pub mod geometry;
pub mod hash;
pub mod lattice;
pub mod text;

pub use dimension::Dimension;
pub use error::{ReferenceError, SpiralError};
pub use geometry::{Direction, Position};
pub use hash::lattice_hash;
pub use lattice::Lattice;
