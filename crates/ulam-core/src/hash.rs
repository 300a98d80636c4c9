//! Lattice fingerprinting.
//!
//! Uses FNV-1a for fast, deterministic hashing of a finished lattice.
//! Fingerprints are not cryptographically secure; they are used for
//! determinism checks and for identifying a run in logs.

use crate::lattice::Lattice;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u32 (as 4 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Compute a fingerprint over a lattice.
///
/// Folds in the side length first, so two lattices with the same cell
/// bytes but different shapes never collide trivially, then every cell
/// value in row-major order.
pub fn lattice_hash(lattice: &Lattice) -> u64 {
    let mut hash = fnv1a_u32(FNV_OFFSET, lattice.dimension().get());
    for &v in lattice.cells() {
        hash = fnv1a_u32(hash, v);
    }
    hash
}
