//! Test fixtures and oracles for Ulam spiral development.
//!
//! - [`golden_201`]: the 201x201 reference lattice shipped in `data/`
//! - [`textbook_7x7`]: the seven-by-seven spiral from the standard construction
//! - [`is_prime_trial_division`]: an independent primality oracle

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use ulam_core::{text, Lattice};

/// Reference lattice for `dim = 201`, in the plain-text reference format.
pub const GOLDEN_201: &str = include_str!("../data/uspiral_201.txt");

/// Side length of [`GOLDEN_201`].
pub const GOLDEN_201_DIM: i64 = 201;

/// FNV-1a fingerprint of the 201x201 reference lattice.
pub const GOLDEN_201_FINGERPRINT: u64 = 0xc38a_32bf_552a_27b7;

/// Parse the 201x201 reference lattice.
///
/// Panics if the fixture is malformed; that is a broken checkout, not a test failure.
pub fn golden_201() -> Lattice {
    match text::parse(GOLDEN_201) {
        Ok(lattice) => lattice,
        Err(e) => panic!("golden fixture data/uspiral_201.txt is malformed: {e}"),
    }
}

/// The 7x7 spiral with the primes kept and everything else zeroed.
pub fn textbook_7x7() -> Vec<Vec<u32>> {
    vec![
        vec![37, 0, 0, 0, 0, 0, 31],
        vec![0, 17, 0, 0, 0, 13, 0],
        vec![0, 0, 5, 0, 3, 0, 29],
        vec![0, 19, 0, 0, 2, 11, 0],
        vec![41, 0, 7, 0, 0, 0, 0],
        vec![0, 0, 0, 23, 0, 0, 0],
        vec![43, 0, 0, 0, 47, 0, 0],
    ]
}

/// Primality by trial division. Slow, obviously correct.
pub fn is_prime_trial_division(v: u32) -> bool {
    if v < 2 {
        return false;
    }
    let v = u64::from(v);
    let mut d = 2u64;
    while d * d <= v {
        if v % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// A lattice holding a single prime in the top-left corner.
pub fn corner_prime(dim: usize) -> Lattice {
    let mut rows = vec![vec![0u32; dim]; dim];
    rows[0][0] = 2;
    match Lattice::from_rows(rows) {
        Ok(lattice) => lattice,
        Err(e) => panic!("corner_prime({dim}): {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trial_division_small_values() {
        let primes: Vec<u32> = (0..30).filter(|&v| is_prime_trial_division(v)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn golden_fixture_parses() {
        let g = golden_201();
        assert_eq!(i64::from(g.dimension().get()), GOLDEN_201_DIM);
        assert_eq!(g.fingerprint(), GOLDEN_201_FINGERPRINT);
    }

    #[test]
    fn corner_prime_marks_only_origin() {
        let l = corner_prime(3);
        assert!(l.is_marked(0, 0));
        assert_eq!(l.prime_count(), 1);
    }
}
