//! Reference-lattice tests: the builder must reproduce known spirals cell for cell.

use ulam_core::text;
use ulam_spiral::{build_spiral, spiral_order};
use ulam_test_utils::{golden_201, textbook_7x7, GOLDEN_201_DIM, GOLDEN_201_FINGERPRINT};

#[test]
fn dim_201_matches_golden_file() {
    let expected = golden_201();
    let actual = build_spiral(GOLDEN_201_DIM).unwrap();

    assert_eq!(actual.dimension(), expected.dimension());
    for (r, (got, want)) in actual.rows().zip(expected.rows()).enumerate() {
        for (c, (g, w)) in got.iter().zip(want).enumerate() {
            assert_eq!(g, w, "cell ({r}, {c}) differs");
        }
    }
    assert_eq!(actual.fingerprint(), GOLDEN_201_FINGERPRINT);
}

#[test]
fn dim_201_serializes_to_golden_text() {
    let actual = build_spiral(GOLDEN_201_DIM).unwrap();
    assert_eq!(text::to_text(&actual), ulam_test_utils::GOLDEN_201);
}

#[test]
fn dim_7_matches_textbook_spiral() {
    assert_eq!(build_spiral(7).unwrap().to_rows(), textbook_7x7());
}

#[test]
fn dim_1_is_single_zero() {
    assert_eq!(build_spiral(1).unwrap().to_rows(), vec![vec![0]]);
}

#[test]
fn non_positive_dims_produce_nothing() {
    for dim in [0, -1, -201, i64::MIN] {
        assert!(build_spiral(dim).is_err(), "dim = {dim}");
        assert!(spiral_order(dim).is_err(), "dim = {dim}");
    }
}

#[test]
fn golden_centre_and_corners() {
    let g = golden_201();
    // 1 sits at the centre and is not prime; 2 is one step east.
    assert_eq!(g[(100, 100)], 0);
    assert_eq!(g[(100, 101)], 2);
    // 201² is composite.
    assert_eq!(g[(200, 200)], 0);
}
