//! Determinism across the whole pipeline.
//!
//! Each test: run the same config twice into separate files → compare the
//! written bytes and the reported fingerprints.

use std::fs;
use std::path::Path;

use ulam::prelude::*;
use ulam::types::text;
use ulam_test_utils::{golden_201, GOLDEN_201_FINGERPRINT};

// ── Helpers ─────────────────────────────────────────────────────

fn run_into(dir: &Path, name: &str, dim: i64) -> (RunSummary, Vec<u8>, String) {
    let image = dir.join(format!("{name}.png"));
    let txt = dir.join(format!("{name}.txt"));
    let summary = run(&UlamConfig::new(dim, &image).with_text_output(&txt)).unwrap();
    (
        summary,
        fs::read(image).unwrap(),
        fs::read_to_string(txt).unwrap(),
    )
}

// ── Tests ───────────────────────────────────────────────────────

#[test]
fn repeated_runs_write_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    for dim in [1, 2, 57, 201] {
        let (a, image_a, text_a) = run_into(dir.path(), &format!("a{dim}"), dim);
        let (b, image_b, text_b) = run_into(dir.path(), &format!("b{dim}"), dim);
        assert_eq!(a.fingerprint, b.fingerprint, "dim {dim}");
        assert_eq!(a.prime_count, b.prime_count, "dim {dim}");
        assert_eq!(image_a, image_b, "dim {dim}");
        assert_eq!(text_a, text_b, "dim {dim}");
    }
}

#[test]
fn text_dump_round_trips_to_the_built_lattice() {
    let dir = tempfile::tempdir().unwrap();
    let (summary, _, dumped) = run_into(dir.path(), "ulam", 201);

    let parsed = text::parse(&dumped).unwrap();
    assert_eq!(parsed, golden_201());
    assert_eq!(parsed.fingerprint(), summary.fingerprint);
    assert_eq!(summary.fingerprint, GOLDEN_201_FINGERPRINT);
}

#[test]
fn rendered_pixels_follow_the_lattice() {
    let dir = tempfile::tempdir().unwrap();
    let (_, bytes, _) = run_into(dir.path(), "ulam", 31);

    let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
    let lattice = build_spiral(31).unwrap();
    for (x, y, px) in decoded.enumerate_pixels() {
        let marked = lattice.is_marked(y as usize, x as usize);
        assert_eq!(px.0[0] == 0, marked, "pixel ({x}, {y})");
    }
}

#[test]
fn prime_count_grows_with_dimension() {
    let dir = tempfile::tempdir().unwrap();
    let counts: Vec<usize> = [3, 10, 100]
        .into_iter()
        .map(|dim| run_into(dir.path(), &format!("d{dim}"), dim).0.prime_count)
        .collect();
    // pi(9), pi(100), pi(10_000)
    assert_eq!(counts, vec![4, 25, 1_229]);
}
