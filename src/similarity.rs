//! Normalized similarity scoring on top of the edit distance.
//!
//! A similarity threshold translates into a distance cap for the underlying
//! sweep, so asking "are these at least 90% alike?" never costs the full
//! O(m*n) on clearly dissimilar pairs.

use tracing::trace;

use crate::levenshtein::{distance, distance_bounded};

/// Compute the similarity between two strings (0.0 = maximally dissimilar,
/// 1.0 = identical).
///
/// The score is `1 - distance / max_len` where `max_len` is the character
/// count of the longer string. Two empty strings score `1.0`: identical
/// strings are maximally similar, empty or not.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_bounded(a, b, 0.0)
}

/// Compute the similarity between two strings, with a minimum-likeness
/// threshold enabling early exit.
///
/// A `min_likeness` in `(0.0, 1.0]` derives a distance cap of
/// `ceil(max_len * (1 - min_likeness))` so the underlying sweep stops as
/// soon as the pair cannot reach the threshold. The returned score is exact
/// whenever the true similarity is at least `min_likeness`; otherwise it is
/// a pessimistic value still at or below the threshold, and a score exactly
/// equal to `min_likeness` on this path means "no more similar than that".
/// Values outside `(0.0, 1.0]` (including NaN) disable the threshold and
/// force the exact computation.
pub fn similarity_bounded(a: &str, b: &str, min_likeness: f64) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let dist = if min_likeness > 0.0 && min_likeness <= 1.0 {
        let cap = (max_len as f64 * (1.0 - min_likeness)).ceil() as usize;
        trace!(min_likeness, cap, "derived distance cap from threshold");
        // A derived cap of 0 (min_likeness == 1.0) means "no cap", which
        // degrades to the exact path and is always safe.
        distance_bounded(a, b, cap)
    } else {
        distance(a, b)
    };

    1.0 - dist as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert!((similarity("hello", "hello") - 1.0).abs() < f64::EPSILON);
        assert!((similarity("", "") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quarter_edit() {
        assert!((similarity("bite", "kite") - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_maximally_dissimilar() {
        assert!(similarity("abcd", "wxyz").abs() < f64::EPSILON);
    }

    #[test]
    fn test_range() {
        let pairs = [("hello", "world"), ("", "abc"), ("Größe", "Grosse")];
        for (a, b) in pairs {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "{a:?} vs {b:?} scored {s}");
        }
    }

    #[test]
    fn test_threshold_met_is_exact() {
        // True similarity 1 - 3/7 ≈ 0.571 clears the 0.5 threshold, so the
        // thresholded path must agree with the exact one.
        let exact = similarity("kitten", "sitting");
        let scored = similarity_bounded("kitten", "sitting", 0.5);
        assert!((scored - exact).abs() < f64::EPSILON);
    }

    #[test]
    fn test_threshold_missed_stays_below() {
        // True similarity is 0.0; the thresholded score is allowed to be
        // inexact but must never clear the threshold.
        let scored = similarity_bounded("abcd", "wxyz", 0.9);
        assert!(scored <= 0.9);
        assert!(scored >= similarity("abcd", "wxyz"));
    }

    #[test]
    fn test_out_of_range_threshold_is_exact() {
        let exact = similarity("gumbo", "gambol");
        for t in [-1.0, 0.0, 1.5, f64::NAN] {
            let scored = similarity_bounded("gumbo", "gambol", t);
            assert!((scored - exact).abs() < f64::EPSILON, "threshold {t}");
        }
    }

    #[test]
    fn test_full_threshold_degrades_to_exact() {
        // min_likeness == 1.0 derives a cap of 0, the "no cap" value.
        let exact = similarity("kitten", "sitting");
        let scored = similarity_bounded("kitten", "sitting", 1.0);
        assert!((scored - exact).abs() < f64::EPSILON);
    }
}
