//! Levenshtein edit distance algorithm.
//!
//! Rolling two-row dynamic programming with an optional distance cap. The
//! cap makes hopeless comparisons cheap: the length-difference lower bound
//! settles them before any allocation, and the row sweep stops as soon as
//! no cell can drop back under the cap.

use tracing::trace;

/// Compute the exact Levenshtein edit distance between two strings.
///
/// Returns the minimum number of single-character edits (insertions,
/// deletions, substitutions) required to transform `a` into `b`. Characters
/// are Unicode scalar values; no case folding or other normalization is
/// applied.
pub fn distance(a: &str, b: &str) -> usize {
    distance_bounded(a, b, 0)
}

/// Compute the Levenshtein edit distance between two strings, capped at
/// `max_distance`.
///
/// A `max_distance` of zero means no cap and the result is exact. With a
/// positive cap the result never exceeds `max_distance`; a result equal to
/// the cap means "the distance is at least `max_distance`", not that the
/// cap is the exact distance. Whenever the true distance is below the cap,
/// the returned value is exact.
pub fn distance_bounded(a: &str, b: &str, max_distance: usize) -> usize {
    // Equal strings need no sequence allocation at all.
    if a == b {
        return 0;
    }

    let a_units: Vec<char> = a.chars().collect();
    let b_units: Vec<char> = b.chars().collect();
    distance_of(&a_units, &b_units, max_distance)
}

/// Compute the (optionally capped) Levenshtein distance between two unit
/// slices.
///
/// This is the sweep behind [`distance`] and [`distance_bounded`], exposed
/// for callers comparing sequences other than `char`s — token lists, line
/// slices, anything `PartialEq`. Cap semantics are those of
/// [`distance_bounded`].
pub fn distance_of<T: PartialEq>(a: &[T], b: &[T], max_distance: usize) -> usize {
    // Keep the inner dimension the shorter sequence so the two working rows
    // are min(m, n) + 1 long. Distance is symmetric, so swapping roles is
    // free.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let m = outer.len();
    let n = inner.len();

    if n == 0 {
        return if max_distance > 0 { m.min(max_distance) } else { m };
    }
    if outer == inner {
        return 0;
    }

    // No edit sequence can beat the length difference, so with a cap this
    // settles the call before any row is allocated.
    let length_diff = m - n;
    if max_distance > 0 && length_diff >= max_distance {
        trace!(length_diff, max_distance, "length difference reaches cap");
        return max_distance;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(outer[i - 1] != inner[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        // The row minimum never decreases from one row to the next, so once
        // every cell sits at the cap the final distance cannot come in
        // under it.
        if max_distance > 0 && curr.iter().all(|&cell| cell >= max_distance) {
            trace!(row = i, max_distance, "row floor reaches cap, stopping early");
            return max_distance;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    if max_distance > 0 {
        prev[n].min(max_distance)
    } else {
        prev[n]
    }
}
