//! `likeness` — bounded Levenshtein edit distance and normalized similarity.
//!
//! Computes the minimum number of single-character insertions, deletions,
//! and substitutions required to transform one string into another,
//! optionally capped at a maximum acceptable distance for early exit, plus
//! a similarity score normalized to `0.0..=1.0`.
//!
//! Comparison granularity is Unicode scalar values (`char`): one unit per
//! scalar, no grapheme segmentation, no case folding or other normalization.
//! Callers wanting a different granularity can tokenize themselves and feed
//! the slices to [`levenshtein::distance_of`].
//!
//! # Examples
//!
//! ```
//! use likeness::{distance, similarity};
//!
//! assert_eq!(distance("kitten", "sitting"), 3);
//! assert_eq!(similarity("bite", "kite"), 0.75);
//! ```
//!
//! A minimum-likeness threshold lets a caller ask "are these at least this
//! alike?" without paying for the exact distance of clearly dissimilar
//! pairs:
//!
//! ```
//! use likeness::similarity_bounded;
//!
//! let score = similarity_bounded("kitten", "sitting", 0.5);
//! assert!(score >= 0.5);
//! ```

pub mod levenshtein;
pub mod similarity;

pub use levenshtein::{distance, distance_bounded, distance_of};
pub use similarity::{similarity, similarity_bounded};
