//! Edit-distance computation and fuzzy term matching.

pub mod levenshtein;
pub mod matcher;

pub use levenshtein::{EditDistanceReport, bounded_distance, edit_distance};
pub use matcher::{FuzzyMatch, fuzzy_match};
