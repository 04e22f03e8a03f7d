//! Fuzzy term matching against a vocabulary.

use serde::Serialize;

use crate::fuzzy::levenshtein::bounded_distance;

/// A vocabulary term within the requested edit distance of a probe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FuzzyMatch {
    /// The matching vocabulary term.
    pub term: String,
    /// Edit distance between the normalized probe and the term.
    pub distance: usize,
}

/// Find every vocabulary term within `max_distance` edits of `probe`.
///
/// The probe is lowercased before comparison, matching the normalization
/// applied to indexed terms. Results are exactly the set of terms with
/// distance at most `max_distance`, sorted ascending by distance and then
/// lexicographically by term.
///
/// The scan visits terms one at a time; callers needing cancellation can
/// bound the vocabulary iterator they pass in.
///
/// # Examples
///
/// ```
/// use pilum::fuzzy::matcher::fuzzy_match;
///
/// let matches = fuzzy_match("quik", ["quick", "fox", "brown"], 2);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].term, "quick");
/// assert_eq!(matches[0].distance, 1);
/// ```
pub fn fuzzy_match<'a, I>(probe: &str, vocabulary: I, max_distance: usize) -> Vec<FuzzyMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    let probe = probe.to_lowercase();

    let mut matches: Vec<FuzzyMatch> = vocabulary
        .into_iter()
        .filter_map(|term| {
            bounded_distance(&probe, term, max_distance).map(|distance| FuzzyMatch {
                term: term.to_string(),
                distance,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        a.distance
            .cmp(&b.distance)
            .then_with(|| a.term.cmp(&b.term))
    });
    matches
}
