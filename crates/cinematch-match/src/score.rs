//! Match scoring for a single candidate.

use crate::candidate::CandidateMovie;
use crate::normalize::{is_title_match, normalize};

/// Plausibility of a candidate. Higher is better, unbounded above.
pub type MatchScore = f64;

const EXACT_TITLE: MatchScore = 10.0;
const PARTIAL_TITLE: MatchScore = 5.0;
const YEAR_MATCH: MatchScore = 3.0;

/// Score `candidate` against an already-normalized query title.
///
/// The terms are additive:
///
/// - `+10` when the titles normalize to the same string, otherwise `+5` when
///   one normalized title contains the other;
/// - `+3` when `year` is given and equals the candidate's year string;
/// - `+log10(votes)` where a missing or malformed vote count counts as 1.
///
/// ```
/// use cinematch_match::{score, CandidateMovie};
///
/// let exact = CandidateMovie::new("Inception", "2010", "tt1375666");
/// assert_eq!(score(&exact, "inception", Some("2010")), 13.0);
/// ```
pub fn score(candidate: &CandidateMovie, normalized_query: &str, year: Option<&str>) -> MatchScore {
    let mut total = 0.0;

    if is_title_match(&candidate.title, normalized_query) {
        total += EXACT_TITLE;
    } else {
        let title = normalize(&candidate.title);
        if title.contains(normalized_query) || normalized_query.contains(title.as_str()) {
            total += PARTIAL_TITLE;
        }
    }

    if year.is_some_and(|y| y == candidate.year) {
        total += YEAR_MATCH;
    }

    total + (parse_votes(candidate.imdb_votes.as_deref()) as f64).log10()
}

/// Parse a raw vote count such as `"2,345,678"`.
///
/// Thousands separators are ignored. Missing, malformed, zero or negative
/// counts yield 1 so the popularity term contributes nothing.
pub fn parse_votes(raw: Option<&str>) -> u64 {
    raw.map(|v| v.trim().replace(',', ""))
        .and_then(|v| v.parse::<i64>().ok())
        .map_or(1, |n| n.max(1) as u64)
}
