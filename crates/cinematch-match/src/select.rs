//! Best-match selection over a list of candidates.

use crate::candidate::CandidateMovie;
use crate::score::score;

/// Returned when [`select_best`] is given no candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot select a best match from an empty candidate list")]
pub struct EmptyInput;

/// Pick the highest-scoring candidate for `title` and optional `year`.
///
/// The query title is lower-cased once up front; punctuation in it is kept,
/// so it only matches candidates whose normalized title carries the same
/// text. The reduction runs left to right and only replaces the running best on a strictly greater score, so
/// the earliest candidate wins a tie.
///
/// # Errors
///
/// Returns [`EmptyInput`] when `candidates` is empty.
pub fn select_best<'a>(
    candidates: &'a [CandidateMovie],
    title: &str,
    year: Option<&str>,
) -> Result<&'a CandidateMovie, EmptyInput> {
    let (first, rest) = candidates.split_first().ok_or(EmptyInput)?;
    let query = title.to_lowercase();

    let mut best = first;
    let mut best_score = score(first, &query, year);
    for candidate in rest {
        let current = score(candidate, &query, year);
        if current > best_score {
            best = candidate;
            best_score = current;
        }
    }

    Ok(best)
}
