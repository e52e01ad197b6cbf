//! # cinematch-match
//!
//! Title normalization and best-match selection for movie search results.
//!
//! A broad title search against a movie database usually returns several
//! loosely related candidates. This crate picks the single most plausible one
//! with a small additive score: exact or partial title agreement, year
//! agreement, and a popularity term derived from the vote count.
//!
//! ## Quick Start
//!
//! ```
//! use cinematch_match::{select_best, CandidateMovie};
//!
//! let candidates = vec![
//!     CandidateMovie::new("Inception: The Cobol Job", "2010", "tt5295894"),
//!     CandidateMovie::new("Inception", "2010", "tt1375666"),
//! ];
//!
//! let best = select_best(&candidates, "Inception", Some("2010")).unwrap();
//! assert_eq!(best.imdb_id, "tt1375666");
//! ```
//!
//! ## Comparing titles
//!
//! ```
//! use cinematch_match::{is_title_match, normalize};
//!
//! assert_eq!(normalize("  Amélie! "), "amélie");
//! assert!(is_title_match("Spider-Man", "spiderman"));
//! ```

mod candidate;
mod normalize;
mod score;
mod select;

pub use candidate::CandidateMovie;
pub use normalize::{is_title_match, normalize};
pub use score::{parse_votes, score, MatchScore};
pub use select::{select_best, EmptyInput};
