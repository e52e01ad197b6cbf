//! Trait definition and types for movie metadata sources.
//!
//! This module defines the [`MovieSource`] trait that the resolver talks to,
//! along with the raw OMDb record shapes it returns. Every call yields an
//! [`ApiResponse`], a tagged outcome that separates "the API answered, but
//! found nothing" from transport failures.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use cinematch_match::CandidateMovie;

use crate::error::Result;

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// Outcome of a single API call, keyed on OMDb's `Response` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Response")]
pub enum ApiResponse<T> {
    /// `"Response": "True"` -- the payload is present.
    #[serde(rename = "True")]
    Found(T),
    /// `"Response": "False"` -- the API answered but had nothing to return.
    #[serde(rename = "False")]
    Missing {
        /// API-supplied reason, e.g. `"Movie not found!"`.
        #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl<T> ApiResponse<T> {
    /// Convenience constructor for a miss with a reason.
    pub fn missing(error: impl Into<String>) -> Self {
        ApiResponse::Missing {
            error: Some(error.into()),
        }
    }

    /// Returns the payload, discarding the miss reason.
    pub fn found(self) -> Option<T> {
        match self {
            ApiResponse::Found(value) => Some(value),
            ApiResponse::Missing { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One page of broad-search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Lightweight stubs, in the order the API ranked them.
    #[serde(rename = "Search", default)]
    pub results: Vec<CandidateMovie>,
    /// Total hit count across all pages, as reported by the API.
    #[serde(rename = "totalResults", default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<String>,
}

/// A per-source rating, e.g. Rotten Tomatoes or Metacritic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Rating source name.
    #[serde(rename = "Source")]
    pub source: String,
    /// Rating as displayed by the source, e.g. `"87%"`.
    #[serde(rename = "Value")]
    pub value: String,
}

/// Full-detail movie record as returned by an identifier or exact-title lookup.
///
/// Every field is optional; OMDb omits or blanks fields freely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Rated", default)]
    pub rated: Option<String>,
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "Writer", default)]
    pub writer: Option<String>,
    #[serde(rename = "Actors", default)]
    pub actors: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Language", default)]
    pub language: Option<String>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "Awards", default)]
    pub awards: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Ratings", default)]
    pub ratings: Option<Vec<Rating>>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes", default)]
    pub imdb_votes: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
}

// ---------------------------------------------------------------------------
// Source trait
// ---------------------------------------------------------------------------

/// Async trait wrapping the movie metadata API.
///
/// Implementations return `Ok(ApiResponse::Missing { .. })` when the API
/// answers without a result and reserve `Err` for transport or decode
/// failures.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Short, lowercase identifier for this source (e.g. `"omdb"`).
    fn name(&self) -> &'static str;

    /// Returns `true` when the source has credentials and can serve requests.
    fn is_available(&self) -> bool;

    /// Strict lookup of a single title, optionally constrained by `year`.
    async fn lookup_title(
        &self,
        title: &str,
        year: Option<&str>,
        language: &str,
    ) -> Result<ApiResponse<MovieDetail>>;

    /// Broad search returning several loosely related movies.
    async fn search(&self, title: &str, year: Option<&str>) -> Result<ApiResponse<SearchPage>>;

    /// Full-detail lookup by IMDb identifier.
    async fn lookup_id(&self, imdb_id: &str, language: &str) -> Result<ApiResponse<MovieDetail>>;
}
