//! Candidate movie type.

/// One lightweight search hit, as returned by a broad title search.
///
/// Only the fields the scorer needs are required. The vote count is usually
/// absent from search stubs and present on full-detail records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateMovie {
    /// Display title.
    #[cfg_attr(feature = "serde", serde(rename = "Title", default))]
    pub title: String,
    /// Release year as reported by the API (may be a range such as `"2010–2012"`).
    #[cfg_attr(feature = "serde", serde(rename = "Year", default))]
    pub year: String,
    /// IMDb identifier, e.g. `"tt1375666"`.
    #[cfg_attr(feature = "serde", serde(rename = "imdbID", default))]
    pub imdb_id: String,
    /// Raw IMDb vote count, e.g. `"2,345,678"`.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "imdbVotes", default, skip_serializing_if = "Option::is_none")
    )]
    pub imdb_votes: Option<String>,
    /// Media type (`"movie"`, `"series"`, ...).
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Type", default, skip_serializing_if = "Option::is_none")
    )]
    pub kind: Option<String>,
    /// Poster URL.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Poster", default, skip_serializing_if = "Option::is_none")
    )]
    pub poster: Option<String>,
}

impl CandidateMovie {
    /// Build a candidate from its title, year and IMDb identifier.
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        imdb_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            imdb_id: imdb_id.into(),
            ..Self::default()
        }
    }

    /// Attach a raw vote count.
    pub fn with_votes(mut self, votes: impl Into<String>) -> Self {
        self.imdb_votes = Some(votes.into());
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_search_stub() {
        let json = r#"{
            "Title": "Inception",
            "Year": "2010",
            "imdbID": "tt1375666",
            "Type": "movie",
            "Poster": "https://example.com/p.jpg"
        }"#;
        let candidate: CandidateMovie = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.title, "Inception");
        assert_eq!(candidate.imdb_id, "tt1375666");
        assert_eq!(candidate.kind.as_deref(), Some("movie"));
        assert!(candidate.imdb_votes.is_none());
    }
}
