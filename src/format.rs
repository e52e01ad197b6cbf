//! Stable output shape for a resolved movie.

use serde::{Deserialize, Serialize};

use crate::metadata::{MovieDetail, Rating};

/// The record handed back to callers after a successful resolution.
///
/// A plain projection of [`MovieDetail`] onto stable field names. Absent
/// fields are omitted from the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMovie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<Vec<Rating>>,
    #[serde(rename = "imdbRating", skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes", skip_serializing_if = "Option::is_none")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "imdbID", skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl From<MovieDetail> for ResolvedMovie {
    fn from(d: MovieDetail) -> Self {
        Self {
            title: d.title,
            year: d.year,
            rated: d.rated,
            released: d.released,
            runtime: d.runtime,
            genre: d.genre,
            director: d.director,
            writer: d.writer,
            actors: d.actors,
            plot: d.plot,
            language: d.language,
            country: d.country,
            awards: d.awards,
            poster: d.poster,
            ratings: d.ratings,
            imdb_rating: d.imdb_rating,
            imdb_votes: d.imdb_votes,
            imdb_id: d.imdb_id,
            kind: d.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ApiResponse;

    #[test]
    fn projects_raw_field_names() {
        let raw = serde_json::json!({
            "Response": "True",
            "Title": "The Shawshank Redemption",
            "Year": "1994",
            "Rated": "R",
            "Director": "Frank Darabont",
            "Ratings": [{"Source": "Rotten Tomatoes", "Value": "91%"}],
            "imdbRating": "9.3",
            "imdbVotes": "2,900,000",
            "imdbID": "tt0111161",
            "Type": "movie",
            "BoxOffice": "$28,767,189"
        });
        let detail = serde_json::from_value::<ApiResponse<MovieDetail>>(raw)
            .unwrap()
            .found()
            .unwrap();

        let json = serde_json::to_value(ResolvedMovie::from(detail)).unwrap();
        assert_eq!(json["title"], "The Shawshank Redemption");
        assert_eq!(json["rated"], "R");
        assert_eq!(json["director"], "Frank Darabont");
        assert_eq!(json["ratings"][0]["Source"], "Rotten Tomatoes");
        assert_eq!(json["imdbRating"], "9.3");
        assert_eq!(json["imdbVotes"], "2,900,000");
        assert_eq!(json["imdbID"], "tt0111161");
        assert_eq!(json["type"], "movie");
    }

    #[test]
    fn absent_fields_are_omitted() {
        let movie = ResolvedMovie::from(MovieDetail {
            title: Some("Inception".into()),
            ..MovieDetail::default()
        });
        let json = serde_json::to_value(&movie).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(json["title"], "Inception");
    }
}
