//! # OMDb Data Model
//!
//! Typed views of the two payload shapes OMDb serves: the search envelope
//! (`?s=`) and the full detail record (`?i=`). Wire names are PascalCase
//! with a handful of camelCase stragglers (`imdbID`, `imdbRating`,
//! `imdbVotes`, `totalResults`), so the exceptions are pinned with explicit
//! renames instead of trusting the blanket rule.
//!
//! OMDb never omits a known field on success; it fills it with the string
//! sentinel `"N/A"` instead. Presentation layers decide what to do with the
//! sentinel — stored values are never rewritten.

use serde::{Deserialize, Serialize};

/// Provider sentinel for "no data" string fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// True when a field carries the provider's "no data" sentinel.
///
/// The match is exact: `"N/A"` and nothing else.
pub fn is_unavailable(value: &str) -> bool {
    value == NOT_AVAILABLE
}

/// One entry of a search result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieSummary {
    pub title: String,
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    /// Poster URL, or `"N/A"` when OMDb has no artwork.
    pub poster: String,
}

/// Wire envelope of the search endpoint.
///
/// `Response` is a string flag, not a boolean: `"True"` marks success and
/// anything else is a logical failure described by `Error`. Failure bodies
/// omit `Search` and `totalResults` entirely, so both default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub search: Vec<MovieSummary>,
    #[serde(rename = "totalResults", default)]
    pub total_results: String,
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// A successfully unwrapped page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub movies: Vec<MovieSummary>,
    /// Total match count as reported by the provider (a decimal string;
    /// may exceed `movies.len()` since only the first page is fetched).
    pub total_results: String,
}

/// Full record for a single title, served by the detail endpoint.
///
/// Superset of [`MovieSummary`]. Every string field may carry the `"N/A"`
/// sentinel; `box_office` is additionally absent altogether for some
/// titles. `response`/`error` are the same inline envelope the search
/// payload uses — the client consults them before handing the record out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieDetail {
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    #[serde(default)]
    pub box_office: Option<String>,
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn test_search_response_parses_wire_names() {
        let body = r#"{
            "Search": [
                {
                    "Title": "Blade Runner",
                    "Year": "1982",
                    "imdbID": "tt0083658",
                    "Type": "movie",
                    "Poster": "https://m.media-amazon.com/images/br.jpg"
                }
            ],
            "totalResults": "35",
            "Response": "True"
        }"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, "True");
        assert_eq!(parsed.total_results, "35");
        assert_eq!(parsed.search.len(), 1);
        assert_eq!(parsed.search[0].imdb_id, "tt0083658");
        assert_eq!(parsed.search[0].media_type, "movie");
        assert_eq!(parsed.error, None);
    }

    #[test]
    fn test_search_failure_body_defaults_to_empty_page() {
        // Failure bodies carry no Search or totalResults field at all
        let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, "False");
        assert_eq!(parsed.error.as_deref(), Some("Movie not found!"));
        assert!(parsed.search.is_empty());
        assert_eq!(parsed.total_results, "");
    }

    #[test]
    fn test_movie_summary_serializes_exact_field_names() {
        let summary = test_support::summary("tt0083658", "Blade Runner");
        let value = serde_json::to_value(&summary).unwrap();
        let obj = value.as_object().unwrap();

        assert!(obj.contains_key("Title"));
        assert!(obj.contains_key("Year"));
        assert!(obj.contains_key("imdbID"));
        assert!(obj.contains_key("Type"));
        assert!(obj.contains_key("Poster"));
    }

    #[test]
    fn test_movie_detail_parses_full_record() {
        let parsed: MovieDetail =
            serde_json::from_str(test_support::DETAIL_JSON).unwrap();
        assert_eq!(parsed.title, "The Shawshank Redemption");
        assert_eq!(parsed.imdb_rating, "9.3");
        assert_eq!(parsed.imdb_votes, "2,545,177");
        assert_eq!(parsed.media_type, "movie");
        assert_eq!(parsed.box_office.as_deref(), Some("$28,767,189"));
        assert_eq!(parsed.response, "True");
        assert_eq!(parsed.error, None);
    }

    #[test]
    fn test_movie_detail_box_office_may_be_absent() {
        let mut value: serde_json::Value =
            serde_json::from_str(test_support::DETAIL_JSON).unwrap();
        value.as_object_mut().unwrap().remove("BoxOffice");

        let parsed: MovieDetail = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.box_office, None);
    }

    #[test]
    fn test_is_unavailable_is_exact() {
        assert!(is_unavailable("N/A"));
        assert!(!is_unavailable("n/a"));
        assert!(!is_unavailable(""));
        assert!(!is_unavailable("N/A "));
    }
}
