//! Shared fixtures for unit tests.
//!
//! Compiled only for `cargo test` (see `lib.rs`). Keeps the per-module test
//! blocks short: most of them need a populated [`App`], a couple of result
//! rows, or a full detail record, and nothing else.

use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::omdb::{DEFAULT_BASE_URL, MovieDetail, MovieSummary, SearchPage};

/// A complete OMDb detail payload as it comes off the wire, including keys
/// this crate ignores (`imdbID`, `Metascore`, `Ratings`).
pub const DETAIL_JSON: &str = r#"{
  "Title": "The Shawshank Redemption",
  "Year": "1994",
  "Rated": "R",
  "Released": "14 Oct 1994",
  "Runtime": "142 min",
  "Genre": "Drama",
  "Director": "Frank Darabont",
  "Writer": "Stephen King, Frank Darabont",
  "Actors": "Tim Robbins, Morgan Freeman, Bob Gunton",
  "Plot": "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
  "Language": "English",
  "Country": "United States",
  "Awards": "Nominated for 7 Oscars. 21 wins & 42 nominations total",
  "Poster": "https://m.media-amazon.com/images/M/MV5BMDAyY2FhYjctNDc5OS00MDNlLThiMGUtY2UxYWVkNGY2ZjljXkEyXkFqcGc@._V1_SX300.jpg",
  "Ratings": [
    { "Source": "Internet Movie Database", "Value": "9.3/10" },
    { "Source": "Rotten Tomatoes", "Value": "89%" }
  ],
  "Metascore": "82",
  "imdbRating": "9.3",
  "imdbVotes": "2,545,177",
  "imdbID": "tt0111161",
  "Type": "movie",
  "DVD": "N/A",
  "BoxOffice": "$28,767,189",
  "Production": "N/A",
  "Website": "N/A",
  "Response": "True"
}"#;

/// Resolved configuration with a key present and posters enabled.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        api_key: Some("test-key".to_string()),
        base_url: DEFAULT_BASE_URL.to_string(),
        posters: true,
    }
}

/// Fresh application state seeded from [`test_config`].
pub fn test_app() -> App {
    App::from_config(&test_config())
}

/// A search result row with plausible filler for the fields tests ignore.
pub fn summary(imdb_id: &str, title: &str) -> MovieSummary {
    MovieSummary {
        title: title.to_string(),
        year: "1982".to_string(),
        imdb_id: imdb_id.to_string(),
        media_type: "movie".to_string(),
        poster: "https://m.media-amazon.com/images/M/poster.jpg".to_string(),
    }
}

/// The record [`DETAIL_JSON`] deserializes to.
pub fn detail() -> MovieDetail {
    serde_json::from_str(DETAIL_JSON).unwrap()
}

pub fn page(movies: Vec<MovieSummary>, total: &str) -> SearchPage {
    SearchPage {
        movies,
        total_results: total.to_string(),
    }
}
