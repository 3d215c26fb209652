//! # Actions
//!
//! Everything that can happen in Marquee becomes an `Action`.
//! User submits a search? That's `Action::SubmitSearch`.
//! OMDb responds? That's `Action::SearchFinished`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` for the caller to run. No side
//! effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.
//! And debuggable: log every action, replay the exact session.

use log::{debug, warn};

use crate::core::state::{App, Notice};
use crate::omdb::{MovieDetail, OmdbError, SearchPage};

/// Every state transition in the app.
#[derive(Debug)]
pub enum Action {
    /// User submitted a search query (already trimmed and non-empty).
    SubmitSearch(String),
    /// A search task finished. `query` is echoed back for the notice text:
    /// a stale completion reports the query it belongs to, not the latest.
    SearchFinished {
        query: String,
        outcome: Result<SearchPage, OmdbError>,
    },
    /// User picked a result card; payload is the IMDb id.
    SelectMovie(String),
    /// A detail task finished.
    DetailsFinished(Result<MovieDetail, OmdbError>),
    /// User dismissed the detail overlay.
    CloseModal,
    Quit,
}

/// Side effects `update` asks the caller to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn a search request for the query.
    Search(String),
    /// Spawn a detail request for the IMDb id.
    FetchDetails(String),
    /// Start poster artwork download for the open overlay.
    FetchPoster(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SubmitSearch(query) => {
            if app.api_key.is_none() {
                app.notice = Some(Notice::error(
                    "API Key Missing",
                    "Please add your OMDB API key to search for movies",
                ));
                return Effect::None;
            }
            app.searching = true;
            app.has_searched = true;
            Effect::Search(query)
        }

        Action::SearchFinished { query, outcome } => {
            match outcome {
                Ok(page) => {
                    app.results = page.movies;
                    app.notice = Some(Notice::info(
                        "Search Successful",
                        format!("Found {} movies for \"{}\"", page.total_results, query),
                    ));
                }
                Err(OmdbError::Provider { message }) => {
                    app.results.clear();
                    app.notice = Some(Notice::error(
                        "No Results",
                        message.unwrap_or_else(|| "No movies found for your search".to_string()),
                    ));
                }
                Err(err) => {
                    warn!("Search for {:?} failed: {}", query, err);
                    app.results.clear();
                    app.notice = Some(Notice::error(
                        "Search Failed",
                        "Failed to search movies. Please check your internet connection.",
                    ));
                }
            }
            // Cleared on every path, success or failure
            app.searching = false;
            Effect::None
        }

        Action::SelectMovie(imdb_id) => {
            if app.api_key.is_none() {
                app.notice = Some(Notice::error(
                    "API Key Missing",
                    "Please add your OMDB API key to view movie details",
                ));
                return Effect::None;
            }
            // The overlay enters its loading state before the fetch starts
            app.details_loading = true;
            app.modal_open = true;
            app.detail = None;
            Effect::FetchDetails(imdb_id)
        }

        Action::DetailsFinished(outcome) => {
            let effect = match outcome {
                Ok(detail) => {
                    let poster = detail.poster.clone();
                    app.detail = Some(detail);
                    // A completion arriving after CloseModal still stores the
                    // record (invisible while closed); only an open overlay
                    // warrants artwork download.
                    if app.modal_open {
                        Effect::FetchPoster(poster)
                    } else {
                        Effect::None
                    }
                }
                Err(OmdbError::Provider { message }) => {
                    app.notice = Some(Notice::error(
                        "Failed to Load Details",
                        message.unwrap_or_else(|| "Could not load movie details".to_string()),
                    ));
                    app.modal_open = false;
                    Effect::None
                }
                Err(err) => {
                    warn!("Detail fetch failed: {}", err);
                    app.notice = Some(Notice::error(
                        "Error Loading Details",
                        "Failed to load movie details. Please try again.",
                    ));
                    app.modal_open = false;
                    Effect::None
                }
            };
            // Cleared on every path, success or failure
            app.details_loading = false;
            effect
        }

        Action::CloseModal => {
            debug!("Detail overlay dismissed");
            app.modal_open = false;
            app.detail = None;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
