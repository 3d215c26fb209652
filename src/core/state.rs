//! # Application State
//!
//! Core business state for Marquee. This module contains domain data only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── results: Vec<MovieSummary>   // current search result page
//! ├── detail: Option<MovieDetail>  // record shown in the detail overlay
//! ├── modal_open: bool             // detail overlay visibility
//! ├── searching: bool              // search request in flight
//! ├── details_loading: bool        // detail request in flight
//! ├── has_searched: bool           // at least one search submitted
//! ├── notice: Option<Notice>       // latest user-facing notification
//! └── api_key: Option<String>      // OMDb credential (None = unconfigured)
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::omdb::{MovieDetail, MovieSummary};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A user-facing notification (title + body), displayed in the title bar
/// until the next one replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level: NoticeLevel::Error,
        }
    }
}

pub struct App {
    /// Current result page. Replaced wholesale by every finished search.
    pub results: Vec<MovieSummary>,
    /// Record backing the detail overlay. Loaded per selection, dropped on close.
    pub detail: Option<MovieDetail>,
    /// Detail overlay visibility. Independent of `detail`: the overlay is
    /// open-and-loading before data arrives.
    pub modal_open: bool,
    pub searching: bool,
    pub details_loading: bool,
    /// True once the first search has been submitted. Switches the main area
    /// from the landing screen to the result list, even for empty results.
    pub has_searched: bool,
    pub notice: Option<Notice>,
    /// OMDb credential. `None` means unconfigured: lookups are refused
    /// locally with a notice instead of hitting the network.
    pub api_key: Option<String>,
}

impl App {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        // Warn immediately on startup, not just when a lookup is attempted
        let notice = if config.api_key.is_none() {
            Some(Notice::error(
                "API Key Required",
                "Add your OMDb API key to ~/.marquee/config.toml or the OMDB_API_KEY env var",
            ))
        } else {
            None
        };

        Self {
            results: Vec::new(),
            detail: None,
            modal_open: false,
            searching: false,
            details_loading: false,
            has_searched: false,
            notice,
            api_key: config.api_key.clone(),
        }
    }
}
