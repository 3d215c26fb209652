//! # OMDb HTTP Client
//!
//! Thin async client for the two lookups the app performs (title search,
//! full detail fetch) plus a raw poster download.
//!
//! OMDb signals logical failure inside the payload (`"Response": "False"`),
//! sometimes with a non-2xx status attached and sometimes without. Bodies
//! are therefore parsed before the status code is consulted; the status only
//! matters once the body turns out not to be an OMDb payload at all.

use std::fmt;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::omdb::types::{MovieDetail, SearchPage, SearchResponse};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Errors that can occur while talking to OMDb.
#[derive(Debug)]
pub enum OmdbError {
    /// Network-level failure (DNS, connection refused, body read).
    Network(String),
    /// OMDb answered with `"Response": "False"`; `message` is its `Error` text.
    Provider { message: Option<String> },
    /// Non-2xx response whose body is not an OMDb payload.
    Api { status: u16, message: String },
    /// 2xx response whose body could not be deserialized.
    Parse(String),
}

impl fmt::Display for OmdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OmdbError::Network(msg) => write!(f, "network error: {msg}"),
            OmdbError::Provider { message } => {
                write!(f, "OMDb error: {}", message.as_deref().unwrap_or("request refused"))
            }
            OmdbError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            OmdbError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for OmdbError {}

/// Minimal wire envelope shared by every OMDb payload.
///
/// Failure bodies carry nothing but these two fields, so this is the only
/// shape that can be parsed before knowing whether the call succeeded.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Envelope {
    response: String,
    #[serde(default)]
    error: Option<String>,
}

/// OMDb API client.
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OmdbClient {
    /// Creates a new OMDb client.
    ///
    /// # Arguments
    /// * `api_key` - OMDb API key
    /// * `base_url` - Optional custom base URL (defaults to omdbapi.com)
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Title search: `?apikey=<key>&s=<title>&type=movie`.
    ///
    /// Only the first result page is requested; `total_results` may report
    /// more matches than the page contains.
    pub async fn search(&self, title: &str) -> Result<SearchPage, OmdbError> {
        debug!("OMDb search: {:?}", title);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", title),
                ("type", "movie"),
            ])
            .send()
            .await
            .map_err(|e| OmdbError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OmdbError::Network(e.to_string()))?;

        // The search envelope tolerates failure bodies (Search/totalResults
        // default), so a single parse covers both outcomes.
        match serde_json::from_str::<SearchResponse>(&body) {
            Ok(parsed) if parsed.response == "True" => {
                info!(
                    "Search {:?} matched {} of {} titles",
                    title,
                    parsed.search.len(),
                    parsed.total_results
                );
                Ok(SearchPage {
                    movies: parsed.search,
                    total_results: parsed.total_results,
                })
            }
            Ok(parsed) => {
                info!("OMDb rejected search {:?}: {:?}", title, parsed.error);
                Err(OmdbError::Provider { message: parsed.error })
            }
            Err(parse_err) => Err(classify_unparsed(status, body, parse_err)),
        }
    }

    /// Full detail lookup: `?apikey=<key>&i=<imdb_id>&plot=full`.
    pub async fn details(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError> {
        debug!("OMDb details: {}", imdb_id);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("i", imdb_id),
                ("plot", "full"),
            ])
            .send()
            .await
            .map_err(|e| OmdbError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OmdbError::Network(e.to_string()))?;

        // Failure bodies carry only the envelope fields; the full record
        // would fail to deserialize. Check the envelope first.
        let envelope = match serde_json::from_str::<Envelope>(&body) {
            Ok(envelope) => envelope,
            Err(parse_err) => return Err(classify_unparsed(status, body, parse_err)),
        };
        if envelope.response != "True" {
            info!("OMDb rejected detail lookup {}: {:?}", imdb_id, envelope.error);
            return Err(OmdbError::Provider { message: envelope.error });
        }

        serde_json::from_str(&body).map_err(|e| OmdbError::Parse(e.to_string()))
    }

    /// Downloads raw poster bytes from the artwork CDN.
    ///
    /// `url` is absolute (poster URLs point at a CDN, not at the API host).
    pub async fn fetch_poster(&self, url: &str) -> Result<Vec<u8>, OmdbError> {
        debug!("Downloading poster: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| OmdbError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Poster download failed: HTTP {} for {}", status, url);
            return Err(OmdbError::Api {
                status: status.as_u16(),
                message: "poster download failed".to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| OmdbError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Classify a body that did not deserialize: a bad status makes it an API
/// error, an OK status makes it a malformed payload.
fn classify_unparsed(
    status: reqwest::StatusCode,
    body: String,
    parse_err: serde_json::Error,
) -> OmdbError {
    if status.is_success() {
        OmdbError::Parse(parse_err.to_string())
    } else {
        warn!("OMDb HTTP {} with non-payload body", status);
        OmdbError::Api {
            status: status.as_u16(),
            message: body,
        }
    }
}
