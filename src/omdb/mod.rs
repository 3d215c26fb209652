pub mod client;
pub mod types;

pub use client::{DEFAULT_BASE_URL, OmdbClient, OmdbError};
pub use types::{MovieDetail, MovieSummary, SearchPage, SearchResponse, is_unavailable};
