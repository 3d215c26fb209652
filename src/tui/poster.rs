//! Poster download pipeline for the details modal.
//!
//! Poster art is strictly cosmetic: every failure path lands in
//! [`PosterSlot::Unavailable`] and the modal shows a text placeholder
//! instead. Nothing here surfaces a notice or blocks the UI.
//!
//! Downloads run on a tokio task and report back over a dedicated channel
//! owned by the modal session. Closing the modal drops the receiver, so a
//! late poster has nowhere to land and is discarded at the `send` call.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use image::DynamicImage;
use log::debug;
use ratatui_image::protocol::StatefulProtocol;

use crate::omdb::OmdbClient;

/// Lifecycle of the poster pane inside the details modal.
pub enum PosterSlot {
    /// Nothing requested yet.
    Idle,
    /// Download or decode in flight.
    Loading,
    /// Decoded and sized for the terminal, ready to draw.
    Ready(StatefulProtocol),
    /// No usable poster: sentinel URL, download/decode failure, or the
    /// terminal cannot draw images at all.
    Unavailable,
}

impl PosterSlot {
    pub fn is_loading(&self) -> bool {
        matches!(self, PosterSlot::Loading)
    }
}

/// Outcome of a background poster download.
pub enum PosterUpdate {
    Loaded(DynamicImage),
    Failed(String),
}

/// Downloads and decodes a poster off the UI thread.
///
/// Sends exactly one [`PosterUpdate`]. The receiver may already be gone if
/// the modal closed in the meantime; the update is dropped silently.
pub fn spawn_poster_fetch(client: Arc<OmdbClient>, url: String, tx: Sender<PosterUpdate>) {
    tokio::spawn(async move {
        let update = match client.fetch_poster(&url).await {
            Ok(bytes) => match image::load_from_memory(&bytes) {
                Ok(img) => PosterUpdate::Loaded(img),
                Err(err) => PosterUpdate::Failed(format!("decode failed: {err}")),
            },
            Err(err) => PosterUpdate::Failed(err.to_string()),
        };
        if tx.send(update).is_err() {
            debug!("Poster arrived after its modal closed; dropping");
        }
    });
}
