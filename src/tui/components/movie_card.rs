//! # MovieCard Component
//!
//! Row template for one search result. [`super::movie_list::MovieList`]
//! stamps one of these per movie; every card is exactly [`CARD_HEIGHT`]
//! rows so mouse coordinates map back to an index with plain arithmetic.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::ListItem;

use crate::omdb::{MovieSummary, is_unavailable};

/// Rows per card: title, metadata, separator.
pub const CARD_HEIGHT: u16 = 3;

/// One search result row.
///
/// # Props
///
/// - `movie`: the summary to display
/// - `hovered`: mouse is over this card (selection highlight is applied by
///   the list widget, not here)
pub struct MovieCard<'a> {
    pub movie: &'a MovieSummary,
    pub hovered: bool,
}

impl<'a> MovieCard<'a> {
    pub fn new(movie: &'a MovieSummary) -> Self {
        Self {
            movie,
            hovered: false,
        }
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// Builds the fixed-height list row for this movie.
    pub fn list_item(&self) -> ListItem<'a> {
        let title_style = if self.hovered {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let mut meta = format!("{} · {}", self.movie.year, self.movie.media_type);
        if !is_unavailable(&self.movie.poster) {
            meta.push_str(" ▦");
        }

        ListItem::new(vec![
            Line::styled(self.movie.title.clone(), title_style),
            Line::styled(meta, Style::default().fg(Color::DarkGray)),
            Line::raw(""),
        ])
    }
}
