//! # DetailsModal Component
//!
//! Centered overlay showing the full record for one movie.
//!
//! ## Responsibilities
//!
//! - Render one of three bodies: loading spinner, the loaded record, or a
//!   fallback line when neither is available
//! - Poster pane on the left, scrollable text pane on the right
//! - Scroll the text pane, clamped to its rendered height
//! - Emit [`ModalEvent::Close`] on Escape
//!
//! ## State Management
//!
//! Which body to draw is decided entirely by the props (`loading` and
//! `detail`), both read from application state. The component itself only
//! persists the scroll offset, which resets every time a modal session
//! opens. Fields holding the sentinel `"N/A"` are omitted rather than
//! printed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};
use ratatui_image::{Resize, StatefulImage};

use crate::omdb::{MovieDetail, is_unavailable};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::poster::PosterSlot;
use crate::tui::ui::{SPINNER_FRAMES, centered_rect};

const PAGE_SCROLL: u16 = 8;

/// High-level events emitted by the DetailsModal
#[derive(Debug, Clone, PartialEq)]
pub enum ModalEvent {
    /// User dismissed the modal.
    Close,
    /// Scroll offset changed (parent only needs to redraw).
    Scrolled,
}

/// Persistent half of the modal: the text pane scroll offset.
#[derive(Debug, Default)]
pub struct DetailsModalState {
    pub scroll: u16,
}

impl DetailsModalState {
    /// Called when a modal session opens; each movie starts at the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

/// Transient render/event wrapper, rebuilt each frame.
///
/// # Props
///
/// - `detail`: the loaded record, if it has arrived
/// - `loading`: the details request is still in flight
/// - `spinner_frame`: animation step for the loading body
pub struct DetailsModal<'a> {
    detail: Option<&'a MovieDetail>,
    loading: bool,
    state: &'a mut DetailsModalState,
    poster: &'a mut PosterSlot,
    spinner_frame: usize,
}

impl<'a> DetailsModal<'a> {
    pub fn new(
        detail: Option<&'a MovieDetail>,
        loading: bool,
        state: &'a mut DetailsModalState,
        poster: &'a mut PosterSlot,
        spinner_frame: usize,
    ) -> Self {
        Self {
            detail,
            loading,
            state,
            poster,
            spinner_frame,
        }
    }

    fn render_loading(&self, frame: &mut Frame, body: Rect) {
        let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
        let lines = vec![
            Line::raw(""),
            Line::styled(spinner.to_string(), Style::default().fg(Color::Yellow)),
            Line::raw(""),
            Line::styled(
                "Loading movie details...",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, body);
    }

    fn render_failed(&self, frame: &mut Frame, body: Rect) {
        let lines = vec![
            Line::raw(""),
            Line::styled(
                "Failed to load movie details",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, body);
    }

    fn render_poster_pane(&mut self, frame: &mut Frame, pane: Rect) {
        match self.poster {
            PosterSlot::Ready(protocol) => {
                let image = StatefulImage::default().resize(Resize::Fit(None));
                frame.render_stateful_widget(image, pane, protocol);
            }
            PosterSlot::Loading => {
                let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
                let placeholder = Paragraph::new(format!("{spinner} Loading poster..."))
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center);
                frame.render_widget(placeholder, pane);
            }
            PosterSlot::Idle | PosterSlot::Unavailable => {
                let placeholder = Paragraph::new("No poster available")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center);
                frame.render_widget(placeholder, pane);
            }
        }
    }

    fn render_detail(&mut self, frame: &mut Frame, body: Rect, movie: &MovieDetail) {
        let [poster_pane, text_pane] =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .spacing(1)
                .areas(body);

        self.render_poster_pane(frame, poster_pane);

        let paragraph = Paragraph::new(detail_lines(movie)).wrap(Wrap { trim: false });

        // Clamp before applying: the offset may point past the end after a
        // resize or an over-eager scroll
        let total = paragraph.line_count(text_pane.width) as u16;
        let max_scroll = total.saturating_sub(text_pane.height);
        self.state.scroll = self.state.scroll.min(max_scroll);

        frame.render_widget(paragraph.scroll((self.state.scroll, 0)), text_pane);
    }
}

/// Text pane content for a loaded record, top to bottom.
fn detail_lines(movie: &MovieDetail) -> Vec<Line<'_>> {
    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let value = Style::default().fg(Color::White);
    let muted = Style::default().fg(Color::Gray);
    let gold = Style::default().fg(Color::Yellow);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                movie.title.as_str(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(format!("({})", movie.year), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Runtime: ", muted),
            Span::styled(movie.runtime.as_str(), value),
            Span::raw(" | "),
            Span::styled("Rated: ", muted),
            Span::styled(movie.rated.as_str(), value),
        ]),
    ];

    if !is_unavailable(&movie.imdb_rating) {
        let mut spans = vec![
            Span::styled("★ ", gold),
            Span::styled(
                format!("{}/10", movie.imdb_rating),
                Style::default()
                    .fg(rating_color(&movie.imdb_rating))
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if !is_unavailable(&movie.imdb_votes) {
            spans.push(Span::styled(format!(" ({} votes)", movie.imdb_votes), muted));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled("Plot", heading));
    lines.push(Line::styled(movie.plot.clone(), muted));
    lines.push(Line::raw(""));

    for (label, text) in [
        ("Genre", &movie.genre),
        ("Director", &movie.director),
        ("Cast", &movie.actors),
        ("Language", &movie.language),
    ] {
        lines.push(Line::styled(label, heading));
        lines.push(Line::styled(text.clone(), muted));
        lines.push(Line::raw(""));
    }

    if !is_unavailable(&movie.awards) {
        lines.push(Line::styled("Awards", heading));
        lines.push(Line::styled(movie.awards.clone(), gold));
        lines.push(Line::raw(""));
    }

    if let Some(box_office) = &movie.box_office
        && !is_unavailable(box_office)
    {
        lines.push(Line::styled("Box Office", heading));
        lines.push(Line::styled(
            box_office.clone(),
            gold.add_modifier(Modifier::BOLD),
        ));
    }

    lines
}

fn rating_color(rating: &str) -> Color {
    match rating.parse::<f32>() {
        Ok(score) if score >= 7.0 => Color::Green,
        Ok(score) if score >= 5.0 => Color::Yellow,
        Ok(_) => Color::Red,
        Err(_) => Color::White,
    }
}

impl Component for DetailsModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(80, 85, area);
        frame.render_widget(Clear, modal);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Movie Details ")
            .title_bottom(Line::from(" Esc to close ").right_aligned());
        frame.render_widget(block, modal);

        let body = modal.inner(Margin::new(2, 1));
        if self.loading {
            self.render_loading(frame, body);
        } else if let Some(movie) = self.detail {
            self.render_detail(frame, body, movie);
        } else {
            self.render_failed(frame, body);
        }
    }
}

impl EventHandler for DetailsModal<'_> {
    type Event = ModalEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape => Some(ModalEvent::Close),
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.state.scroll = self.state.scroll.saturating_sub(1);
                Some(ModalEvent::Scrolled)
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.state.scroll = self.state.scroll.saturating_add(1);
                Some(ModalEvent::Scrolled)
            }
            TuiEvent::PageUp => {
                self.state.scroll = self.state.scroll.saturating_sub(PAGE_SCROLL);
                Some(ModalEvent::Scrolled)
            }
            TuiEvent::PageDown => {
                self.state.scroll = self.state.scroll.saturating_add(PAGE_SCROLL);
                Some(ModalEvent::Scrolled)
            }
            _ => None,
        }
    }
}
