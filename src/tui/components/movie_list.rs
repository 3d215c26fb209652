//! # MovieList Component
//!
//! Scrollable list of search results, one [`MovieCard`] per row.
//!
//! ## State Management
//!
//! Selection and scroll offset must survive across frames, but the movies
//! themselves live in application state. So this splits in two:
//! [`MovieListState`] is the persistent half owned by the event loop, and
//! [`MovieList`] is a transient wrapper built fresh each frame that borrows
//! the state plus the current results slice.
//!
//! Keyboard drives selection through the wrapper; mouse coordinates are
//! resolved by [`MovieListState::hit_test`] against the rectangle the list
//! was last drawn into.

use ratatui::Frame;
use ratatui::layout::{Margin, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, List, ListState, Paragraph};

use crate::omdb::MovieSummary;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::movie_card::{CARD_HEIGHT, MovieCard};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the MovieList
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// Open the details modal for this IMDb id.
    Open(String),
    /// Selection moved (parent only needs to redraw).
    Moved,
}

/// Persistent half of the result list: selection, hover, scroll offset.
#[derive(Debug, Default)]
pub struct MovieListState {
    pub list_state: ListState,
    pub hovered: Option<usize>,
}

impl MovieListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Fresh results: select the first row and scroll back to the top.
    pub fn reset(&mut self, count: usize) {
        self.list_state = ListState::default();
        if count > 0 {
            self.list_state.select(Some(0));
        }
        self.hovered = None;
    }

    pub fn select_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(count - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_prev(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    /// Maps a mouse position to a card index, or `None` outside the rows.
    ///
    /// Works because every card is exactly [`CARD_HEIGHT`] rows tall and
    /// `ListState` exposes the scroll offset of the last render.
    pub fn hit_test(&self, area: Rect, x: u16, y: u16, count: usize) -> Option<usize> {
        let inner = area.inner(Margin::new(1, 1));
        if !inner.contains(Position::new(x, y)) {
            return None;
        }
        let row = (y - inner.y) / CARD_HEIGHT;
        let index = self.list_state.offset() + row as usize;
        (index < count).then_some(index)
    }
}

/// Transient render/event wrapper, rebuilt each frame.
///
/// # Props
///
/// - `movies`: current results from application state
/// - `focused`: keyboard focus is on the list rather than the search bar
pub struct MovieList<'a> {
    movies: &'a [MovieSummary],
    state: &'a mut MovieListState,
    focused: bool,
}

impl<'a> MovieList<'a> {
    pub fn new(movies: &'a [MovieSummary], state: &'a mut MovieListState) -> Self {
        Self {
            movies,
            state,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect, block: Block<'_>) {
        let lines = vec![
            Line::raw(""),
            Line::styled(
                "No movies found",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(
                "Try searching for a different movie title",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        let empty = Paragraph::new(lines)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, area);
    }
}

impl Component for MovieList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let accent = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(accent)
            .title(" Results ");

        if self.movies.is_empty() {
            self.render_empty(frame, area, block);
            return;
        }

        let items = self
            .movies
            .iter()
            .enumerate()
            .map(|(i, movie)| {
                MovieCard::new(movie)
                    .hovered(self.state.hovered == Some(i))
                    .list_item()
            })
            .collect::<Vec<_>>();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(40, 44, 58)));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

impl EventHandler for MovieList<'_> {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let count = self.movies.len();
        match event {
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.state.select_next(count);
                Some(ListEvent::Moved)
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.state.select_prev(count);
                Some(ListEvent::Moved)
            }
            TuiEvent::Submit => {
                let index = self.state.selected()?;
                let movie = self.movies.get(index)?;
                Some(ListEvent::Open(movie.imdb_id.clone()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::summary;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn movies() -> Vec<MovieSummary> {
        vec![
            summary("tt0083658", "Blade Runner"),
            summary("tt0084827", "Tron"),
            summary("tt0086567", "WarGames"),
        ]
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_reset_selects_first_row() {
        let mut state = MovieListState::new();
        state.select_next(3);
        state.select_next(3);
        state.hovered = Some(2);

        state.reset(3);
        assert_eq!(state.selected(), Some(0));
        assert_eq!(state.hovered, None);

        state.reset(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_selection_clamps_at_both_ends() {
        let movies = movies();
        let mut state = MovieListState::new();
        state.reset(movies.len());
        let mut list = MovieList::new(&movies, &mut state);

        for _ in 0..5 {
            list.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(list.state.selected(), Some(2));

        for _ in 0..5 {
            list.handle_event(&TuiEvent::CursorUp);
        }
        assert_eq!(list.state.selected(), Some(0));
    }

    #[test]
    fn test_submit_opens_the_selected_movie() {
        let movies = movies();
        let mut state = MovieListState::new();
        state.reset(movies.len());
        let mut list = MovieList::new(&movies, &mut state);

        list.handle_event(&TuiEvent::CursorDown);
        let event = list.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(ListEvent::Open("tt0084827".to_string())));
    }

    #[test]
    fn test_submit_with_no_results_emits_nothing() {
        let movies: Vec<MovieSummary> = Vec::new();
        let mut state = MovieListState::new();
        state.reset(0);
        let mut list = MovieList::new(&movies, &mut state);
        assert_eq!(list.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_render_keeps_result_order() {
        let movies = movies();
        let mut state = MovieListState::new();
        state.reset(movies.len());

        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| MovieList::new(&movies, &mut state).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        let blade = text.find("Blade Runner").unwrap();
        let tron = text.find("Tron").unwrap();
        assert!(blade < tron);
    }

    #[test]
    fn test_render_empty_state_message() {
        let movies: Vec<MovieSummary> = Vec::new();
        let mut state = MovieListState::new();

        let backend = TestBackend::new(48, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| MovieList::new(&movies, &mut state).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("No movies found"));
        assert!(text.contains("Try searching for a different movie title"));
    }

    #[test]
    fn test_hit_test_maps_rows_to_indices() {
        let mut state = MovieListState::new();
        state.reset(3);
        let area = Rect::new(0, 0, 40, 12);

        // Border row is dead space
        assert_eq!(state.hit_test(area, 5, 0, 3), None);
        // First card spans rows 1..=3, second starts at row 4
        assert_eq!(state.hit_test(area, 5, 1, 3), Some(0));
        assert_eq!(state.hit_test(area, 5, 3, 3), Some(0));
        assert_eq!(state.hit_test(area, 5, 4, 3), Some(1));
        // Row past the last card
        assert_eq!(state.hit_test(area, 5, 10, 3), None);
        // Outside the rect entirely
        assert_eq!(state.hit_test(area, 45, 2, 3), None);
    }
}
