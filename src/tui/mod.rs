//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, GUI)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (landing page, search/details/poster in flight): draws
//!   every ~80ms for smooth spinner animation.
//! - **Idle** (results on screen, nothing in flight): sleeps up to 500ms,
//!   only redraws on events or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

mod component;
mod components;
mod event;
mod poster;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Rect;
use ratatui_image::picker::Picker;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::omdb::{OmdbClient, is_unavailable};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DetailsModal, DetailsModalState, ListEvent, ModalEvent, MovieList, MovieListState, SearchBar,
    SearchEvent, TitleBar,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::poster::{PosterSlot, PosterUpdate};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Text editing in the search bar. Down/Tab jumps to the results.
    Search,
    /// Navigate results with arrow keys. Typing auto-switches to Search.
    Results,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub search_bar: SearchBar,
    pub movie_list: MovieListState,
    pub details_modal: DetailsModalState,
    pub title_bar: TitleBar,
    // Modal input mode
    pub input_mode: InputMode,
    // Poster session for the open modal; the receiver is dropped when the
    // modal closes so late downloads have nowhere to land
    pub poster_slot: PosterSlot,
    pub poster_rx: Option<mpsc::Receiver<PosterUpdate>>,
    // Terminal image support probe (None = text placeholders)
    pub picker: Option<Picker>,
    // Rect the result list was last drawn into (mouse hit testing)
    pub results_area: Rect,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            movie_list: MovieListState::new(),
            details_modal: DetailsModalState::default(),
            title_bar: TitleBar::new(),
            input_mode: InputMode::Search, // User expects to type immediately
            poster_slot: PosterSlot::Idle,
            poster_rx: None,
            picker: None,
            results_area: Rect::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for the search bar
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    // Requests are refused upstream while the key is missing, so an empty
    // placeholder key never reaches the wire
    let client = Arc::new(OmdbClient::new(
        config.api_key.clone().unwrap_or_default(),
        Some(config.base_url.clone()),
    ));
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Image protocol probe must happen in raw mode, after terminal init
    if config.posters {
        match Picker::from_query_stdio() {
            Ok(picker) => tui.picker = Some(picker),
            Err(e) => warn!("Poster rendering disabled: {}", e),
        }
    } else {
        info!("Poster rendering disabled by config");
    }

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync component props with App/TUI state
        tui.search_bar.busy = app.searching;
        tui.search_bar.focused = tui.input_mode == InputMode::Search && !app.modal_open;
        tui.title_bar.notice = app.notice.clone();
        if app.results.is_empty() && tui.input_mode == InputMode::Results {
            tui.input_mode = InputMode::Search;
        }

        // Determine if animations are running (landing page or any spinner)
        let animating = app.searching
            || app.details_loading
            || tui.poster_slot.is_loading()
            || !app.has_searched;

        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                let effect = update(&mut app, Action::Quit);
                if effect == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // When the details modal is open, route all events to it
            if app.modal_open {
                let modal_event = DetailsModal::new(
                    app.detail.as_ref(),
                    app.details_loading,
                    &mut tui.details_modal,
                    &mut tui.poster_slot,
                    0,
                )
                .handle_event(&event);
                if let Some(ModalEvent::Close) = modal_event {
                    update(&mut app, Action::CloseModal);
                    // Dropping the receiver discards any in-flight poster
                    tui.poster_slot = PosterSlot::Idle;
                    tui.poster_rx = None;
                }
                continue;
            }

            // Mouse hover — track the card under the pointer
            if let TuiEvent::MouseMove(col, row) = event {
                tui.movie_list.hovered = if app.searching {
                    None
                } else {
                    tui.movie_list
                        .hit_test(tui.results_area, col, row, app.results.len())
                };
                continue;
            }

            // Mouse click — select the card and open its details
            if let TuiEvent::MouseClick(col, row) = event {
                if app.searching {
                    continue;
                }
                let hit = tui
                    .movie_list
                    .hit_test(tui.results_area, col, row, app.results.len());
                if let Some(idx) = hit {
                    tui.movie_list.list_state.select(Some(idx));
                    tui.input_mode = InputMode::Results;
                    let imdb_id = app.results[idx].imdb_id.clone();
                    let effect = update(&mut app, Action::SelectMovie(imdb_id));
                    if run_effect(effect, &mut tui, &client, &tx) {
                        should_quit = true;
                    }
                }
                continue;
            }

            // Wheel scroll moves the result selection regardless of mode
            if matches!(event, TuiEvent::ScrollUp | TuiEvent::ScrollDown) {
                if !app.searching && app.has_searched {
                    MovieList::new(&app.results, &mut tui.movie_list).handle_event(&event);
                }
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Search => {
                    // Down/Tab jumps to the results when there are any
                    if matches!(event, TuiEvent::CursorDown | TuiEvent::FocusNext)
                        && !app.results.is_empty()
                        && !app.searching
                    {
                        tui.input_mode = InputMode::Results;
                        if tui.movie_list.selected().is_none() {
                            tui.movie_list.list_state.select(Some(0));
                        }
                        continue;
                    }

                    // The search bar receives no edits while a search is in flight
                    if app.searching {
                        continue;
                    }

                    if let Some(SearchEvent::Search(query)) = tui.search_bar.handle_event(&event) {
                        let effect = update(&mut app, Action::SubmitSearch(query));
                        if run_effect(effect, &mut tui, &client, &tx) {
                            should_quit = true;
                        }
                    }
                }
                InputMode::Results => match event {
                    // Typing auto-switches to the search bar and forwards the event
                    TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                        tui.input_mode = InputMode::Search;
                        tui.movie_list.hovered = None;
                        if !app.searching {
                            tui.search_bar.handle_event(&event);
                        }
                    }
                    // Esc/Tab returns focus to the search bar
                    TuiEvent::Escape | TuiEvent::FocusNext => {
                        tui.input_mode = InputMode::Search;
                    }
                    _ => {
                        let list_event =
                            MovieList::new(&app.results, &mut tui.movie_list).handle_event(&event);
                        if let Some(ListEvent::Open(imdb_id)) = list_event {
                            let effect = update(&mut app, Action::SelectMovie(imdb_id));
                            if run_effect(effect, &mut tui, &client, &tx) {
                                should_quit = true;
                            }
                        }
                    }
                },
            }
        }

        if should_quit {
            break;
        }

        // Handle background task completions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let results_changed = matches!(action, Action::SearchFinished { .. });
            let effect = update(&mut app, action);
            if results_changed {
                tui.movie_list.reset(app.results.len());
            }
            if run_effect(effect, &mut tui, &client, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Poster updates for the open modal
        if let Some(prx) = tui.poster_rx.take() {
            match prx.try_recv() {
                Ok(PosterUpdate::Loaded(image)) => {
                    needs_redraw = true;
                    // Protocol construction needs the picker, so decode output
                    // crosses back to the UI thread before becoming drawable
                    tui.poster_slot = match &mut tui.picker {
                        Some(picker) => PosterSlot::Ready(picker.new_resize_protocol(image)),
                        None => PosterSlot::Unavailable,
                    };
                }
                Ok(PosterUpdate::Failed(reason)) => {
                    needs_redraw = true;
                    debug!("Poster unavailable: {}", reason);
                    tui.poster_slot = PosterSlot::Unavailable;
                }
                Err(mpsc::TryRecvError::Empty) => {
                    tui.poster_rx = Some(prx);
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    tui.poster_slot = PosterSlot::Unavailable;
                }
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Executes the side effect a reducer step asked for. Returns true when the
/// loop should exit.
fn run_effect(
    effect: Effect,
    tui: &mut TuiState,
    client: &Arc<OmdbClient>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Search(query) => {
            spawn_search(client.clone(), query, tx.clone());
            false
        }
        Effect::FetchDetails(imdb_id) => {
            // New modal session: scroll to the top, discard any poster still
            // in flight from the previous one
            tui.details_modal.reset();
            tui.poster_slot = PosterSlot::Idle;
            tui.poster_rx = None;
            spawn_details(client.clone(), imdb_id, tx.clone());
            false
        }
        Effect::FetchPoster(url) => {
            start_poster_fetch(tui, client, url);
            false
        }
        Effect::Quit => true,
    }
}

/// Kicks off a poster download, or settles the slot immediately when the
/// poster can never render (sentinel URL, no image support).
fn start_poster_fetch(tui: &mut TuiState, client: &Arc<OmdbClient>, url: String) {
    if is_unavailable(&url) || tui.picker.is_none() {
        tui.poster_slot = PosterSlot::Unavailable;
        return;
    }
    let (ptx, prx) = mpsc::channel();
    tui.poster_slot = PosterSlot::Loading;
    tui.poster_rx = Some(prx);
    poster::spawn_poster_fetch(client.clone(), url, ptx);
}

fn spawn_search(client: Arc<OmdbClient>, query: String, tx: mpsc::Sender<Action>) {
    info!("Spawning search request for {:?}", query);
    tokio::spawn(async move {
        let outcome = client.search(&query).await;
        if tx.send(Action::SearchFinished { query, outcome }).is_err() {
            warn!("Failed to send search result: receiver dropped");
        }
    });
}

fn spawn_details(client: Arc<OmdbClient>, imdb_id: String, tx: mpsc::Sender<Action>) {
    info!("Spawning details request for {}", imdb_id);
    tokio::spawn(async move {
        let outcome = client.details(&imdb_id).await;
        if tx.send(Action::DetailsFinished(outcome)).is_err() {
            warn!("Failed to send details result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tui_state_starts_in_search_mode() {
        let tui = TuiState::new();
        assert_eq!(tui.input_mode, InputMode::Search);
        assert!(tui.search_bar.buffer.is_empty());
        assert!(tui.poster_rx.is_none());
        assert!(!tui.poster_slot.is_loading());
    }
}
