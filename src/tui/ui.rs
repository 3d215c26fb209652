//! Frame composition.
//!
//! `draw_ui` owns the top-level layout and decides which body fills the
//! main area each frame: search progress, the landing page, or the result
//! list, with the details modal cleared on top when open. Everything else
//! is delegated to the components.

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::search_bar::SEARCH_BAR_HEIGHT;
use crate::tui::components::{DetailsModal, Footer, FooterContext, LandingPage, MovieList};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Braille spinner, stepped by the event loop while anything is in flight.
pub const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Rect centered inside `outer`, sized as percentages of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(SEARCH_BAR_HEIGHT), Min(0), Length(1)]);
    let [title_area, search_area, main_area, footer_area] = layout.areas(frame.area());

    // Cached for mouse hit testing between draws
    tui.results_area = main_area;

    tui.title_bar.render(frame, title_area);
    tui.search_bar.render(frame, search_area);

    if app.searching {
        draw_search_pending(frame, main_area, spinner_frame);
    } else if !app.has_searched {
        LandingPage::new(app.api_key.is_none()).render(frame, main_area);
    } else {
        MovieList::new(&app.results, &mut tui.movie_list)
            .focused(tui.input_mode == InputMode::Results && !app.modal_open)
            .render(frame, main_area);
    }

    Footer::new(footer_context(app, tui)).render(frame, footer_area);

    // Overlay last so it clears whatever is underneath
    if app.modal_open {
        DetailsModal::new(
            app.detail.as_ref(),
            app.details_loading,
            &mut tui.details_modal,
            &mut tui.poster_slot,
            spinner_frame,
        )
        .render(frame, frame.area());
    }
}

fn draw_search_pending(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let line = Line::styled(
        format!("{spinner} Searching for movies..."),
        Style::default().fg(Color::Yellow),
    );
    let [centered] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        centered,
    );
}

fn footer_context(app: &App, tui: &TuiState) -> FooterContext {
    if app.modal_open {
        FooterContext::Modal
    } else if app.searching {
        FooterContext::Searching
    } else if tui.input_mode == InputMode::Results {
        FooterContext::Results
    } else if app.results.is_empty() {
        FooterContext::SearchInput
    } else {
        FooterContext::SearchInputWithResults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{summary, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App) -> (String, TuiState) {
        let mut tui = TuiState::new();
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, &mut tui, 0)).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        (text, tui)
    }

    #[test]
    fn test_fresh_app_shows_landing() {
        let app = test_app();
        let (text, _) = draw(&app);
        assert!(text.contains("Discover and explore detailed information"));
        assert!(!text.contains("Results"));
    }

    #[test]
    fn test_search_in_flight_shows_progress() {
        let mut app = test_app();
        app.searching = true;
        app.has_searched = true;

        let (text, _) = draw(&app);
        assert!(text.contains("Searching for movies..."));
    }

    #[test]
    fn test_results_fill_the_main_area() {
        let mut app = test_app();
        app.has_searched = true;
        app.results = vec![
            summary("tt0083658", "Blade Runner"),
            summary("tt0084827", "Tron"),
        ];

        let (text, _) = draw(&app);
        assert!(text.contains("Results"));
        assert!(text.contains("Blade Runner"));
        assert!(text.contains("Tron"));
    }

    #[test]
    fn test_no_results_shows_empty_state() {
        let mut app = test_app();
        app.has_searched = true;

        let (text, _) = draw(&app);
        assert!(text.contains("No movies found"));
    }

    #[test]
    fn test_open_modal_overlays_the_frame() {
        let mut app = test_app();
        app.has_searched = true;
        app.modal_open = true;
        app.details_loading = true;

        let (text, _) = draw(&app);
        assert!(text.contains("Movie Details"));
        assert!(text.contains("Loading movie details..."));
    }

    #[test]
    fn test_results_area_is_cached_for_hit_testing() {
        let mut app = test_app();
        app.has_searched = true;
        app.results = vec![summary("tt0083658", "Blade Runner")];

        let (_, tui) = draw(&app);
        assert!(tui.results_area.height > 0);
        assert_eq!(tui.results_area.y, 1 + SEARCH_BAR_HEIGHT);
    }
}
