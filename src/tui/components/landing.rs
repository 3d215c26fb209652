//! # Landing Page Component
//!
//! Hero screen shown before the first search. Doubles as the setup screen:
//! without an API key it swaps the search hint for key instructions.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_big_text::{BigText, PixelSize};

use crate::tui::component::Component;

/// Rows the quadrant-pixel wordmark occupies.
const HERO_HEIGHT: u16 = 4;

pub struct LandingPage {
    needs_key: bool,
}

impl LandingPage {
    pub fn new(needs_key: bool) -> Self {
        Self { needs_key }
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut text_lines = Vec::new();

        text_lines.push(Line::from(Span::styled(
            "Discover and explore detailed information about your favorite movies",
            Style::default().fg(Color::Gray),
        )));
        text_lines.push(Line::raw(""));

        if self.needs_key {
            text_lines.push(Line::from(Span::styled(
                "API key required",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            text_lines.push(Line::from(Span::styled(
                "Get a free key at https://www.omdbapi.com/apikey.aspx",
                Style::default().fg(Color::DarkGray),
            )));
            text_lines.push(Line::from(Span::styled(
                "Then set OMDB_API_KEY or add it to ~/.marquee/config.toml and restart",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            text_lines.push(Line::from(Span::styled(
                "Type a movie title and press Enter",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let text_height = text_lines.len() as u16;
        let vertical_layout = Layout::vertical([
            Constraint::Length(HERO_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(text_height),
        ])
        .flex(Flex::Center)
        .split(area);

        let hero = BigText::builder()
            .pixel_size(PixelSize::Quadrant)
            .style(Style::default().fg(Color::Yellow))
            .lines(vec!["MARQUEE".into()])
            .alignment(Alignment::Center)
            .build();
        frame.render_widget(hero, vertical_layout[0]);

        let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, vertical_layout[2]);
    }
}
