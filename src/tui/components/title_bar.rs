//! # TitleBar Component
//!
//! Single-row header: brand on the left, the current notice on the right.
//!
//! ## Responsibilities
//!
//! - Show the application name
//! - Show the most recent [`Notice`] (search outcome, API errors), colored
//!   by severity
//!
//! ## State Management
//!
//! Purely presentational. The notice is a prop cloned from application
//! state each frame; a new notice simply replaces the old one on the next
//! draw, so there is nothing to expire or animate here.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::{Notice, NoticeLevel};
use crate::tui::component::Component;

const BRAND: &str = " MARQUEE";

/// Top status bar showing the brand and the latest notice.
///
/// # Props
///
/// - `notice`: the message to surface, if any
pub struct TitleBar {
    pub notice: Option<Notice>,
}

impl TitleBar {
    pub fn new() -> Self {
        Self { notice: None }
    }
}

impl Default for TitleBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [brand_area, notice_area] =
            Layout::horizontal([Constraint::Length(BRAND.len() as u16 + 1), Constraint::Min(0)])
                .areas(area);

        let brand = Span::styled(
            BRAND,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        );
        frame.render_widget(brand, brand_area);

        if let Some(notice) = &self.notice {
            let accent = match notice.level {
                NoticeLevel::Info => Color::Green,
                NoticeLevel::Error => Color::Red,
            };
            let line = Line::from(vec![
                Span::styled(
                    notice.title.clone(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                Span::styled(notice.body.clone(), Style::default().fg(Color::Gray)),
                Span::raw(" "),
            ])
            .right_aligned();
            frame.render_widget(line, notice_area);
        }
    }
}
