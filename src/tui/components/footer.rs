//! # Footer Component
//!
//! One-row key hint bar. The hints track where keyboard focus currently
//! is, so the set is chosen by the caller via [`FooterContext`] rather
//! than recomputed here from application state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// Where keyboard focus is, from the footer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterContext {
    /// Search bar focused, no results to jump to yet.
    SearchInput,
    /// Search bar focused with results below.
    SearchInputWithResults,
    /// A search is in flight.
    Searching,
    /// Result list focused.
    Results,
    /// Details modal open.
    Modal,
}

/// Bottom key hint bar.
///
/// # Props
///
/// - `context`: which hint set to show
pub struct Footer {
    pub context: FooterContext,
}

impl Footer {
    pub fn new(context: FooterContext) -> Self {
        Self { context }
    }

    fn pairs(&self) -> &'static [(&'static str, &'static str)] {
        match self.context {
            FooterContext::SearchInput => &[("Enter", "search"), ("Ctrl+C", "quit")],
            FooterContext::SearchInputWithResults => &[
                ("Enter", "search"),
                ("↓/Tab", "results"),
                ("Ctrl+C", "quit"),
            ],
            FooterContext::Searching => &[("Ctrl+C", "quit")],
            FooterContext::Results => &[
                ("↑/↓", "select"),
                ("Enter", "details"),
                ("Esc", "search bar"),
                ("Ctrl+C", "quit"),
            ],
            FooterContext::Modal => &[("↑/↓", "scroll"), ("Esc", "close")],
        }
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, (key, label)) in self.pairs().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                format!(" {label}"),
                Style::default().fg(Color::Gray),
            ));
        }

        let hints = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(hints, area);
    }
}
