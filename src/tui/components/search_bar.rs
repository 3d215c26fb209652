//! # SearchBar Component
//!
//! Single-line query input at the top of the screen.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter), trimming the query first
//!
//! ## State Management
//!
//! The buffer is internal state and survives submission (the query stays
//! visible while its results load). `busy` and `focused` are props from the
//! event loop: while a search is in flight the loop withholds edit events
//! and this component only changes its label. No debounce, no validation
//! beyond non-emptiness.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Height of the rendered bar (one text row plus borders).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "Search for movies...";

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// User submitted a non-empty query (already trimmed).
    Search(String),
    /// Text or cursor changed (parent only needs to redraw).
    Changed,
}

/// Single-line text input for movie queries.
///
/// # Props
///
/// - `busy`: a search is in flight (label swap, cursor hidden)
/// - `focused`: keyboard focus is here rather than on the result list
///
/// # State
///
/// - `buffer`: current query text
/// - `cursor`: byte offset into `buffer`
/// - `scroll`: leftmost visible display column when the text overflows
pub struct SearchBar {
    pub buffer: String,
    pub busy: bool,
    pub focused: bool,
    cursor: usize,
    scroll: u16,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            busy: false,
            focused: true,
            cursor: 0,
            scroll: 0,
        }
    }

    /// Display columns occupied by the text before the cursor.
    fn cursor_col(&self) -> u16 {
        self.buffer[..self.cursor]
            .chars()
            .map(|c| c.width().unwrap_or(0) as u16)
            .sum()
    }

    /// Keep the cursor inside the visible window.
    fn update_scroll(&mut self, inner_width: u16) {
        let col = self.cursor_col();
        if col < self.scroll {
            self.scroll = col;
        } else if inner_width > 0 && col >= self.scroll + inner_width {
            self.scroll = col - inner_width + 1;
        }
    }

    /// The slice of the buffer visible at the current scroll offset.
    fn visible_window(&self, inner_width: u16) -> String {
        let mut skipped: u16 = 0;
        let mut taken: u16 = 0;
        let mut out = String::new();
        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0) as u16;
            if skipped < self.scroll {
                skipped += w;
                continue;
            }
            if taken + w > inner_width {
                break;
            }
            out.push(c);
            taken += w;
        }
        out
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        self.update_scroll(inner_width);

        let title = if self.busy { " Searching... " } else { " Search " };
        let accent = if self.focused && !self.busy {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(accent)
            .title(title);

        let input = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .block(block)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(self.visible_window(inner_width))
                .block(block)
                .style(Style::default().fg(Color::White))
        };

        frame.render_widget(input, area);

        if self.focused && !self.busy {
            let cursor_x = area.x + 1 + (self.cursor_col() - self.scroll);
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(SearchEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                // Single-line input: flatten pasted newlines
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(SearchEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(SearchEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(SearchEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(SearchEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(SearchEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                SearchEvent::Changed
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                SearchEvent::Changed
            }),
            TuiEvent::Submit => {
                // Whitespace-only queries never leave the component
                let query = self.buffer.trim();
                if query.is_empty() {
                    None
                } else {
                    Some(SearchEvent::Search(query.to_string()))
                }
            }
            _ => None,
        }
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos - 1;
    while !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos + 1;
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}
