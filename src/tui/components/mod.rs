//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: Brand plus the latest notice
//! - `MovieCard`: One fixed-height result row
//! - `Footer`: Key hints for the current focus
//! - `LandingPage`: Hero screen before the first search
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that persist local state across frames and emit events:
//! - `SearchBar`: Query input with cursor and horizontal scroll
//! - `MovieList`: Result list with selection, hover, and scroll offset
//! - `DetailsModal`: Full-record overlay with a scrollable text pane
//!
//! ## Design Philosophy
//!
//! Each component file co-locates its state types, event types, rendering,
//! event handling, and tests. External data always arrives as props, never
//! by reaching into global state, so every component renders standalone
//! against a `TestBackend`.
//!
//! Stateful components split into a persistent `*State` struct owned by the
//! event loop and a transient wrapper built fresh each frame that borrows
//! the state plus whatever slices of application state it displays.

mod title_bar;
pub use title_bar::TitleBar;

pub mod details_modal;
pub mod footer;
pub mod landing;
pub mod movie_card;
pub mod movie_list;
pub mod search_bar;
pub use details_modal::{DetailsModal, DetailsModalState, ModalEvent};
pub use footer::{Footer, FooterContext};
pub use landing::LandingPage;
pub use movie_card::MovieCard;
pub use movie_list::{ListEvent, MovieList, MovieListState};
pub use search_bar::{SearchBar, SearchEvent};
