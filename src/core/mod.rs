//! # Core Application Logic
//!
//! This module contains Marquee's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    OMDb    │
//!             │  Adapter   │          │   client   │
//!             │ (ratatui)  │          │ (reqwest)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! The TUI layer feeds `Action`s into `update()` and executes the returned
//! `Effect`s (spawning requests); completed requests come back as more
//! `Action`s over a channel.
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`config`]: Layered settings (file, env vars, CLI)

pub mod action;
pub mod config;
pub mod state;
