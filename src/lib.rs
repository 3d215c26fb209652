//! Marquee library exports, consumed by the binary and the integration tests

pub mod core;
pub mod omdb;
pub mod tui;

#[cfg(test)]
pub mod test_support;
