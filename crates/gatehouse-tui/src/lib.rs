//! gatehouse-tui - Terminal UI for Gatehouse
//!
//! This crate provides the ratatui-based login screen. It renders the
//! [`gatehouse_app::LoginState`] model, polls crossterm for key and mouse
//! input, and drives the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use layout::{HitTarget, LoginLayout};
pub use render::view;
pub use runner::run;
