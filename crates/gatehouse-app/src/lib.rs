//! gatehouse-app - Login view state and orchestration for Gatehouse
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the login
//! screen: a single [`LoginState`] model, the [`Message`] vocabulary, a pure
//! [`handler::update`] reducer, and the effect layer that runs the
//! [`auth::Authenticator`] seam and the notification timer.

pub mod actions;
pub mod auth;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod timer;

// Re-export primary types
pub use actions::ActionContext;
pub use auth::{AuthOutcome, Authenticator, ConfiguredAuthenticator, Credentials};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::LoginState;
