//! archview-app - Application state and update logic for archview
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: `AppState` is the model, `Message` the set of events and
//! `handler::update` the only place state changes. It also owns click
//! dispatch, configuration loading and OS signal handling.

pub mod config;
pub mod dispatch;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, Selection};
