//! Observable board state.
//!
//! # Responsibility
//! - Hold the single authoritative project collection.
//! - Keep every subscribed view in sync through snapshot notifications.

pub mod listeners;
pub mod project_state;
