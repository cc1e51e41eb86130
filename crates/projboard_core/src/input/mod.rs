//! Form input rules and the new-project form collector.
//!
//! # Responsibility
//! - Validate raw form text before anything reaches the store.
//! - Turn valid form input into `ProjectDraft`s.
//!
//! # Invariants
//! - Invalid input never calls `ProjectStore::create_project`.

pub mod form;
pub mod validation;
