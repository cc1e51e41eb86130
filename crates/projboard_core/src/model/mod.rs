//! Board domain model.
//!
//! # Responsibility
//! - Define the project record and its status state machine.
//! - Provide identity generation for newly created projects.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are never deleted.

pub mod identity;
pub mod project;
