//! Headless board views.
//!
//! # Responsibility
//! - Render project columns and items as text.
//! - Translate drag/drop gestures into store moves.
//!
//! # Invariants
//! - Views only read projects from store snapshots; moves go through
//!   `ProjectStore::move_project`.

pub mod component;
pub mod drag_drop;
pub mod project_item;
pub mod project_list;
