//! Core logic for the project board.
//! This crate owns the project store and every rule about project state.

pub mod input;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

pub use input::form::{FormField, FormRules, InputError, ProjectDraft, ProjectInput};
pub use input::validation::{validate, FieldValue, RuleViolation, Rules};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::identity::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use model::project::{ParseStatusError, Project, ProjectId, ProjectIdError, ProjectStatus};
pub use state::project_state::{MoveOutcome, ProjectStore};
pub use view::component::Component;
pub use view::drag_drop::{DragPayload, DragTarget, Draggable, DropError, PROJECT_DRAG_MIME};
pub use view::project_item::ProjectItem;
pub use view::project_list::ProjectList;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
