//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered by board columns.
//! - Define the two-state status model and its stable string ids.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `status` is the only field that changes after creation, and only the
//!   store changes it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for one project.
///
/// Rendered and parsed as the hyphenated UUID string, which is also the form
/// carried by drag payloads. Deserializing goes through `TryFrom<Uuid>`, so
/// the nil UUID is rejected on the wire as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Wraps an existing UUID.
    ///
    /// Returns `None` for the nil UUID, which is never a valid project id.
    pub fn from_uuid(uuid: Uuid) -> Option<Self> {
        if uuid.is_nil() {
            None
        } else {
            Some(Self(uuid))
        }
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl TryFrom<Uuid> for ProjectId {
    type Error = ProjectIdError;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        Self::from_uuid(uuid).ok_or(ProjectIdError::Nil)
    }
}

impl From<ProjectId> for Uuid {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ProjectId {
    type Err = ProjectIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ProjectIdError::Empty);
        }
        let uuid =
            Uuid::parse_str(trimmed).map_err(|_| ProjectIdError::Malformed(trimmed.to_string()))?;
        Self::try_from(uuid)
    }
}

/// Project id parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectIdError {
    Empty,
    Malformed(String),
    Nil,
}

impl Display for ProjectIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "project id must not be empty"),
            Self::Malformed(value) => write!(f, "project id is malformed: `{value}`"),
            Self::Nil => write!(f, "project id must not be the nil uuid"),
        }
    }
}

impl Error for ProjectIdError {}

/// Board column a project belongs to.
///
/// Every transition is legal; moving a project to the status it already has
/// is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    /// Both statuses in column order.
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Stable string id, also used in list element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Column heading shown above the list.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE PROJECTS",
            Self::Finished => "FINISHED PROJECTS",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Unknown status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl Display for ParseStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported project status `{}`; expected active|finished",
            self.0
        )
    }
}

impl Error for ParseStatusError {}

/// Canonical project record.
///
/// Fields are read-only outside this crate so that snapshot holders cannot
/// change store state. Serialize-only: projects are created by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a caller-provided id.
    pub(crate) fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of people assigned.
    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns whether this project renders in the given column.
    pub fn has_status(&self, status: ProjectStatus) -> bool {
        self.status == status
    }

    /// Sets status and reports whether it changed.
    pub(crate) fn set_status(&mut self, status: ProjectStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        true
    }
}
