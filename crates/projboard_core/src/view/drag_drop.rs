//! Drag and drop contracts.
//!
//! A dragged project travels as its id string under the `text/plain` mime
//! type. Targets ignore payloads of any other type.

use crate::state::project_state::MoveOutcome;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Mime type carried by project drags.
pub const PROJECT_DRAG_MIME: &str = "text/plain";

/// Data attached to one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    mime: String,
    data: String,
}

impl DragPayload {
    pub fn new(mime: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            data: data.into(),
        }
    }

    /// Plain-text payload, the form produced by project drags.
    pub fn text(data: impl Into<String>) -> Self {
        Self::new(PROJECT_DRAG_MIME, data)
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn is_project_drag(&self) -> bool {
        self.mime == PROJECT_DRAG_MIME
    }
}

/// Rejected drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    UnsupportedMime(String),
}

impl Display for DropError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedMime(mime) => {
                write!(f, "drop payload type `{mime}` is not `{PROJECT_DRAG_MIME}`")
            }
        }
    }
}

impl Error for DropError {}

/// Something that can be picked up.
pub trait Draggable {
    fn drag_start(&self) -> DragPayload;
    fn drag_end(&self);
}

/// Something that accepts drops.
pub trait DragTarget {
    /// Returns whether the payload would be accepted, highlighting the
    /// target when it is.
    fn drag_over(&mut self, payload: &DragPayload) -> bool;

    fn drag_leave(&mut self);

    /// Completes a drop on this target.
    ///
    /// # Errors
    /// - Returns `DropError::UnsupportedMime` for non-project payloads.
    fn drop_payload(&mut self, payload: &DragPayload) -> Result<MoveOutcome, DropError>;
}

#[cfg(test)]
mod tests {
    use super::{DragPayload, DropError};

    #[test]
    fn text_payload_is_a_project_drag() {
        let payload = DragPayload::text("abc");
        assert!(payload.is_project_drag());
        assert_eq!(payload.data(), "abc");
    }

    #[test]
    fn other_mime_types_are_not_project_drags() {
        let payload = DragPayload::new("text/uri-list", "https://example.com");
        assert!(!payload.is_project_drag());
        assert_eq!(
            DropError::UnsupportedMime(payload.mime().to_string()).to_string(),
            "drop payload type `text/uri-list` is not `text/plain`"
        );
    }
}
