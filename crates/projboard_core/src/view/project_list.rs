//! Board column for one project status.
//!
//! # Responsibility
//! - Subscribe once to the store and keep the projects of its own status.
//! - Accept project drops and move the dropped project into its status.
//!
//! # Invariants
//! - The column only learns about projects through store notifications.
//! - A list subscribes at most once, no matter how often it is configured.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::project_state::{MoveOutcome, ProjectStore};
use crate::view::component::Component;
use crate::view::drag_drop::{DragPayload, DragTarget, DropError};
use crate::view::project_item::ProjectItem;
use log::debug;
use std::sync::{Arc, Mutex, PoisonError};

/// One board column.
#[derive(Debug)]
pub struct ProjectList {
    kind: ProjectStatus,
    store: Arc<ProjectStore>,
    assigned: Arc<Mutex<Vec<Project>>>,
    droppable: bool,
    configured: bool,
}

impl ProjectList {
    /// Creates a configured column bound to `store`.
    pub fn new(kind: ProjectStatus, store: Arc<ProjectStore>) -> Self {
        let mut list = Self {
            kind,
            store,
            assigned: Arc::new(Mutex::new(Vec::new())),
            droppable: false,
            configured: false,
        };
        list.configure();
        list
    }

    pub fn kind(&self) -> ProjectStatus {
        self.kind
    }

    /// Element id of the rendered list, e.g. `active-project-list`.
    pub fn list_id(&self) -> String {
        format!("{}-project-list", self.kind)
    }

    /// Projects received with the latest notification, in store order.
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.assigned
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a project drag is currently hovering this column.
    pub fn is_droppable(&self) -> bool {
        self.droppable
    }
}

impl Component for ProjectList {
    fn configure(&mut self) {
        if self.configured {
            return;
        }
        self.configured = true;

        let kind = self.kind;
        let assigned = Arc::clone(&self.assigned);
        self.store.subscribe(move |projects| {
            let relevant: Vec<Project> = projects
                .into_iter()
                .filter(|project| project.has_status(kind))
                .collect();
            debug!(
                "event=view_render module=view view=project_list status=ok list={} count={}",
                kind,
                relevant.len()
            );
            *assigned.lock().unwrap_or_else(PoisonError::into_inner) = relevant;
        });
    }

    fn render_content(&self) -> String {
        let mut out = format!("== {} ({}) ==\n", self.kind.heading(), self.list_id());
        for project in self.assigned_projects() {
            out.push_str(&ProjectItem::new(project).render_content());
        }
        out
    }
}

impl DragTarget for ProjectList {
    fn drag_over(&mut self, payload: &DragPayload) -> bool {
        let accepted = payload.is_project_drag();
        if accepted {
            self.droppable = true;
        }
        accepted
    }

    fn drag_leave(&mut self) {
        self.droppable = false;
    }

    fn drop_payload(&mut self, payload: &DragPayload) -> Result<MoveOutcome, DropError> {
        self.droppable = false;
        if !payload.is_project_drag() {
            return Err(DropError::UnsupportedMime(payload.mime().to_string()));
        }

        // A payload that is not an id cannot match any project.
        match payload.data().parse::<ProjectId>() {
            Ok(project_id) => Ok(self.store.move_project(project_id, self.kind)),
            Err(err) => {
                debug!(
                    "event=drop module=view status=skipped list={} reason={}",
                    self.kind, err
                );
                Ok(MoveOutcome::NotFound)
            }
        }
    }
}
