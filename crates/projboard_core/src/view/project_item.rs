//! Single project card.

use crate::model::project::Project;
use crate::view::component::Component;
use crate::view::drag_drop::{DragPayload, Draggable};
use log::debug;

/// Rendered card for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// `"1 person"` or `"N persons"`.
    pub fn persons(&self) -> String {
        match self.project.people() {
            1 => "1 person".to_string(),
            count => format!("{count} persons"),
        }
    }
}

impl Component for ProjectItem {
    fn configure(&mut self) {
        debug!(
            "event=view_configure module=view view=project_item status=ok project_id={}",
            self.project.id()
        );
    }

    fn render_content(&self) -> String {
        format!(
            "{}\n  {} assigned\n  {}\n",
            self.project.title(),
            self.persons(),
            self.project.description()
        )
    }
}

impl Draggable for ProjectItem {
    fn drag_start(&self) -> DragPayload {
        DragPayload::text(self.project.id().to_string())
    }

    fn drag_end(&self) {
        debug!(
            "event=drag_end module=view status=ok project_id={}",
            self.project.id()
        );
    }
}
