//! Board composition root.
//!
//! # Responsibility
//! - Own the store and wire the form and one column per status to it.
//! - Execute parsed commands and print the re-rendered board.

use crate::command::{Command, MoveTarget, HELP};
use projboard_core::{
    Component, DragPayload, DragTarget, FormRules, IdGenerator, MoveOutcome, ProjectInput,
    ProjectList, ProjectStatus, ProjectStore,
};
use std::io::{self, Write};
use std::sync::Arc;

/// Whether the command loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Board {
    store: Arc<ProjectStore>,
    input: ProjectInput,
    columns: Vec<ProjectList>,
}

impl Board {
    pub fn new(ids: impl IdGenerator + 'static, rules: FormRules) -> Self {
        let store = Arc::new(ProjectStore::with_id_generator(ids));
        let mut input = ProjectInput::new(rules);
        input.configure();
        let columns = ProjectStatus::ALL
            .into_iter()
            .map(|status| ProjectList::new(status, Arc::clone(&store)))
            .collect();
        Self {
            store,
            input,
            columns,
        }
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        match command {
            Command::Add {
                title,
                description,
                people,
            } => {
                self.input.fill(title, description, people);
                match self.input.submit(&self.store) {
                    Ok(id) => {
                        writeln!(out, "created {id}")?;
                        self.render(out)?;
                    }
                    Err(err) => {
                        writeln!(out, "rejected: {err}")?;
                        self.input.clear_inputs();
                    }
                }
            }
            Command::Move { target, status } => self.move_project(target, status, out)?,
            Command::List => self.list(out)?,
            Command::Help => write!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for column in &self.columns {
            write!(out, "{}", column.render_content())?;
        }
        Ok(())
    }

    fn move_project(
        &mut self,
        target: MoveTarget,
        status: ProjectStatus,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let raw_id = match target {
            MoveTarget::Id(raw_id) => raw_id,
            MoveTarget::Index(index) => {
                let snapshot = self.store.snapshot();
                match index.checked_sub(1).and_then(|slot| snapshot.get(slot)) {
                    Some(project) => project.id().to_string(),
                    None => return writeln!(out, "no project at #{index}"),
                }
            }
        };

        let Some(column) = self
            .columns
            .iter_mut()
            .find(|column| column.kind() == status)
        else {
            return writeln!(out, "no {status} column");
        };
        let payload = DragPayload::text(raw_id);
        column.drag_over(&payload);
        match column.drop_payload(&payload) {
            Ok(MoveOutcome::Moved) => {
                writeln!(out, "moved to {status}")?;
                self.render(out)
            }
            Ok(MoveOutcome::Unchanged) => writeln!(out, "already {status}"),
            Ok(MoveOutcome::NotFound) => writeln!(out, "no such project"),
            Err(err) => writeln!(out, "drop rejected: {err}"),
        }
    }

    fn list(&self, out: &mut impl Write) -> io::Result<()> {
        let projects = self.store.snapshot();
        if projects.is_empty() {
            return writeln!(out, "no projects yet");
        }
        for (index, project) in projects.iter().enumerate() {
            writeln!(
                out,
                "#{} {} [{}] {}",
                index + 1,
                project.id(),
                project.status(),
                project.title()
            )?;
        }
        Ok(())
    }
}
