//! Observable project store.
//!
//! # Responsibility
//! - Own the authoritative, insertion-ordered project collection.
//! - Publish a full snapshot to every subscriber after each state change.
//!
//! # Invariants
//! - The store is the only writer of project status.
//! - A state change produces exactly one notification per subscriber, in
//!   registration order; a no-op produces none.
//! - Subscribers are not replayed current state on registration.
//! - Mutations hold the listener lock from the collection update until the
//!   end of their notification round, so rounds arrive in mutation order.
//!
//! # Locking
//! - Two locks, always taken in the order listeners then projects. Reads
//!   take the projects lock only and are safe from inside a callback.
//! - `create_project`, `move_project` and `subscribe` called from inside a
//!   callback deadlock.
//! - A panicking subscriber aborts its round: the mutation stays applied and
//!   later subscribers miss that one snapshot. The next round reaches
//!   everyone again.

use crate::model::identity::{IdGenerator, RandomIdGenerator};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::listeners::ListenerRegistry;
use log::{debug, info};
use std::fmt::{Debug, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Which branch a `move_project` call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed and subscribers were notified.
    Moved,
    /// Project already had the requested status.
    Unchanged,
    /// No project has the given id.
    NotFound,
}

/// In-memory project store with snapshot subscriptions.
///
/// Share one instance between views with `Arc<ProjectStore>`. Callbacks may
/// read the store but must not mutate it or subscribe to it.
pub struct ProjectStore {
    projects: Mutex<Vec<Project>>,
    listeners: Mutex<ListenerRegistry<Project>>,
    ids: Box<dyn IdGenerator>,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    /// Creates an empty store with random project ids.
    pub fn new() -> Self {
        Self::with_id_generator(RandomIdGenerator)
    }

    /// Creates an empty store with a caller-provided id source.
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            projects: Mutex::new(Vec::new()),
            listeners: Mutex::new(ListenerRegistry::new()),
            ids: Box::new(ids),
        }
    }

    /// Appends a new active project and notifies subscribers.
    ///
    /// Input is not validated here; callers reject bad form input first.
    pub fn create_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let mut listeners = self.lock_listeners();
        let id = self.ids.next_id();
        let snapshot = {
            let mut projects = self.lock_projects();
            projects.push(Project::new(id, title, description, people));
            projects.clone()
        };
        let total = snapshot.len();
        let notified = listeners.publish(&snapshot);

        info!(
            "event=project_create module=store status=ok project_id={} people={} total={} subscribers={}",
            id, people, total, notified
        );
        id
    }

    /// Moves a project to `new_status`.
    ///
    /// Unknown ids and unchanged statuses are silent no-ops without
    /// notification. If ids were ever duplicated, the first match wins.
    pub fn move_project(&self, project_id: ProjectId, new_status: ProjectStatus) -> MoveOutcome {
        let mut listeners = self.lock_listeners();
        let (from, snapshot) = {
            let mut projects = self.lock_projects();
            let Some(project) = projects
                .iter_mut()
                .find(|project| project.id() == project_id)
            else {
                debug!(
                    "event=project_move module=store status=skipped reason=not_found project_id={}",
                    project_id
                );
                return MoveOutcome::NotFound;
            };

            let from = project.status();
            if !project.set_status(new_status) {
                debug!(
                    "event=project_move module=store status=skipped reason=unchanged project_id={} to={}",
                    project_id, new_status
                );
                return MoveOutcome::Unchanged;
            }
            (from, projects.clone())
        };

        let notified = listeners.publish(&snapshot);
        info!(
            "event=project_move module=store status=ok project_id={} from={} to={} subscribers={}",
            project_id, from, new_status, notified
        );
        MoveOutcome::Moved
    }

    /// Registers a callback for snapshots published by later mutations.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: FnMut(Vec<Project>) + Send + 'static,
    {
        let mut listeners = self.lock_listeners();
        listeners.add_listener(callback);
        debug!(
            "event=subscribe module=store status=ok subscribers={}",
            listeners.len()
        );
    }

    /// Returns an owned copy of every project in store order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.lock_projects().clone()
    }

    /// Returns a copy of one project by id.
    pub fn project(&self, project_id: ProjectId) -> Option<Project> {
        self.lock_projects()
            .iter()
            .find(|project| project.id() == project_id)
            .cloned()
    }

    /// Returns copies of projects in one column, in store order.
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.lock_projects()
            .iter()
            .filter(|project| project.has_status(status))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock_projects().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_projects().is_empty()
    }

    /// Takes the listener lock, so it deadlocks inside a callback.
    pub fn subscriber_count(&self) -> usize {
        self.lock_listeners().len()
    }

    fn lock_projects(&self) -> MutexGuard<'_, Vec<Project>> {
        self.projects.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // A panicking subscriber poisons this lock after the collection was
    // already updated and released, so the registry is still usable.
    fn lock_listeners(&self) -> MutexGuard<'_, ListenerRegistry<Project>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Debug for ProjectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = f.debug_struct("ProjectStore");
        match self.projects.try_lock() {
            Ok(projects) => out.field("projects", &*projects),
            Err(_) => out.field("projects", &"<locked>"),
        };
        // The listener lock is held for the whole round, so `{:?}` from a
        // callback lands here.
        match self.listeners.try_lock() {
            Ok(listeners) => out.field("listeners", &*listeners),
            Err(_) => out.field("listeners", &"<locked>"),
        };
        out.finish()
    }
}
