use projboard_core::{
    MoveOutcome, Project, ProjectId, ProjectStatus, ProjectStore, SequentialIdGenerator,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

type Calls = Arc<Mutex<Vec<Vec<Project>>>>;

fn store() -> ProjectStore {
    ProjectStore::with_id_generator(SequentialIdGenerator::new())
}

fn record(store: &ProjectStore) -> Calls {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    store.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot));
    calls
}

fn call_count(calls: &Calls) -> usize {
    calls.lock().unwrap().len()
}

#[test]
fn every_create_adds_one_active_project_with_a_distinct_id() {
    let store = ProjectStore::new();
    let ids: Vec<ProjectId> = (0..25)
        .map(|n| store.create_project(format!("project {n}"), "some description", 2))
        .collect();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 25);
    assert!(snapshot.iter().all(|project| project.status() == ProjectStatus::Active));
    let distinct: HashSet<ProjectId> = snapshot.iter().map(Project::id).collect();
    assert_eq!(distinct.len(), 25);
    assert_eq!(snapshot.iter().map(Project::id).collect::<Vec<_>>(), ids);
}

#[test]
fn unknown_id_move_changes_nothing_and_notifies_nobody() {
    let store = store();
    store.create_project("Build site", "A site build", 3);
    let calls = record(&store);
    let before = store.snapshot();

    let missing: ProjectId = "9b2e4d3c-1f0a-4c6b-8d7e-5a4b3c2d1e0f".parse().unwrap();
    assert_eq!(
        store.move_project(missing, ProjectStatus::Finished),
        MoveOutcome::NotFound
    );

    assert_eq!(store.snapshot(), before);
    assert_eq!(call_count(&calls), 0);
}

#[test]
fn move_to_current_status_is_a_silent_no_op() {
    let store = store();
    let id = store.create_project("Build site", "A site build", 3);
    let calls = record(&store);

    assert_eq!(
        store.move_project(id, ProjectStatus::Active),
        MoveOutcome::Unchanged
    );
    assert_eq!(call_count(&calls), 0);
    assert_eq!(store.project(id).unwrap().status(), ProjectStatus::Active);
}

#[test]
fn status_change_updates_only_that_project_and_notifies_each_subscriber_once() {
    let store = store();
    let first = store.create_project("one", "first one", 1);
    let second = store.create_project("two", "second one", 2);
    let third = store.create_project("three", "third one", 3);
    let left = record(&store);
    let right = record(&store);

    assert_eq!(
        store.move_project(second, ProjectStatus::Finished),
        MoveOutcome::Moved
    );

    for calls in [&left, &right] {
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let statuses: Vec<(ProjectId, ProjectStatus)> = calls[0]
            .iter()
            .map(|project| (project.id(), project.status()))
            .collect();
        assert_eq!(
            statuses,
            vec![
                (first, ProjectStatus::Active),
                (second, ProjectStatus::Finished),
                (third, ProjectStatus::Active),
            ]
        );
    }
}

#[test]
fn late_subscribers_get_no_replay() {
    let store = store();
    store.create_project("one", "first one", 1);
    store.create_project("two", "second one", 2);

    let calls = record(&store);
    assert_eq!(call_count(&calls), 0);

    store.create_project("three", "third one", 3);
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 3);
}

#[test]
fn snapshots_are_independent_copies() {
    let store = store();
    let tampered = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&tampered);
    store.subscribe(move |mut snapshot: Vec<Project>| {
        let extra = snapshot[0].clone();
        snapshot.push(extra);
        snapshot.reverse();
        *sink.lock().unwrap() = Some(snapshot);
    });
    let calls = record(&store);

    store.create_project("Build site", "A site build", 3);

    assert_eq!(tampered.lock().unwrap().as_ref().unwrap().len(), 2);
    assert_eq!(calls.lock().unwrap()[0].len(), 1);
    assert_eq!(store.len(), 1);

    store.create_project("Second", "Another build", 2);
    assert_eq!(calls.lock().unwrap()[1].len(), 2);
    assert_eq!(store.snapshot()[0].title(), "Build site");
}

#[test]
fn build_site_scenario() {
    let store = store();
    let calls = record(&store);

    let id = store.create_project("Build site", "A site build", 3);
    {
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 1);
        assert_eq!(calls[0][0].title(), "Build site");
        assert_eq!(calls[0][0].people(), 3);
        assert_eq!(calls[0][0].status(), ProjectStatus::Active);
    }

    store.move_project(id, ProjectStatus::Finished);
    {
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1][0].status(), ProjectStatus::Finished);
        assert_eq!(calls[1][0].title(), "Build site");
    }

    store.move_project(id, ProjectStatus::Finished);
    assert_eq!(call_count(&calls), 2);
}

#[test]
fn early_subscribers_see_identical_snapshots() {
    let store = store();
    let first = record(&store);
    let second = record(&store);

    let id = store.create_project("Build site", "A site build", 3);
    store.create_project("Docs", "Write the docs", 1);
    store.move_project(id, ProjectStatus::Finished);
    store.move_project(id, ProjectStatus::Active);

    let first = first.lock().unwrap();
    let second = second.lock().unwrap();
    assert_eq!(first.len(), 4);
    assert_eq!(*first, *second);
}

#[test]
fn notifications_follow_registration_order() {
    let store = store();
    let order = Arc::new(Mutex::new(Vec::new()));
    for name in ["header", "active", "finished"] {
        let order = Arc::clone(&order);
        store.subscribe(move |_| order.lock().unwrap().push(name));
    }

    store.create_project("Build site", "A site build", 3);
    assert_eq!(*order.lock().unwrap(), vec!["header", "active", "finished"]);
}

#[test]
fn store_is_shared_across_threads_and_serializes_mutations() {
    let store = Arc::new(ProjectStore::new());
    let calls = record(&store);

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for n in 0..10 {
                    store.create_project(format!("w{worker}-{n}"), "threaded work", 1);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let calls = calls.lock().unwrap();
    assert_eq!(store.len(), 40);
    assert_eq!(calls.len(), 40);
    // Each round saw one more project than the previous one.
    for (index, snapshot) in calls.iter().enumerate() {
        assert_eq!(snapshot.len(), index + 1);
    }
}
