use projboard_core::{
    Component, DragTarget, Draggable, FormRules, MoveOutcome, ProjectInput, ProjectItem,
    ProjectList, ProjectStatus, ProjectStore, SequentialIdGenerator,
};
use std::sync::Arc;

struct Board {
    store: Arc<ProjectStore>,
    input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

fn board() -> Board {
    let store = Arc::new(ProjectStore::with_id_generator(SequentialIdGenerator::new()));
    Board {
        input: ProjectInput::new(FormRules::default()),
        active: ProjectList::new(ProjectStatus::Active, Arc::clone(&store)),
        finished: ProjectList::new(ProjectStatus::Finished, Arc::clone(&store)),
        store,
    }
}

#[test]
fn submitted_form_shows_up_in_the_active_column() {
    let mut board = board();
    board.input.fill("Build site", "A site build", "3");

    let id = board.input.submit(&board.store).unwrap();

    let active = board.active.assigned_projects();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id(), id);
    assert!(board.finished.assigned_projects().is_empty());
}

#[test]
fn invalid_form_never_reaches_the_store() {
    let mut board = board();
    board.input.fill("Build site", "A site build", "12");

    let err = board.input.submit(&board.store).unwrap_err();

    assert_eq!(err.to_string(), "invalid people: must be at most 5, got 12");
    assert!(board.store.is_empty());
    assert!(board.active.assigned_projects().is_empty());
}

#[test]
fn dragging_a_card_between_columns_moves_it_back_and_forth() {
    let mut board = board();
    board.input.fill("Build site", "A site build", "3");
    board.input.submit(&board.store).unwrap();

    let card = ProjectItem::new(board.active.assigned_projects().remove(0));
    let payload = card.drag_start();
    assert!(board.finished.drag_over(&payload));
    assert_eq!(
        board.finished.drop_payload(&payload).unwrap(),
        MoveOutcome::Moved
    );
    card.drag_end();

    assert!(board.active.assigned_projects().is_empty());
    assert_eq!(board.finished.assigned_projects().len(), 1);
    assert!(board
        .finished
        .render_content()
        .contains("3 persons assigned"));

    assert_eq!(
        board.active.drop_payload(&payload).unwrap(),
        MoveOutcome::Moved
    );
    assert_eq!(board.active.assigned_projects().len(), 1);
    assert!(board.finished.assigned_projects().is_empty());
}

#[test]
fn dropping_on_the_current_column_leaves_views_untouched() {
    let mut board = board();
    board.input.fill("Build site", "A site build", "1");
    board.input.submit(&board.store).unwrap();
    let rendered = board.active.render_content();

    let card = ProjectItem::new(board.active.assigned_projects().remove(0));
    assert_eq!(
        board.active.drop_payload(&card.drag_start()).unwrap(),
        MoveOutcome::Unchanged
    );
    assert_eq!(board.active.render_content(), rendered);
}

#[test]
fn lists_created_after_projects_start_empty_until_next_change() {
    let store = Arc::new(ProjectStore::with_id_generator(SequentialIdGenerator::new()));
    store.create_project("Build site", "A site build", 3);

    let late = ProjectList::new(ProjectStatus::Active, Arc::clone(&store));
    assert!(late.assigned_projects().is_empty());

    store.create_project("Docs", "Write the docs", 1);
    assert_eq!(late.assigned_projects().len(), 2);
}
