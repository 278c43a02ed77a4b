use rusqlite::Connection;
use ticklist_core::db::migrations::latest_version;
use ticklist_core::db::{open_db, open_db_in_memory};
use ticklist_core::{SqliteTaskStore, StoreError, TaskStore};

#[test]
fn create_assigns_increasing_ids_and_defaults() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteTaskStore::try_new(&conn).unwrap();

    let first = store.create_task("write report").unwrap();
    let second = store.create_task("file expenses").unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.title, "write report");
    assert!(!first.done);
    assert!(!second.done);
}

#[test]
fn list_on_empty_store_returns_empty() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();

    assert!(store.list_tasks().unwrap().is_empty());
}

#[test]
fn list_returns_tasks_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteTaskStore::try_new(&conn).unwrap();

    store.create_task("zebra").unwrap();
    store.create_task("apple").unwrap();
    store.create_task("mango").unwrap();

    let titles: Vec<String> = store
        .list_tasks()
        .unwrap()
        .into_iter()
        .map(|task| task.title)
        .collect();
    assert_eq!(titles, vec!["zebra", "apple", "mango"]);
}

#[test]
fn rename_changes_title_and_keeps_done_flag() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteTaskStore::try_new(&conn).unwrap();

    let task = store.create_task("drafr report").unwrap();
    store.toggle_done(task.id).unwrap();
    store.rename_task(task.id, "draft report").unwrap();

    let tasks = store.list_tasks().unwrap();
    assert_eq!(tasks[0].title, "draft report");
    assert!(tasks[0].done);
}

#[test]
fn rename_unknown_id_returns_not_found_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteTaskStore::try_new(&conn).unwrap();

    let existing = store.create_task("only task").unwrap();

    let err = store.rename_task(42, "never applied").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(42)));

    let tasks = store.list_tasks().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "only task");

    // The failed call must not burn an id.
    let next = store.create_task("second task").unwrap();
    assert_eq!(next.id, existing.id + 1);
}

#[test]
fn delete_removes_only_target_and_preserves_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteTaskStore::try_new(&conn).unwrap();

    let first = store.create_task("first").unwrap();
    let second = store.create_task("second").unwrap();
    let third = store.create_task("third").unwrap();

    store.delete_task(second.id).unwrap();

    let ids: Vec<i64> = store
        .list_tasks()
        .unwrap()
        .into_iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(ids, vec![first.id, third.id]);
}

#[test]
fn delete_unknown_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteTaskStore::try_new(&conn).unwrap();

    let err = store.delete_task(7).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(7)));
}

#[test]
fn deleted_ids_are_never_reassigned() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteTaskStore::try_new(&conn).unwrap();

    store.create_task("keep").unwrap();
    let doomed = store.create_task("remove").unwrap();
    store.delete_task(doomed.id).unwrap();

    let replacement = store.create_task("after delete").unwrap();
    assert!(replacement.id > doomed.id);
}

#[test]
fn toggle_flips_and_double_toggle_restores() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteTaskStore::try_new(&conn).unwrap();

    let task = store.create_task("flip me").unwrap();

    store.toggle_done(task.id).unwrap();
    assert!(store.list_tasks().unwrap()[0].done);

    store.toggle_done(task.id).unwrap();
    assert!(!store.list_tasks().unwrap()[0].done);
}

#[test]
fn toggle_unknown_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteTaskStore::try_new(&conn).unwrap();

    let err = store.toggle_done(99).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(99)));
}

#[test]
fn tasks_survive_reopen_and_ids_continue() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ticklist.db");

    {
        let conn = open_db(&path).unwrap();
        let mut store = SqliteTaskStore::try_new(&conn).unwrap();
        store.create_task("write report").unwrap();
        let doomed = store.create_task("file expenses").unwrap();
        store.delete_task(doomed.id).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let mut store = SqliteTaskStore::try_new(&conn).unwrap();

    let tasks = store.list_tasks().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "write report");

    let created = store.create_task("book travel").unwrap();
    assert_eq!(created.id, 3);
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteTaskStore::try_new(&conn);
    match result {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn store_rejects_connection_without_required_tasks_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTaskStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredTable("tasks"))
    ));
}

#[test]
fn store_rejects_connection_missing_required_tasks_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTaskStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredColumn {
            table: "tasks",
            column: "done"
        })
    ));
}

#[test]
fn invalid_done_value_in_storage_is_reported_not_masked() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            done INTEGER NOT NULL DEFAULT 0
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();
    conn.execute("INSERT INTO tasks (title, done) VALUES ('corrupt', 7);", [])
        .unwrap();

    let store = SqliteTaskStore::try_new(&conn).unwrap();
    let err = store.list_tasks().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}
