#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_missing_key_is_none() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.get_value("nope").unwrap(), None);
}

#[test]
fn test_set_then_get() {
    let db = Database::open_in_memory().unwrap();
    db.set_value("budget", "2500").unwrap();
    assert_eq!(db.get_value("budget").unwrap().as_deref(), Some("2500"));
}

#[test]
fn test_set_overwrites_whole_value() {
    let db = Database::open_in_memory().unwrap();
    db.set_value("list", "[1,2,3]").unwrap();
    db.set_value("list", "[]").unwrap();
    assert_eq!(db.get_value("list").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_keys_are_independent() {
    let db = Database::open_in_memory().unwrap();
    db.set_value("a", "1").unwrap();
    db.set_value("b", "2").unwrap();
    db.remove_value("a").unwrap();
    assert_eq!(db.get_value("a").unwrap(), None);
    assert_eq!(db.get_value("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_remove_missing_key_is_ok() {
    let db = Database::open_in_memory().unwrap();
    db.remove_value("never-set").unwrap();
}

#[test]
fn test_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");
    {
        let db = Database::open(&path).unwrap();
        db.set_value("k", "persisted").unwrap();
    }
    let db = Database::open(&path).unwrap();
    assert_eq!(db.get_value("k").unwrap().as_deref(), Some("persisted"));
}

#[test]
fn test_reopen_does_not_reapply_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");
    Database::open(&path).unwrap();
    let db = Database::open(&path).unwrap();
    let version: i32 = db
        .conn
        .query_row("SELECT version FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, schema::CURRENT_VERSION);
    let rows: i64 = db
        .conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}
