//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{ids::PlayerId, image_ref::ImageRef, name::PlayerName};
use crate::error::PlayerError;
use rusqlite::params;

fn create_test_db() -> PlayerDatabase {
    PlayerDatabase::new_in_memory().unwrap()
}

fn new_player(name: &str, img: &str) -> NewFootballPlayer {
    NewFootballPlayer {
        name: PlayerName::new(name).unwrap(),
        img: ImageRef::new(img).unwrap(),
    }
}

#[test]
fn test_database_creation() {
    let db = create_test_db();
    assert_eq!(db.count_players().unwrap(), 0);
}

#[test]
fn test_initialize_schema_is_idempotent() {
    let mut db = create_test_db();
    db.insert_player(&new_player("Test Player", "test.png"))
        .unwrap();

    db.initialize_schema().unwrap();
    assert_eq!(db.count_players().unwrap(), 1);
}

#[test]
fn test_check_constraint_rejects_long_name() {
    let db = create_test_db();

    let result = db.conn.execute(
        "INSERT INTO football_player (name, img, created_at, updated_at) VALUES (?, ?, 0, 0)",
        params!["x".repeat(201), "a.png"],
    );
    assert!(result.is_err());

    let result = db.conn.execute(
        "INSERT INTO football_player (name, img, created_at, updated_at) VALUES (?, ?, 0, 0)",
        params!["x".repeat(200), "a.png"],
    );
    assert!(result.is_ok());
}

#[test]
fn test_check_constraint_rejects_empty_and_long_image() {
    let db = create_test_db();

    let empty = db.conn.execute(
        "INSERT INTO football_player (name, img, created_at, updated_at) VALUES ('A', '', 0, 0)",
        [],
    );
    assert!(empty.is_err());

    let long = db.conn.execute(
        "INSERT INTO football_player (name, img, created_at, updated_at) VALUES ('A', ?, 0, 0)",
        params!["i".repeat(101)],
    );
    assert!(long.is_err());
}

#[test]
fn test_corrupt_row_surfaces_as_error() {
    let db = create_test_db();

    // Bypasses ImageRef validation but satisfies the CHECK constraint
    db.conn
        .execute(
            "INSERT INTO football_player (name, img, created_at, updated_at)
             VALUES ('Rogue', '../escape.png', 0, 0)",
            [],
        )
        .unwrap();

    let id = PlayerId::new(db.conn.last_insert_rowid());
    match db.get_player(id) {
        Err(PlayerError::Database(_)) => (),
        other => panic!("Expected Database error, got {:?}", other),
    }
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let mut db = create_test_db();

    let first = db.insert_player(&new_player("First", "first.png")).unwrap();
    db.delete_player(first.id).unwrap();
    let second = db
        .insert_player(&new_player("Second", "second.png"))
        .unwrap();

    assert!(second.id > first.id);
}

#[test]
fn test_like_wildcards_are_literal() {
    let mut db = create_test_db();
    db.insert_player(&new_player("100% Effort", "a.png")).unwrap();
    db.insert_player(&new_player("Plain Name", "b.png")).unwrap();

    let query = PlayerQuery {
        name_contains: Some("%".to_string()),
        ..Default::default()
    };
    let players = db.list_players(&query).unwrap();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name.as_str(), "100% Effort");
}

#[test]
fn test_player_order_parse() {
    assert_eq!("id".parse::<PlayerOrder>().unwrap(), PlayerOrder::Id);
    assert_eq!("NAME".parse::<PlayerOrder>().unwrap(), PlayerOrder::Name);
    assert!("age".parse::<PlayerOrder>().is_err());
}
