use library_core::db::schema::BOOKS_TABLE;
use library_core::db::{open_db, open_db_in_memory};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_books_table() {
    let conn = open_db_in_memory().unwrap();
    assert_table_exists(&conn, BOOKS_TABLE);
}

#[test]
fn opening_same_database_twice_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO books (title, author, year, status) VALUES ('Dune', 'Herbert', 1965, 'available');",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_table_exists(&conn_second, BOOKS_TABLE);
    let count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM books;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn books_table_rejects_null_columns() {
    let conn = open_db_in_memory().unwrap();
    let err = conn
        .execute(
            "INSERT INTO books (title, author, year, status) VALUES (NULL, 'a', 1, 'available');",
            [],
        )
        .unwrap_err();
    assert!(err.to_string().contains("NOT NULL"));
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
