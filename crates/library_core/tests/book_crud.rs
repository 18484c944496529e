use library_core::{
    Book, BookRepository, BookStatus, BookValidationError, RepoError, SqliteBookRepository,
};

fn seeded_repo() -> SqliteBookRepository {
    let repo = SqliteBookRepository::open_in_memory().unwrap();
    repo.insert_book(&Book::new("Dune", "Frank Herbert", 1965))
        .unwrap();
    repo.insert_book(&Book::new("Neuromancer", "William Gibson", 1984))
        .unwrap();
    repo.insert_book(&Book::new("100% Pure", "Anon_Writer", 2001))
        .unwrap();
    repo
}

#[test]
fn insert_assigns_increasing_ids_and_forces_available() {
    let repo = SqliteBookRepository::open_in_memory().unwrap();

    let mut checked_out = Book::new("Dune", "Herbert", 1965);
    checked_out.status = BookStatus::CheckedOut;
    let first = repo.insert_book(&checked_out).unwrap();
    let second = repo
        .insert_book(&Book::new("Emma", "Austen", 1815))
        .unwrap();

    assert!(second > first);
    let loaded = repo.get_book(first).unwrap().unwrap();
    assert_eq!(loaded.id, Some(first));
    assert_eq!(loaded.status, BookStatus::Available);
}

#[test]
fn insert_rejects_blank_fields_without_writing() {
    let repo = SqliteBookRepository::open_in_memory().unwrap();

    let err = repo.insert_book(&Book::new("", "Herbert", 1965)).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(BookValidationError::EmptyTitle)
    ));
    assert!(repo.list_books().unwrap().is_empty());
}

#[test]
fn delete_reports_whether_a_row_was_removed() {
    let repo = seeded_repo();

    assert!(repo.delete_book(2).unwrap());
    assert!(!repo.delete_book(2).unwrap());
    assert!(!repo.delete_book(999).unwrap());

    let ids: Vec<_> = repo
        .list_books()
        .unwrap()
        .into_iter()
        .filter_map(|book| book.id)
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let repo = SqliteBookRepository::open_in_memory().unwrap();
    let first = repo.insert_book(&Book::new("A", "B", 1)).unwrap();
    repo.delete_book(first).unwrap();

    let second = repo.insert_book(&Book::new("C", "D", 2)).unwrap();
    assert!(second > first);
}

#[test]
fn search_matches_title_author_and_year_text() {
    let repo = seeded_repo();

    let by_title = repo.search_books("Neuro").unwrap();
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Neuromancer");

    let by_author = repo.search_books("Herbert").unwrap();
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].title, "Dune");

    let by_year = repo.search_books("196").unwrap();
    assert_eq!(by_year.len(), 1);
    assert_eq!(by_year[0].year, 1965);
}

#[test]
fn search_uses_sqlite_ascii_case_folding() {
    let repo = seeded_repo();
    let hits = repo.search_books("dune").unwrap();
    assert_eq!(hits.len(), 1);
}

#[test]
fn search_treats_like_wildcards_literally() {
    let repo = seeded_repo();

    let percent = repo.search_books("%").unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "100% Pure");

    let underscore = repo.search_books("_").unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].author, "Anon_Writer");
}

#[test]
fn search_without_match_returns_empty() {
    let repo = seeded_repo();
    assert!(repo.search_books("Tolkien").unwrap().is_empty());
}

#[test]
fn set_status_changes_only_status() {
    let repo = seeded_repo();
    let before = repo.get_book(1).unwrap().unwrap();

    assert!(repo.set_status(1, BookStatus::CheckedOut).unwrap());
    assert!(!repo.set_status(42, BookStatus::CheckedOut).unwrap());

    let after = repo.get_book(1).unwrap().unwrap();
    assert_eq!(after.status, BookStatus::CheckedOut);
    assert_eq!(after.title, before.title);
    assert_eq!(after.author, before.author);
    assert_eq!(after.year, before.year);
}

#[test]
fn unknown_persisted_status_is_reported_as_invalid_data() {
    let repo = seeded_repo();
    repo.connection()
        .execute("UPDATE books SET status = 'lost' WHERE id = 1;", [])
        .unwrap();

    let err = repo.list_books().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("lost")));
}

#[test]
fn close_releases_connection_and_data_survives() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.db");

    let repo = SqliteBookRepository::open(&path).unwrap();
    repo.insert_book(&Book::new("Dune", "Herbert", 1965))
        .unwrap();
    repo.close().unwrap();

    let reopened = SqliteBookRepository::open(&path).unwrap();
    let books = reopened.list_books().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
}
