use library_core::{Book, BookStatus, BookValidationError};

#[test]
fn new_book_is_unsaved_and_available() {
    let book = Book::new("Dune", "Herbert", 1965);
    assert_eq!(book.id, None);
    assert!(!book.is_persisted());
    assert_eq!(book.status, BookStatus::Available);
    assert!(book.validate().is_ok());
}

#[test]
fn validate_rejects_blank_title_and_author() {
    assert_eq!(
        Book::new("  ", "Herbert", 1965).validate(),
        Err(BookValidationError::EmptyTitle)
    );
    assert_eq!(
        Book::new("Dune", "", 1965).validate(),
        Err(BookValidationError::EmptyAuthor)
    );
}

#[test]
fn status_parses_only_the_two_stored_values() {
    assert_eq!("available".parse::<BookStatus>(), Ok(BookStatus::Available));
    assert_eq!(
        " checked_out\n".parse::<BookStatus>(),
        Ok(BookStatus::CheckedOut)
    );
    assert_eq!(
        "lost".parse::<BookStatus>(),
        Err(BookValidationError::InvalidStatus("lost".to_string()))
    );
    assert!("Available".parse::<BookStatus>().is_err());
}

#[test]
fn status_serializes_as_stored_text() {
    let json = serde_json::to_string(&BookStatus::CheckedOut).unwrap();
    assert_eq!(json, "\"checked_out\"");
    assert_eq!(BookStatus::CheckedOut.to_string(), "checked_out");

    let parsed: BookStatus = serde_json::from_str("\"available\"").unwrap();
    assert_eq!(parsed, BookStatus::Available);
}

#[test]
fn same_record_compares_by_id_only() {
    let mut a = Book::new("Dune", "Herbert", 1965);
    let mut b = Book::new("Other", "Someone", 2000);
    assert!(!a.same_record(&b));

    a.id = Some(7);
    b.id = Some(7);
    assert!(a.same_record(&b));
    assert_ne!(a, b);
}

#[test]
fn display_matches_listing_format() {
    let mut book = Book::new("Dune", "Herbert", 1965);
    book.id = Some(1);
    assert_eq!(book.to_string(), "1: Dune - Herbert (1965) [available]");
}
