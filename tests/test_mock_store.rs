mod mocks;

use address_book::{AddressBook, Record, StorageError};
use mocks::MockContactStore;

fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phones {
        record.add_phone(*phone).unwrap();
    }
    record
}

#[test]
fn test_load_from_empty_store_keeps_contents() {
    let store = MockContactStore::new();
    let mut book: AddressBook = vec![sample_record("Alice", &[])].into_iter().collect();

    book.load_from(&store).unwrap();

    assert_eq!(book.names().collect::<Vec<_>>(), vec!["Alice"]);
    assert_eq!(store.get_call_count("load"), 1);
}

#[test]
fn test_load_replaces_contents() {
    let stored: AddressBook = vec![sample_record("Alice", &["1111111111"])]
        .into_iter()
        .collect();
    let store = MockContactStore::with_book(stored);

    let mut book: AddressBook = vec![sample_record("Bob", &[])].into_iter().collect();
    book.load_from(&store).unwrap();

    assert_eq!(book.names().collect::<Vec<_>>(), vec!["Alice"]);
}

#[test]
fn test_save_stores_whole_book() {
    let store = MockContactStore::new();
    let mut book = AddressBook::new();
    book.add_record(sample_record("Alice", &["1111111111"]));
    book.add_record(sample_record("Bob", &[]));

    book.save_to(&store).unwrap();

    assert_eq!(store.get_call_count("save"), 1);
    assert_eq!(store.stored(), Some(book));
}

#[test]
fn test_save_error_propagates() {
    let store = MockContactStore::new();
    store.fail_saves();

    let result = AddressBook::new().save_to(&store);
    assert!(matches!(result, Err(StorageError::Io { .. })));
    assert!(store.stored().is_none());
}
