//! Catalog Persistence Integration Tests
//!
//! Tests for the backing-store format, round-trip loading, and the
//! mirror-on-every-mutation contract.

use bookshelf::{BookStatus, Catalog, SearchField};
use tempfile::TempDir;

#[tokio::test]
async fn test_round_trip_preserves_records() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");

    let mut catalog = Catalog::open(&path).await.unwrap();
    catalog.add("Moby Dick", "Herman Melville", 1851).await.unwrap();
    catalog.add("Dracula", "Bram Stoker", 1897).await.unwrap();
    catalog.add("Dubliners", "James Joyce", 1914).await.unwrap();
    catalog.change_status(2, BookStatus::CheckedOut).await.unwrap();

    let reloaded = Catalog::open(&path).await.unwrap();

    // Same ids, fields and order
    assert_eq!(reloaded.books(), catalog.books());
    assert_eq!(reloaded.get(2).unwrap().status, BookStatus::CheckedOut);
}

#[tokio::test]
async fn test_missing_file_is_empty_catalog() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nonexistent.json");

    let catalog = Catalog::open(&path).await.unwrap();

    assert!(catalog.is_empty());
    // Opening alone does not create the file
    assert!(!path.exists());
}

#[tokio::test]
async fn test_every_mutation_rewrites_backing_store() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");

    let mut catalog = Catalog::open(&path).await.unwrap();

    let book = catalog.add("Moby Dick", "Herman Melville", 1851).await.unwrap();
    assert_eq!(Catalog::open(&path).await.unwrap().len(), 1);

    catalog
        .change_status(book.id, BookStatus::CheckedOut)
        .await
        .unwrap();
    assert_eq!(
        Catalog::open(&path).await.unwrap().get(book.id).unwrap().status,
        BookStatus::CheckedOut
    );

    catalog.remove(book.id).await.unwrap();
    assert!(Catalog::open(&path).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ids_survive_restart_without_reuse() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");

    let mut catalog = Catalog::open(&path).await.unwrap();
    catalog.add("Moby Dick", "Herman Melville", 1851).await.unwrap();
    catalog.add("Dracula", "Bram Stoker", 1897).await.unwrap();
    catalog.add("Dubliners", "James Joyce", 1914).await.unwrap();
    catalog.remove(2).await.unwrap();

    // A fresh instance continues the id sequence from the highest survivor
    let mut reloaded = Catalog::open(&path).await.unwrap();
    let next = reloaded.add("Ulysses", "James Joyce", 1922).await.unwrap();

    assert_eq!(next.id, 4);
    let ids: Vec<u32> = reloaded.books().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[tokio::test]
async fn test_backing_store_format() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");

    let mut catalog = Catalog::open(&path).await.unwrap();
    catalog.add("Война и мир", "Лев Толстой", 1869).await.unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();

    // Document root is the array itself, pretty-printed
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let books = value.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert!(content.lines().count() > 1);

    let book = &books[0];
    assert_eq!(book["id"], 1);
    assert_eq!(book["title"], "Война и мир");
    assert_eq!(book["author"], "Лев Толстой");
    assert_eq!(book["year"], 1869);
    assert_eq!(book["status"], "available");

    // Non-ASCII characters are emitted literally, not escaped
    assert!(content.contains("Война и мир"));
    assert!(!content.contains("\\u"));
}

#[tokio::test]
async fn test_search_against_reloaded_catalog() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");

    let mut catalog = Catalog::open(&path).await.unwrap();
    catalog.add("Moby Dick", "Herman Melville", 1851).await.unwrap();

    let reloaded = Catalog::open(&path).await.unwrap();

    assert_eq!(reloaded.search("moby", SearchField::Title).len(), 1);
    assert_eq!(reloaded.search("MELVILLE", SearchField::Author).len(), 1);
    assert_eq!(reloaded.search("1851", SearchField::Year).len(), 1);
    assert!(reloaded.search("Odyssey", SearchField::Title).is_empty());
}
