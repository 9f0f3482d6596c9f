//! Catalog store: an in-memory book list mirrored to a JSON file.
//!
//! The backing store is a single pretty-printed JSON array of book objects.
//! Every mutating operation rewrites the file in full before returning, so
//! the file and memory never diverge. If the write fails the in-memory state
//! is already mutated and the error propagates to the caller.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use super::book::{Book, BookStatus, SearchField};
use super::error::{CatalogError, ValidationError};

/// A catalog of books bound to one backing file
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Backing-store location
    path: PathBuf,

    /// All books, in insertion order
    books: Vec<Book>,
}

impl Catalog {
    /// Open the catalog at `path`, loading the full record set.
    ///
    /// A missing file yields an empty catalog bound to that path; any other
    /// read or parse failure is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();

        if !path.exists() {
            debug!(path = %path.display(), "no backing store, starting empty");
            return Ok(Self {
                path,
                books: Vec::new(),
            });
        }

        let content = fs::read_to_string(&path).await?;
        let books: Vec<Book> = serde_json::from_str(&content)?;
        debug!(path = %path.display(), count = books.len(), "catalog loaded");

        Ok(Self { path, books })
    }

    /// Write the full record set to the backing file, overwriting it
    pub async fn save(&self) -> Result<(), CatalogError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(&self.books)?;
        fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), count = self.books.len(), "catalog saved");

        Ok(())
    }

    /// Add a new book and persist the catalog.
    ///
    /// Title and author must be non-empty after trimming and the year must be
    /// positive. The new id is one past the highest id currently in the
    /// catalog, so ids of still-present books are always unique.
    pub async fn add(
        &mut self,
        title: &str,
        author: &str,
        year: i32,
    ) -> Result<Book, CatalogError> {
        let title = title.trim();
        let author = author.trim();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if author.is_empty() {
            return Err(ValidationError::EmptyAuthor.into());
        }
        if year <= 0 {
            return Err(ValidationError::InvalidYear(year).into());
        }

        let id = self.books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let book = Book::new(id, title, author, year);
        self.books.push(book.clone());
        self.save().await?;

        Ok(book)
    }

    /// Remove the book with the given id and persist the catalog.
    ///
    /// Returns whether a book was removed; a missing id is not an error.
    pub async fn remove(&mut self, id: u32) -> Result<bool, CatalogError> {
        if let Some(pos) = self.books.iter().position(|b| b.id == id) {
            self.books.remove(pos);
            self.save().await?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Get a book by id
    pub fn get(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Check whether a book with the given id exists
    pub fn exists(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Search books by a case-insensitive substring match on one field.
    ///
    /// Matches are returned in catalog order; no matches is an empty vec.
    pub fn search(&self, query: &str, field: SearchField) -> Vec<&Book> {
        let query = query.to_lowercase();

        self.books
            .iter()
            .filter(|book| {
                let haystack = match field {
                    SearchField::Title => book.title.to_lowercase(),
                    SearchField::Author => book.author.to_lowercase(),
                    SearchField::Year => book.year.to_string(),
                };
                haystack.contains(&query)
            })
            .collect()
    }

    /// Set the status of the book with the given id and persist the catalog.
    ///
    /// Returns `Ok(false)` without touching the file if the id does not exist.
    pub async fn change_status(
        &mut self,
        id: u32,
        status: BookStatus,
    ) -> Result<bool, CatalogError> {
        match self.books.iter_mut().find(|b| b.id == id) {
            Some(book) => book.status = status,
            None => return Ok(false),
        }
        self.save().await?;

        Ok(true)
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Get the number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The bound backing-store location
    pub fn path(&self) -> &Path {
        &self.path
    }
}
