//! bookshelf - personal library catalog manager
//!
//! A single-user book catalog persisted to a local JSON file. The in-memory
//! catalog is the source of truth while the process runs; every mutation
//! rewrites the backing file in full, so file and memory never diverge.
//!
//! # Modules
//!
//! - `catalog`: The core (Book record, JSON-backed store, error taxonomy)
//! - `cli`: Command-line interface and interactive menu
//! - `config`: Backing-store path resolution
//!
//! # Usage
//!
//! ```bash
//! # Add a book
//! bookshelf add "Moby Dick" "Herman Melville" 1851
//!
//! # Search by author
//! bookshelf search melville --field author
//!
//! # Check a book out
//! bookshelf status 1 checked-out
//!
//! # Full interactive session
//! bookshelf menu
//! ```

pub mod catalog;
pub mod cli;
pub mod config;

// Re-export main types at crate root for convenience
pub use catalog::{Book, BookStatus, Catalog, CatalogError, SearchField, ValidationError};
