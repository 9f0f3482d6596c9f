//! Book records and their closed vocabularies.

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Availability status of a book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// On the shelf
    #[default]
    Available,

    /// Lent out
    CheckedOut,
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookStatus::Available => write!(f, "available"),
            BookStatus::CheckedOut => write!(f, "checked out"),
        }
    }
}

impl std::str::FromStr for BookStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "available" | "in" => Ok(BookStatus::Available),
            "checked out" | "checked-out" | "checked_out" | "checkedout" | "out" => {
                Ok(BookStatus::CheckedOut)
            }
            _ => anyhow::bail!("Unknown status: {}", s),
        }
    }
}

/// Field a catalog search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchField {
    /// Match against the title
    Title,

    /// Match against the author
    Author,

    /// Match against the decimal form of the year
    Year,
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
            SearchField::Year => write!(f, "year"),
        }
    }
}

impl std::str::FromStr for SearchField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "year" => Ok(SearchField::Year),
            _ => anyhow::bail!("Unknown search field: {} (expected title, author or year)", s),
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, assigned by the catalog and never reassigned
    pub id: u32,

    /// Title of the book
    pub title: String,

    /// Author of the book
    pub author: String,

    /// Year of publication
    pub year: i32,

    /// Availability status
    #[serde(default)]
    pub status: BookStatus,
}

impl Book {
    /// Create a new book with the default status
    pub fn new(id: u32, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status: BookStatus::Available,
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} by {} ({}) - {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("available".parse::<BookStatus>().unwrap(), BookStatus::Available);
        assert_eq!("Checked_Out".parse::<BookStatus>().unwrap(), BookStatus::CheckedOut);
        assert_eq!("checked-out".parse::<BookStatus>().unwrap(), BookStatus::CheckedOut);
        assert_eq!("OUT".parse::<BookStatus>().unwrap(), BookStatus::CheckedOut);
        assert!("bogus".parse::<BookStatus>().is_err());
    }

    #[test]
    fn test_status_display_round_trips() {
        for status in [BookStatus::Available, BookStatus::CheckedOut] {
            assert_eq!(status.to_string().parse::<BookStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&BookStatus::Available).unwrap(),
            "\"available\""
        );
        assert_eq!(
            serde_json::to_string(&BookStatus::CheckedOut).unwrap(),
            "\"checked_out\""
        );
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("title".parse::<SearchField>().unwrap(), SearchField::Title);
        assert_eq!("AUTHOR".parse::<SearchField>().unwrap(), SearchField::Author);
        assert_eq!("year".parse::<SearchField>().unwrap(), SearchField::Year);
        assert!("isbn".parse::<SearchField>().is_err());
    }

    #[test]
    fn test_book_display() {
        let book = Book::new(1, "Moby Dick", "Herman Melville", 1851);
        assert_eq!(
            book.to_string(),
            "1: Moby Dick by Herman Melville (1851) - available"
        );
    }
}
