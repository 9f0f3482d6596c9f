//! Command-line interface for bookshelf.
//!
//! Provides one-shot subcommands for every catalog operation plus an
//! interactive numbered menu for a full session against one catalog.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::catalog::{Book, BookStatus, Catalog, SearchField};
use crate::config;

/// bookshelf - personal library catalog manager
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backing-store file (overrides environment and config file)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the catalog
    Add {
        /// Title of the book
        title: String,

        /// Author of the book
        author: String,

        /// Year of publication
        year: i32,
    },

    /// Remove a book by id
    Remove {
        /// Id of the book to remove
        id: u32,
    },

    /// Search the catalog
    Search {
        /// Search query (case-insensitive substring)
        query: String,

        /// Field to search in
        #[arg(short, long, value_enum, default_value_t = SearchField::Title)]
        field: SearchField,
    },

    /// List all books in catalog order
    List,

    /// Change the status of a book
    Status {
        /// Id of the book
        id: u32,

        /// New status
        #[arg(value_enum)]
        status: BookStatus,
    },

    /// Run the interactive menu
    Menu,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let path = match self.catalog {
            Some(ref path) => path.clone(),
            None => config::resolve()?.catalog,
        };

        match self.command {
            Commands::Add {
                title,
                author,
                year,
            } => add_book(&path, &title, &author, year).await,
            Commands::Remove { id } => remove_book(&path, id).await,
            Commands::Search { query, field } => search_books(&path, &query, field).await,
            Commands::List => list_books(&path).await,
            Commands::Status { id, status } => change_status(&path, id, status).await,
            Commands::Menu => run_menu(&path).await,
            Commands::Config => show_config(&path),
        }
    }
}

/// Add a book and report the assigned id
async fn add_book(path: &Path, title: &str, author: &str, year: i32) -> Result<()> {
    let mut catalog = Catalog::open(path).await?;

    let book = catalog
        .add(title, author, year)
        .await
        .context("Failed to add book")?;

    println!("Added {}", book);
    Ok(())
}

/// Remove a book by id
async fn remove_book(path: &Path, id: u32) -> Result<()> {
    let mut catalog = Catalog::open(path).await?;

    if catalog.remove(id).await.context("Failed to remove book")? {
        println!("Removed book {}", id);
    } else {
        println!("No book with id {}", id);
    }

    Ok(())
}

/// Search the catalog
async fn search_books(path: &Path, query: &str, field: SearchField) -> Result<()> {
    let catalog = Catalog::open(path).await?;

    let results = catalog.search(query, field);

    if results.is_empty() {
        println!("No results found for: {}", query);
        return Ok(());
    }

    println!(
        "Found {} result(s) for \"{}\" in {}:\n",
        results.len(),
        query,
        field
    );
    print_books(&results);

    Ok(())
}

/// List all books
async fn list_books(path: &Path) -> Result<()> {
    let catalog = Catalog::open(path).await?;

    if catalog.is_empty() {
        println!("Catalog is empty. Use 'bookshelf add' to add a book.");
        return Ok(());
    }

    let books: Vec<&Book> = catalog.books().iter().collect();
    print_books(&books);
    println!("\nTotal: {} books", catalog.len());

    Ok(())
}

/// Change the status of a book
async fn change_status(path: &Path, id: u32, status: BookStatus) -> Result<()> {
    let mut catalog = Catalog::open(path).await?;

    if catalog
        .change_status(id, status)
        .await
        .context("Failed to update status")?
    {
        println!("Book {} is now {}", id, status);
    } else {
        println!("No book with id {}", id);
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config(path: &Path) -> Result<()> {
    let cfg = config::resolve()?;

    println!("Catalog: {}", path.display());
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );

    Ok(())
}

/// Print books as an aligned table
fn print_books(books: &[&Book]) {
    println!(
        "{:<6} {:<32} {:<24} {:<6} {:<12}",
        "ID", "TITLE", "AUTHOR", "YEAR", "STATUS"
    );
    println!("{}", "-".repeat(82));

    for book in books {
        println!(
            "{:<6} {:<32} {:<24} {:<6} {:<12}",
            book.id,
            truncate(&book.title, 29),
            truncate(&book.author, 21),
            book.year,
            book.status.to_string()
        );
    }
}

/// Truncate a string to `max` characters, marking the cut with an ellipsis
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max).collect::<String>())
    } else {
        s.to_string()
    }
}

/// Print a prompt and read one trimmed line; None on end of input
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the interactive menu against one catalog instance.
///
/// Every error is reported and the loop returns to the menu; only quitting
/// (or end of input) leaves it.
async fn run_menu(path: &Path) -> Result<()> {
    let mut catalog = Catalog::open(path).await?;

    loop {
        println!();
        println!("Menu:");
        println!("1. Add a book");
        println!("2. Remove a book");
        println!("3. Search for books");
        println!("4. List all books");
        println!("5. Change a book's status");
        println!("0. Quit");

        let choice = match prompt("Choose an action: ")? {
            Some(line) => line,
            None => break,
        };

        match choice.as_str() {
            "1" => {
                if !menu_add(&mut catalog).await? {
                    break;
                }
            }
            "2" => {
                if !menu_remove(&mut catalog).await? {
                    break;
                }
            }
            "3" => {
                if !menu_search(&catalog)? {
                    break;
                }
            }
            "4" => menu_list(&catalog),
            "5" => {
                if !menu_change_status(&mut catalog).await? {
                    break;
                }
            }
            "0" => break,
            _ => println!("Invalid choice. Try again."),
        }
    }

    Ok(())
}

/// Menu action: add a book. Returns false on end of input.
async fn menu_add(catalog: &mut Catalog) -> Result<bool> {
    let title = match prompt("Title: ")? {
        Some(line) => line,
        None => return Ok(false),
    };
    let author = match prompt("Author: ")? {
        Some(line) => line,
        None => return Ok(false),
    };
    let year = match prompt("Year: ")? {
        Some(line) => line,
        None => return Ok(false),
    };

    match year.parse::<i32>() {
        Ok(year) => match catalog.add(&title, &author, year).await {
            Ok(book) => println!("Added {}", book),
            Err(e) => println!("Could not add book: {}", e),
        },
        Err(_) => println!("Year must be an integer."),
    }

    Ok(true)
}

/// Menu action: remove a book. Returns false on end of input.
async fn menu_remove(catalog: &mut Catalog) -> Result<bool> {
    let input = match prompt("Id of the book to remove: ")? {
        Some(line) => line,
        None => return Ok(false),
    };

    match input.parse::<u32>() {
        Ok(id) => match catalog.remove(id).await {
            Ok(true) => println!("Book removed."),
            Ok(false) => println!("No book with that id."),
            Err(e) => println!("Could not remove book: {}", e),
        },
        Err(_) => println!("Id must be a positive integer."),
    }

    Ok(true)
}

/// Menu action: search the catalog. Returns false on end of input.
fn menu_search(catalog: &Catalog) -> Result<bool> {
    let field = match prompt("Field to search (title, author, year): ")? {
        Some(line) => line,
        None => return Ok(false),
    };

    let field = match field.parse::<SearchField>() {
        Ok(field) => field,
        Err(e) => {
            println!("{}", e);
            return Ok(true);
        }
    };

    let query = match prompt("Search query: ")? {
        Some(line) => line,
        None => return Ok(false),
    };

    let results = catalog.search(&query, field);
    if results.is_empty() {
        println!("No books found.");
    } else {
        for book in results {
            println!("{}", book);
        }
    }

    Ok(true)
}

/// Menu action: list all books
fn menu_list(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("The catalog is empty.");
        return;
    }

    for book in catalog.books() {
        println!("{}", book);
    }
}

/// Menu action: change a book's status. Returns false on end of input.
async fn menu_change_status(catalog: &mut Catalog) -> Result<bool> {
    let input = match prompt("Id of the book: ")? {
        Some(line) => line,
        None => return Ok(false),
    };

    let id = match input.parse::<u32>() {
        Ok(id) => id,
        Err(_) => {
            println!("Id must be a positive integer.");
            return Ok(true);
        }
    };

    let status = match prompt("New status (available / checked-out): ")? {
        Some(line) => line,
        None => return Ok(false),
    };

    match status.parse::<BookStatus>() {
        Ok(status) => match catalog.change_status(id, status).await {
            Ok(true) => println!("Status updated."),
            Ok(false) => println!("No book with that id."),
            Err(e) => println!("Could not update status: {}", e),
        },
        Err(e) => println!("{}", e),
    }

    Ok(true)
}
