//! Configuration for the bookshelf backing store.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variable (BOOKSHELF_CATALOG)
//! 2. Config file (.bookshelf/config.yaml)
//! 3. Default (~/.bookshelf/catalog.json)
//!
//! Config file discovery:
//! - Searches current directory and parents for .bookshelf/config.yaml
//! - The `catalog` path in the config file is relative to the config file's
//!   project root (the parent of the .bookshelf/ directory)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Backing-store file (relative to the project root)
    pub catalog: Option<String>,
}

/// Resolved configuration with an absolute backing-store path
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Path of the catalog backing store
    pub catalog: PathBuf,

    /// Path to the config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".bookshelf").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path_str)
    }
}

/// Resolve configuration from all sources.
///
/// Returns a plain value; there is no process-wide cache, so independent
/// catalogs with different backing stores stay constructible.
pub fn resolve() -> Result<ResolvedConfig> {
    resolve_from(std::env::var("BOOKSHELF_CATALOG").ok())
}

fn resolve_from(env_catalog: Option<String>) -> Result<ResolvedConfig> {
    // Environment variable wins outright
    if let Some(env_path) = env_catalog {
        return Ok(ResolvedConfig {
            catalog: PathBuf::from(env_path),
            config_file: None,
        });
    }

    // Config file found - resolve relative to its project root
    if let Some(config_path) = find_config_file() {
        let config = load_config_file(&config_path)?;

        let base_dir = config_path
            .parent() // .bookshelf/
            .and_then(|p| p.parent()) // project root
            .unwrap_or(Path::new("."));

        let catalog = match config.catalog {
            Some(ref catalog_path) => resolve_path(base_dir, catalog_path),
            None => base_dir.join(".bookshelf").join("catalog.json"),
        };

        return Ok(ResolvedConfig {
            catalog,
            config_file: Some(config_path),
        });
    }

    // No config file - use the home-directory default
    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(ResolvedConfig {
        catalog: home.join(".bookshelf").join("catalog.json"),
        config_file: None,
    })
}
