//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence gateway for the catalog. Backends
//! only move raw text in and out of named files; the collection encoding lives
//! in the provided methods so every backend stores the same format.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a data directory
//! - [`memory::InMemoryStore`]: Map-backed storage for tests
//!
//! ## Storage Format
//!
//! Each collection is a pretty-printed JSON array in its own file:
//!
//! ```text
//! <data dir>/
//! ├── books.json          # [{"title": ..., "author": ..., "book_id": ...}]
//! ├── subscribers.json    # [{"first_name": ..., "borrowed_books": [...]}]
//! └── config.json         # LibrisConfig
//! ```
//!
//! A missing or empty file loads as an empty collection. Clearing a file
//! leaves it in place holding an empty collection.

use crate::error::Result;
use crate::model::{Book, EntityKind, Subscriber};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Component, Path};
use tracing::debug;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Raw contents of `filename`, or `None` when it does not exist.
    fn read(&self, filename: &str) -> Result<Option<String>>;

    /// Replaces the contents of `filename`, creating it when needed.
    fn write(&mut self, filename: &str, content: &str) -> Result<()>;

    fn load_books(&self, filename: &str) -> Result<Vec<Book>> {
        load_collection(self, EntityKind::Book, filename)
    }

    fn save_books(&mut self, books: &[Book], filename: &str) -> Result<()> {
        save_collection(self, EntityKind::Book, books, filename)
    }

    fn load_subscribers(&self, filename: &str) -> Result<Vec<Subscriber>> {
        load_collection(self, EntityKind::Subscriber, filename)
    }

    fn save_subscribers(&mut self, subscribers: &[Subscriber], filename: &str) -> Result<()> {
        save_collection(self, EntityKind::Subscriber, subscribers, filename)
    }

    /// Empties every named file.
    fn clear(&mut self, filenames: &[&str]) -> Result<()> {
        for filename in filenames {
            self.write(filename, "")?;
            debug!(filename, "cleared");
        }
        Ok(())
    }
}

/// True when `name` is a relative file name with no `..`, root or prefix parts,
/// so it always resolves inside the data directory.
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

fn load_collection<S, T>(store: &S, kind: EntityKind, filename: &str) -> Result<Vec<T>>
where
    S: DataStore + ?Sized,
    T: DeserializeOwned,
{
    let items: Vec<T> = match store.read(filename)? {
        Some(content) if !content.trim().is_empty() => serde_json::from_str(&content)?,
        _ => Vec::new(),
    };
    debug!(%kind, filename, count = items.len(), "loaded collection");
    Ok(items)
}

fn save_collection<S, T>(
    store: &mut S,
    kind: EntityKind,
    items: &[T],
    filename: &str,
) -> Result<()>
where
    S: DataStore + ?Sized,
    T: Serialize,
{
    let content = serde_json::to_string_pretty(items)?;
    store.write(filename, &content)?;
    debug!(%kind, filename, count = items.len(), "saved collection");
    Ok(())
}
