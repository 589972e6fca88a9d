//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! in-memory [`Catalog`], the storage backend and the active configuration, and
//! is the single entry point for every libris operation.
//!
//! The API:
//! - **Dispatches** to the matching command function
//! - **Resolves** data file names from the configuration
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not print, does not decide exit codes, and holds no business rules
//! of its own; those belong to `catalog.rs` and `commands/*.rs`.
//!
//! `LibrisApi<S: DataStore>` is generic over the storage backend:
//! - Production: `LibrisApi<FileStore>`
//! - Testing: `LibrisApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::config::LibrisConfig;
use crate::error::Result;
use crate::model::Library;
use crate::session::Session;
use crate::store::DataStore;
use tracing::debug;

pub struct LibrisApi<S: DataStore> {
    store: S,
    catalog: Catalog,
    config: LibrisConfig,
    paths: commands::LibrisPaths,
}

impl<S: DataStore> LibrisApi<S> {
    /// Builds an API with an empty catalog bound to the configured library.
    pub fn new(store: S, config: LibrisConfig, paths: commands::LibrisPaths) -> Self {
        let catalog = Catalog::new(Library::new(config.library_name.clone()));
        Self {
            store,
            catalog,
            config,
            paths,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &LibrisConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn data_files(&self) -> commands::DataFiles {
        commands::DataFiles::from_config(&self.config)
    }

    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        book_id: i32,
    ) -> Result<commands::CmdResult> {
        commands::add::book(&mut self.catalog, title, author, book_id)
    }

    pub fn add_subscriber(
        &mut self,
        first_name: &str,
        last_name: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::subscriber(&mut self.catalog, first_name, last_name)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::books(&self.catalog)
    }

    pub fn list_subscribers(&self) -> Result<commands::CmdResult> {
        commands::list::subscribers(&self.catalog)
    }

    pub fn sort_books(&mut self) -> Result<commands::CmdResult> {
        commands::sort::books(&mut self.catalog)
    }

    pub fn sort_subscribers(&mut self) -> Result<commands::CmdResult> {
        commands::sort::subscribers(&mut self.catalog)
    }

    pub fn group_subscribers(&mut self) -> Result<commands::CmdResult> {
        commands::sort::group_by_borrowed(&mut self.catalog)
    }

    pub fn borrow_book<T: Session + ?Sized>(
        &mut self,
        session: &mut T,
    ) -> Result<commands::CmdResult> {
        commands::borrow::run(&mut self.catalog, session)
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        let files = self.data_files();
        commands::storage::load(&self.store, &mut self.catalog, &files)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        let files = self.data_files();
        commands::storage::save(&mut self.store, &self.catalog, &files)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        let files = self.data_files();
        commands::storage::clear(&mut self.store, &files)
    }

    /// Saves when `result` changed the catalog and autosave is on.
    pub fn autosave(&mut self, result: &commands::CmdResult) -> Result<()> {
        if result.changed && self.config.autosave {
            debug!("autosaving catalog");
            self.save()?;
        }
        Ok(())
    }

    pub fn configure(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            if config.library_name != self.catalog.library().name {
                self.catalog
                    .rename_library(Library::new(config.library_name.clone()));
            }
            self.config = config.clone();
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DataFiles, LibrisPaths, MessageLevel};
