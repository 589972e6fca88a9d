use crate::api::{LibrisApi, LibrisPaths};
use crate::config::LibrisConfig;
use crate::error::{LibrisError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const HOME_ENV: &str = "LIBRIS_HOME";

pub struct LibrisContext {
    pub api: LibrisApi<FileStore>,
}

/// Picks the data directory: explicit override, then `$LIBRIS_HOME`, then the
/// platform data dir.
pub fn resolve_data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "libris", "libris")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LibrisError::Config("Could not determine a data directory".to_string()))
}

/// Builds the API over `data_dir` with an empty catalog. The data files are
/// not touched, so this works even when they are unreadable.
pub fn open(data_dir: &Path) -> Result<LibrisContext> {
    let config = LibrisConfig::load(data_dir)?;
    debug!(data_dir = %data_dir.display(), ?config, "opening data dir");

    let store = FileStore::new(data_dir);
    let paths = LibrisPaths {
        data_dir: data_dir.to_path_buf(),
    };
    Ok(LibrisContext {
        api: LibrisApi::new(store, config, paths),
    })
}

/// Like [`open`], then loads whatever catalog is saved there.
pub fn initialize(data_dir: &Path) -> Result<LibrisContext> {
    let mut ctx = open(data_dir)?;
    ctx.api.load()?;
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn override_wins() {
        let dir = resolve_data_dir(Some(Path::new("/srv/libris"))).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/libris"));
    }

    #[test]
    fn initialize_on_fresh_dir_gives_empty_catalog() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path()).unwrap();
        assert!(ctx.api.catalog().books().is_empty());
        assert_eq!(ctx.api.catalog().library().name, "City Library");
    }

    #[test]
    fn open_ignores_unreadable_data_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("books.json"), "{not json").unwrap();

        assert!(initialize(temp.path()).is_err());

        let mut ctx = open(temp.path()).unwrap();
        assert!(ctx.api.catalog().books().is_empty());
        ctx.api.clear().unwrap();
        assert!(initialize(temp.path()).is_ok());
    }

    #[test]
    fn initialize_loads_saved_catalog_with_configured_library() {
        let temp = TempDir::new().unwrap();
        let mut config = LibrisConfig::default();
        config.set("library-name", "Harbor Branch").unwrap();
        config.save(temp.path()).unwrap();

        {
            let mut ctx = initialize(temp.path()).unwrap();
            ctx.api.add_book("Dune", "Herbert", 1).unwrap();
            ctx.api.add_subscriber("Ada", "Lovelace").unwrap();
            ctx.api.save().unwrap();
        }

        let ctx = initialize(temp.path()).unwrap();
        assert_eq!(ctx.api.catalog().books()[0].title, "Dune");
        assert_eq!(ctx.api.catalog().subscribers()[0].library, "Harbor Branch");
    }
}
