use super::{is_plain_file_name, DataStore};
use crate::error::{LibrisError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves `filename` inside the data directory.
    ///
    /// Only plain relative names are accepted so a configured filename cannot
    /// point outside the store.
    pub fn path_for(&self, filename: &str) -> Result<PathBuf> {
        if !is_plain_file_name(filename) {
            return Err(LibrisError::Store(format!(
                "Invalid data file name: {:?}",
                filename
            )));
        }
        Ok(self.root.join(filename))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read(&self, filename: &str) -> Result<Option<String>> {
        let path = self.path_for(filename)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, filename: &str, content: &str) -> Result<()> {
        let path = self.path_for(filename)?;
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}
