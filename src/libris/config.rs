use crate::error::{LibrisError, Result};
use crate::model::DEFAULT_LIBRARY_NAME;
use crate::store::is_plain_file_name;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOKS_FILE: &str = "books.json";
const DEFAULT_SUBSCRIBERS_FILE: &str = "subscribers.json";

/// Configuration for libris, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibrisConfig {
    /// File the book collection is saved to, relative to the data dir
    #[serde(default = "default_books_file")]
    pub books_file: String,

    #[serde(default = "default_subscribers_file")]
    pub subscribers_file: String,

    /// Name of the library every subscriber is registered with
    #[serde(default = "default_library_name")]
    pub library_name: String,

    /// Save after every one-shot command that changes the catalog
    #[serde(default = "default_autosave")]
    pub autosave: bool,
}

fn default_books_file() -> String {
    DEFAULT_BOOKS_FILE.to_string()
}

fn default_subscribers_file() -> String {
    DEFAULT_SUBSCRIBERS_FILE.to_string()
}

fn default_library_name() -> String {
    DEFAULT_LIBRARY_NAME.to_string()
}

fn default_autosave() -> bool {
    true
}

impl Default for LibrisConfig {
    fn default() -> Self {
        Self {
            books_file: default_books_file(),
            subscribers_file: default_subscribers_file(),
            library_name: default_library_name(),
            autosave: default_autosave(),
        }
    }
}

impl LibrisConfig {
    pub const KEYS: [&'static str; 4] = [
        "books-file",
        "subscribers-file",
        "library-name",
        "autosave",
    ];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: LibrisConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "books-file" => Some(self.books_file.clone()),
            "subscribers-file" => Some(self.subscribers_file.clone()),
            "library-name" => Some(self.library_name.clone()),
            "autosave" => Some(self.autosave.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "books-file" | "subscribers-file" | "library-name" if value.is_empty() => {
                Err(LibrisError::Config(format!("{} cannot be empty", key)))
            }
            "books-file" => {
                self.books_file = data_file_name(key, value)?;
                Ok(())
            }
            "subscribers-file" => {
                self.subscribers_file = data_file_name(key, value)?;
                Ok(())
            }
            "library-name" => {
                self.library_name = value.to_string();
                Ok(())
            }
            "autosave" => {
                self.autosave = parse_bool(value).ok_or_else(|| {
                    LibrisError::Config(format!("autosave expects true or false, got {}", value))
                })?;
                Ok(())
            }
            other => Err(LibrisError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}

/// Data files must stay inside the data directory, the same rule the file
/// store enforces when reading and writing them.
fn data_file_name(key: &str, value: &str) -> Result<String> {
    if !is_plain_file_name(value) {
        return Err(LibrisError::Config(format!(
            "{} must be a plain file name inside the data directory, got {:?}",
            key, value
        )));
    }
    Ok(value.to_string())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LibrisConfig::default();
        assert_eq!(config.books_file, "books.json");
        assert_eq!(config.subscribers_file, "subscribers.json");
        assert_eq!(config.library_name, "City Library");
        assert!(config.autosave);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = LibrisConfig::load(temp.path()).unwrap();
        assert_eq!(config, LibrisConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("data");

        let mut config = LibrisConfig::default();
        config.set("library-name", "Harbor Branch").unwrap();
        config.save(&dir).unwrap();

        let loaded = LibrisConfig::load(&dir).unwrap();
        assert_eq!(loaded.library_name, "Harbor Branch");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"books_file": "catalog.json"}"#,
        )
        .unwrap();

        let config = LibrisConfig::load(temp.path()).unwrap();
        assert_eq!(config.books_file, "catalog.json");
        assert_eq!(config.subscribers_file, "subscribers.json");
    }

    #[test]
    fn test_set_autosave() {
        let mut config = LibrisConfig::default();
        config.set("autosave", "off").unwrap();
        assert!(!config.autosave);
        assert!(config.set("autosave", "maybe").is_err());
    }

    #[test]
    fn test_set_rejects_unknown_and_empty() {
        let mut config = LibrisConfig::default();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("books-file", "  ").is_err());
        assert_eq!(config, LibrisConfig::default());
    }

    #[test]
    fn test_set_rejects_data_files_outside_the_data_dir() {
        let mut config = LibrisConfig::default();
        assert!(config.set("books-file", "../x").is_err());
        assert!(config.set("subscribers-file", "/tmp/subscribers.json").is_err());
        assert_eq!(config, LibrisConfig::default());

        config.set("books-file", "catalog.json").unwrap();
        assert_eq!(config.books_file, "catalog.json");
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let config = LibrisConfig::default();
        let keys: Vec<&str> = config.list_all().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, LibrisConfig::KEYS.to_vec());
    }
}
