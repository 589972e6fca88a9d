//! `libris config`: inspect or change `config.json` in the data directory.
//!
//! Bad keys and bad values are errors, so nothing invalid is ever written.

use crate::commands::{CmdMessage, CmdResult, LibrisPaths};
use crate::config::LibrisConfig;
use crate::error::{LibrisError, Result};
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &LibrisPaths, action: ConfigAction) -> Result<CmdResult> {
    let config = LibrisConfig::load(&paths.data_dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => show_key(&config, &key),
        ConfigAction::Set(key, value) => set(paths, config, &key, &value),
    }
}

fn show_key(config: &LibrisConfig, key: &str) -> Result<CmdResult> {
    let value = config.get(key).ok_or_else(|| unknown_key(key))?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(value));
    Ok(result)
}

fn set(
    paths: &LibrisPaths,
    mut config: LibrisConfig,
    key: &str,
    value: &str,
) -> Result<CmdResult> {
    config.set(key, value)?;
    config.save(&paths.data_dir)?;

    let stored = config.get(key).ok_or_else(|| unknown_key(key))?;
    info!(key, value = %stored, "config updated");

    let mut result = CmdResult::default().with_config(config);
    result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
    Ok(result)
}

fn unknown_key(key: &str) -> LibrisError {
    LibrisError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        LibrisConfig::KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(temp: &TempDir) -> LibrisPaths {
        LibrisPaths {
            data_dir: temp.path().to_path_buf(),
        }
    }

    #[test]
    fn set_persists_and_echoes_value() {
        let temp = TempDir::new().unwrap();
        let result = run(
            &paths(&temp),
            ConfigAction::Set("library-name".into(), "Harbor Branch".into()),
        )
        .unwrap();

        assert_eq!(result.messages[0].content, "library-name set to Harbor Branch");
        assert_eq!(
            LibrisConfig::load(temp.path()).unwrap().library_name,
            "Harbor Branch"
        );
    }

    #[test]
    fn set_echoes_normalized_boolean() {
        let temp = TempDir::new().unwrap();
        let result = run(
            &paths(&temp),
            ConfigAction::Set("autosave".into(), "off".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "autosave set to false");
    }

    #[test]
    fn show_key_reads_current_value() {
        let temp = TempDir::new().unwrap();
        let result = run(&paths(&temp), ConfigAction::ShowKey("books-file".into())).unwrap();
        assert_eq!(result.messages[0].content, "books.json");
    }

    #[test]
    fn show_unknown_key_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = run(&paths(&temp), ConfigAction::ShowKey("colour".into())).unwrap_err();
        assert!(matches!(err, LibrisError::Config(_)));
        assert!(err.to_string().contains("books-file"));
    }

    #[test]
    fn invalid_set_is_an_error_and_not_saved() {
        let temp = TempDir::new().unwrap();
        let err = run(&paths(&temp), ConfigAction::Set("nope".into(), "x".into())).unwrap_err();
        assert!(matches!(err, LibrisError::Config(_)));

        let err = run(
            &paths(&temp),
            ConfigAction::Set("books-file".into(), "../books.json".into()),
        )
        .unwrap_err();
        assert!(matches!(err, LibrisError::Config(_)));
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_config() {
        let temp = TempDir::new().unwrap();
        let result = run(&paths(&temp), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(LibrisConfig::default()));
    }
}
