use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::model::config::Config;

/// Directory name under the platform config dir
const APP_DIR: &str = "todolist";
const CONFIG_FILE: &str = "config.toml";

/// Error type for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// `<config_dir>/todolist/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load the config. An explicit path must exist; the default path is
/// optional and falls back to built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path)?.ok_or_else(|| ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let Some(path) = default_config_path() else {
        debug!("no config directory on this platform; using defaults");
        return Ok(Config::default());
    };
    match read_config(&path)? {
        Some(config) => Ok(config),
        None => {
            debug!(path = %path.display(), "no config file; using defaults");
            Ok(Config::default())
        }
    }
}

/// Read and parse a config file. `Ok(None)` when the file does not exist.
fn read_config(path: &Path) -> Result<Option<Config>, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "loaded config");
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_file_is_loaded() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todo.toml");
        fs::write(
            &path,
            "[ui]\nshow_key_hints = false\n\n[ui.colors]\ndone = \"#00FF00\"\n\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("done").map(String::as_str), Some("#00FF00"));
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, None);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todo.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[ui\nshow_key_hints = ").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().starts_with("could not parse"));
    }

    #[test]
    fn test_wrong_type_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todo.toml");
        fs::write(&path, "[ui]\nshow_key_hints = \"yes\"\n").unwrap();
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_directory_is_a_read_error() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            load_config(Some(tmp.path())),
            Err(ConfigError::ReadError { .. })
        ));
    }

    #[test]
    fn test_default_path_layout() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("todolist/config.toml"));
        }
    }
}
