use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR, CONFIG_FILE, CONFIG_PATH_ENV};
use crate::errors::AppError;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct Config {
    /// Pretty-print encoded JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Log filter used when RUST_LOG is not set, e.g. "debug"
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_pretty() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self { pretty: default_pretty(), log_level: None }
    }
}

impl Config {
    /// Path of the config file: `$TESTRAIL_FIELDS_CONFIG`, else `~/.config/testrail-fields/config.json`
    pub fn path() -> Result<PathBuf, AppError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        UserDirs::new()
            .ok_or(AppError::NotFoundUserDir)
            .map(|user_dirs| user_dirs.home_dir().join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Read the config at `path_to_config`; a missing file gives the defaults
    pub fn get_config(path_to_config: &Path) -> Result<Self, AppError> {
        if !path_to_config.exists() {
            return Ok(Self::default());
        }
        let file = File::open(path_to_config).map_err(|_| AppError::NotParseConfig)?;
        serde_json::from_reader(file).map_err(|_| AppError::NotParseConfig)
    }

    pub fn load() -> Result<Self, AppError> {
        Self::get_config(&Self::path()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use test_case::test_case;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::get_config(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.pretty);
    }

    #[test_case(r#"{"pretty": false}"#, false, None; "compact")]
    #[test_case(r#"{"log_level": "debug"}"#, true, Some("debug"); "log level only")]
    #[test_case("{}", true, None; "empty object")]
    fn test_read_config(content: &str, pretty: bool, log_level: Option<&str>) {
        let (_dir, path) = write_config(content);
        let config = Config::get_config(&path).unwrap();
        assert_eq!(config.pretty, pretty);
        assert_eq!(config.log_level.as_deref(), log_level);
    }

    #[test_case("not json"; "garbage")]
    #[test_case(r#"{"pretty": "yes"}"#; "wrong type")]
    fn test_invalid_config(content: &str) {
        let (_dir, path) = write_config(content);
        let error = Config::get_config(&path).unwrap_err();
        assert!(matches!(error, AppError::NotParseConfig), "Ожидали AppError::NotParseConfig, получили {error}");
    }

    #[test]
    fn test_default_path_ends_with_config_file() {
        if env::var(CONFIG_PATH_ENV).is_ok() {
            return;
        }
        match Config::path() {
            Ok(path) => assert!(path.ends_with(Path::new(CONFIG_DIR).join(CONFIG_FILE))),
            Err(error) => assert!(matches!(error, AppError::NotFoundUserDir)),
        }
    }
}
