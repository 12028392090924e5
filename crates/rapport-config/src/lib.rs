use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rapport_core::domain::DEFAULT_AVATAR_URL;
use rapport_core::rules::{validate_window_days, DEFAULT_WINDOW_DAYS};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "rapport";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_RECENT_LIMIT: usize = 5;
pub const MAX_RECENT_LIMIT: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed_sample_data: bool,
    pub avatar_fallback_url: String,
    pub timeline_days: u32,
    pub recent_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            avatar_fallback_url: DEFAULT_AVATAR_URL.to_string(),
            timeline_days: DEFAULT_WINDOW_DAYS,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid timeline_days value: {0}")]
    InvalidTimelineDays(i64),
    #[error("invalid recent_limit value: {0}")]
    InvalidRecentLimit(i64),
    #[error("avatar_fallback_url cannot be empty")]
    EmptyAvatarFallback,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    seed_sample_data: Option<bool>,
    avatar_fallback_url: Option<String>,
    timeline_days: Option<i64>,
    recent_limit: Option<i64>,
}

/// Loads the config file. An explicit path must exist; the default
/// location silently falls back to built-in defaults.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(seed) = parsed.seed_sample_data {
        config.seed_sample_data = seed;
    }

    if let Some(url) = parsed.avatar_fallback_url {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyAvatarFallback);
        }
        config.avatar_fallback_url = trimmed.to_string();
    }

    if let Some(days) = parsed.timeline_days {
        config.timeline_days =
            validate_window_days(days).map_err(|_| ConfigError::InvalidTimelineDays(days))?;
    }

    if let Some(limit) = parsed.recent_limit {
        if limit <= 0 || limit > MAX_RECENT_LIMIT {
            return Err(ConfigError::InvalidRecentLimit(limit));
        }
        config.recent_limit = limit as usize;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load, load_at_path, merge_config, AppConfig, ConfigError, ConfigFile};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            seed_sample_data: Some(false),
            avatar_fallback_url: Some(" https://example.com/a.png ".to_string()),
            timeline_days: Some(14),
            recent_limit: Some(3),
        };
        let merged = merge_config(parsed).expect("merge");
        assert!(!merged.seed_sample_data);
        assert_eq!(merged.avatar_fallback_url, "https://example.com/a.png");
        assert_eq!(merged.timeline_days, 14);
        assert_eq!(merged.recent_limit, 3);
    }

    #[test]
    fn merge_config_defaults_when_empty() {
        let merged = merge_config(ConfigFile::default()).expect("merge");
        assert_eq!(merged, AppConfig::default());
        assert_eq!(merged.timeline_days, 30);
    }

    #[test]
    fn merge_config_rejects_out_of_range_values() {
        let err = merge_config(ConfigFile {
            timeline_days: Some(0),
            ..ConfigFile::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimelineDays(0)));

        let err = merge_config(ConfigFile {
            recent_limit: Some(1000),
            ..ConfigFile::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRecentLimit(1000)));

        let err = merge_config(ConfigFile {
            avatar_fallback_url: Some("   ".to_string()),
            ..ConfigFile::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyAvatarFallback));
    }

    #[test]
    fn load_requires_explicit_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "seed_sample_data = false\ntimeline_days = 7\n").expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert!(!config.seed_sample_data);
        assert_eq!(config.timeline_days, 7);
        assert_eq!(config.recent_limit, 5);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "due_soon_days = 3\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn optional_missing_file_yields_none() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("absent.toml");
        assert!(load_at_path(&path, false).expect("load").is_none());
    }
}
