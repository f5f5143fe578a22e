//! Runtime configuration read from the process environment.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `VOLLEY_DB_PATH` | SQLite file for the roster store | in-memory store |
//! | `VOLLEY_LOG_LEVEL` | `trace\|debug\|info\|warn\|error` | `default_log_level()` |
//! | `VOLLEY_LOG_DIR` | absolute directory for rolling logs | logging disabled |

use crate::logging::{default_log_level, init_logging, normalize_level, LoggingError};
use crate::repo::{RepoResult, RosterContext};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ffi::OsString;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "VOLLEY_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "VOLLEY_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "VOLLEY_LOG_DIR";

#[derive(Debug)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    InvalidValue { key: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, reason } => write!(f, "invalid `{key}`: {reason}"),
        }
    }
}

impl Error for ConfigError {}

/// Core settings shared by every front end.
///
/// Every construction path (`from_env`, `from_lookup`, serde) normalizes
/// `log_level` and rejects a relative `log_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCoreConfig")]
pub struct CoreConfig {
    /// `None` selects a private in-memory store.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// `None` leaves file logging off.
    pub log_dir: Option<PathBuf>,
}

/// Unchecked settings as read from a source.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCoreConfig {
    db_path: Option<PathBuf>,
    log_level: Option<String>,
    log_dir: Option<PathBuf>,
}

impl TryFrom<RawCoreConfig> for CoreConfig {
    type Error = ConfigError;

    fn try_from(raw: RawCoreConfig) -> Result<Self, Self::Error> {
        let log_level = match raw.log_level {
            Some(level) => normalize_level(&level)
                .map_err(|err| ConfigError::InvalidValue {
                    key: LOG_LEVEL_ENV,
                    reason: err.to_string(),
                })?
                .to_string(),
            None => default_log_level().to_string(),
        };

        if let Some(dir) = raw.log_dir.as_deref().filter(|dir| !dir.is_absolute()) {
            return Err(ConfigError::InvalidValue {
                key: LOG_DIR_ENV,
                reason: format!("expected an absolute path, got `{}`", dir.display()),
            });
        }

        Ok(Self {
            db_path: raw.db_path,
            log_level,
            log_dir: raw.log_dir,
        })
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from `VOLLEY_*` environment variables.
    ///
    /// Paths are taken as raw OS strings, so non-UTF-8 paths are kept.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Builds configuration from an arbitrary key lookup. Blank values count
    /// as unset.
    ///
    /// # Errors
    /// - `InvalidValue` for an unknown or non-UTF-8 log level, or a relative
    ///   log directory.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).and_then(non_blank);

        let log_level = match read(LOG_LEVEL_ENV) {
            Some(value) => Some(value.into_string().map_err(|_| ConfigError::InvalidValue {
                key: LOG_LEVEL_ENV,
                reason: "value is not valid UTF-8".to_string(),
            })?),
            None => None,
        };

        Self::try_from(RawCoreConfig {
            db_path: read(DB_PATH_ENV).map(PathBuf::from),
            log_level,
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from),
        })
    }

    /// Starts file logging when `log_dir` is configured. Returns whether
    /// logging is active afterwards.
    pub fn init_logging(&self) -> Result<bool, LoggingError> {
        match &self.log_dir {
            Some(dir) => {
                init_logging(&self.log_level, &dir.to_string_lossy())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Opens the configured roster store.
    pub fn open_context(&self) -> RepoResult<RosterContext> {
        match &self.db_path {
            Some(path) => RosterContext::open(path),
            None => RosterContext::open_in_memory(),
        }
    }
}

/// Trims UTF-8 values; non-UTF-8 values pass through untouched.
fn non_blank(value: OsString) -> Option<OsString> {
    match value.to_str() {
        Some(text) if text.trim().is_empty() => None,
        Some(text) => Some(OsString::from(text.trim())),
        None => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ConfigError, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().map(OsString::from)
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = CoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CoreConfig::default());
        assert!(config.db_path.is_none());
    }

    #[test]
    fn reads_and_normalizes_values() {
        let log_dir = std::env::temp_dir().join("volley-logs");
        let log_dir_str = log_dir.to_str().unwrap().to_string();
        let config = CoreConfig::from_lookup(lookup_from(&[
            (DB_PATH_ENV, "roster.db"),
            (LOG_LEVEL_ENV, " WARNING "),
            (LOG_DIR_ENV, log_dir_str.as_str()),
        ]))
        .unwrap();

        assert_eq!(config.db_path, Some(PathBuf::from("roster.db")));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(log_dir));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = CoreConfig::from_lookup(lookup_from(&[(DB_PATH_ENV, "   ")])).unwrap();
        assert!(config.db_path.is_none());
    }

    #[test]
    fn rejects_unknown_level_and_relative_log_dir() {
        let err = CoreConfig::from_lookup(lookup_from(&[(LOG_LEVEL_ENV, "loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == LOG_LEVEL_ENV));

        let err = CoreConfig::from_lookup(lookup_from(&[(LOG_DIR_ENV, "logs/dev")])).unwrap_err();
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn deserializes_with_missing_fields_defaulted() {
        let config: CoreConfig = serde_json::from_str(r#"{"db_path":"/tmp/roster.db"}"#).unwrap();
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/roster.db")));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn deserialize_normalizes_level_and_rejects_relative_log_dir() {
        let config: CoreConfig = serde_json::from_str(r#"{"log_level":"WARNING"}"#).unwrap();
        assert_eq!(config.log_level, "warn");

        let err = serde_json::from_str::<CoreConfig>(r#"{"log_dir":"logs/dev"}"#).unwrap_err();
        assert!(err.to_string().contains("absolute"));

        let err = serde_json::from_str::<CoreConfig>(r#"{"log_level":"loud"}"#).unwrap_err();
        assert!(err.to_string().contains(LOG_LEVEL_ENV));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_db_path_is_kept_and_non_utf8_level_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw_path = OsStr::from_bytes(b"/tmp/roster-\xff.db").to_os_string();
        let expected = PathBuf::from(&raw_path);
        let config =
            CoreConfig::from_lookup(move |key: &str| (key == DB_PATH_ENV).then(|| raw_path.clone()))
                .unwrap();
        assert_eq!(config.db_path, Some(expected));

        let err = CoreConfig::from_lookup(|key: &str| {
            (key == LOG_LEVEL_ENV).then(|| OsStr::from_bytes(b"inf\xff").to_os_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == LOG_LEVEL_ENV));
    }

    #[cfg(unix)]
    #[test]
    fn from_env_keeps_non_utf8_db_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw_path = OsStr::from_bytes(b"/tmp/volley-env-\xfe.db");
        std::env::set_var(DB_PATH_ENV, raw_path);
        let config = CoreConfig::from_env();
        std::env::remove_var(DB_PATH_ENV);

        assert_eq!(config.unwrap().db_path, Some(PathBuf::from(raw_path)));
    }

    #[test]
    fn open_context_without_path_is_in_memory() {
        let ctx = CoreConfig::default().open_context().unwrap();
        assert_eq!(ctx.pending_changes(), 0);
        assert_eq!(ctx.count::<crate::Player>().unwrap(), 0);
    }

    #[test]
    fn init_logging_is_skipped_without_log_dir() {
        assert!(!CoreConfig::default().init_logging().unwrap());
    }
}
