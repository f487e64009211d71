use std::env;
use std::path::PathBuf;

use tracing::Level;

use crate::error::ConfigError;

const RESPONSE_DIR_VAR: &str = "CR_RESPONSE_DIR";
const LOG_LEVEL_VAR: &str = "CR_LOG_LEVEL";

/// Holds the inspector's configuration values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding saved API responses.
    pub response_dir: PathBuf,
    pub log_level: Level,
}

impl Config {
    /// Creates a new Config from environment variables.
    ///
    /// Variables are loaded from a .env file first if one exists in the
    /// working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine.
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let response_dir = lookup(RESPONSE_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(RESPONSE_DIR_VAR))?;

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) => value.trim().parse::<Level>().map_err(|_| ConfigError::Invalid {
                name: LOG_LEVEL_VAR,
                value,
            })?,
            None => Level::INFO,
        };

        Ok(Config {
            response_dir,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_log_level_to_info() {
        let config = Config::from_lookup(lookup(&[("CR_RESPONSE_DIR", "dumps")])).unwrap();
        assert_eq!(config.response_dir, PathBuf::from("dumps"));
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn parses_log_level() {
        let config = Config::from_lookup(lookup(&[
            ("CR_RESPONSE_DIR", "dumps"),
            ("CR_LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let err = Config::from_lookup(lookup(&[("CR_RESPONSE_DIR", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CR_RESPONSE_DIR")));
    }

    #[test]
    fn bad_log_level_is_an_error() {
        let err = Config::from_lookup(lookup(&[
            ("CR_RESPONSE_DIR", "dumps"),
            ("CR_LOG_LEVEL", "loud"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "CR_LOG_LEVEL", .. }));
    }
}
