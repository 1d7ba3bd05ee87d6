//! Settings read from the environment (after `.env` has been loaded).

use std::env;
use std::path::PathBuf;

/// Environment variable holding the log4rs config file path.
pub const ENV_LOG_CONFIG: &str = "NETSPEC_LOG_CONFIG";
/// Environment variable holding the network used when none is given on the command line.
pub const ENV_DEFAULT_NETWORK: &str = "NETSPEC_DEFAULT_NETWORK";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_config: PathBuf,
    pub default_network: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            default_network: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup, empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Settings::default();
        Settings {
            log_config: get(ENV_LOG_CONFIG)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_config),
            default_network: get(ENV_DEFAULT_NETWORK),
        }
    }
}
