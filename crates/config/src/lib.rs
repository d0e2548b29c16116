use dotenv::dotenv;
use dotenv::from_path;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load .env file from path {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenv::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// How the user registry numbers new records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserIdStrategy {
    /// Strictly increasing counter; ids are never reused.
    #[default]
    Sequential,
    /// Current record count + 1; an id can be handed out again after a delete.
    CountBased,
}

impl FromStr for UserIdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "count-based" | "count_based" => Ok(Self::CountBased),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for UserIdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::CountBased => f.write_str("count-based"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub user_id_strategy: UserIdStrategy,
    pub display_school_holidays: Option<String>,
    pub display_sub_hierarchical_service: Option<String>,
    pub display_sub_hierarchical_service_default: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            user_id_strategy: UserIdStrategy::default(),
            display_school_holidays: None,
            display_sub_hierarchical_service: None,
            display_sub_hierarchical_service_default: None,
        }
    }
}

impl Config {
    /// Load configuration from a specified `.env` file path or default to the root `.env` file.
    ///
    /// A missing default `.env` is not an error; a missing explicit path is.
    pub fn from_env(env_path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = env_path {
            from_path(path).map_err(|source| ConfigError::EnvFile {
                path: path.to_string(),
                source,
            })?;
        } else {
            dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let user_id_strategy = match lookup("USER_ID_STRATEGY") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "USER_ID_STRATEGY",
                value,
            })?,
            None => defaults.user_id_strategy,
        };

        Ok(Self {
            log_level: lookup("LOG_LEVEL")
                .filter(|level| !level.trim().is_empty())
                .unwrap_or(defaults.log_level),
            user_id_strategy,
            display_school_holidays: lookup("TEAMPLANNING_DISPLAY_SCHOOL_HOLIDAYS"),
            display_sub_hierarchical_service: lookup("TEAMPLANNING_DISPLAY_SUB_HIERARCHICAL_SERVICE"),
            display_sub_hierarchical_service_default: lookup(
                "TEAMPLANNING_DISPLAY_SUB_HIERARCHICAL_SERVICE_DEFAULT",
            ),
        })
    }
}
