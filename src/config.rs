//! Framework configuration.
//!
//! Configuration is a JSON document:
//!
//! ```json
//! {
//!   "logging": { "level": "info", "json": false },
//!   "agents": {
//!     "echo": { "display_name": "Echo Agent" }
//!   }
//! }
//! ```
//!
//! `agents` maps agent type names to the arguments handed to that type's
//! constructor. Every section is optional.

use crate::agent::{
    domain::{AgentDomainError, AgentType},
    ports::ConstructorArgs,
};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::Level;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors returned while loading or interpreting configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The configuration document is not valid JSON for this schema.
    #[error("invalid configuration document: {0}")]
    Parse(Arc<serde_json::Error>),

    /// An `agents` key is not a valid agent type name.
    #[error("invalid agent type '{key}' in configuration: {source}")]
    InvalidAgentType {
        /// Offending key.
        key: String,
        /// Validation error.
        #[source]
        source: AgentDomainError,
    },

    /// The logging level is not a recognised tracing level.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default verbosity when `RUST_LOG` is unset.
    pub level: String,
    /// Emit newline-delimited JSON instead of human-readable lines.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_owned(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Parses the configured level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] when the level is not one of
    /// `trace`, `debug`, `info`, `warn` or `error`.
    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(self.level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

/// Top-level framework configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameworkConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Constructor arguments keyed by agent type name.
    pub agents: BTreeMap<String, ConstructorArgs>,
}

impl FrameworkConfig {
    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed or
    /// contains unknown fields.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse(Arc::new(err)))
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let io_error = |source: std::io::Error| ConfigError::Io {
            path: path.to_string(),
            source: Arc::new(source),
        };

        let file_name = path
            .file_name()
            .ok_or_else(|| io_error(std::io::Error::other("path must include a file name")))?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        let contents = dir.read_to_string(file_name).map_err(io_error)?;
        Self::from_json_str(&contents)
    }

    /// Returns validated constructor arguments keyed by agent type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAgentType`] when a key is not a valid
    /// agent type name.
    pub fn constructor_args(&self) -> Result<HashMap<AgentType, ConstructorArgs>, ConfigError> {
        self.agents
            .iter()
            .map(|(key, args)| {
                AgentType::new(key.as_str())
                    .map(|agent_type| (agent_type, args.clone()))
                    .map_err(|source| ConfigError::InvalidAgentType {
                        key: key.clone(),
                        source,
                    })
            })
            .collect()
    }
}
