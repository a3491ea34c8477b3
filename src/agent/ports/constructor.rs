//! Constructor contract used by the agent registry.

use crate::agent::domain::AgentDomainError;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

/// Arguments handed to an agent constructor, taken from configuration.
pub type ConstructorArgs = Map<String, Value>;

/// Errors returned by agent constructors.
#[derive(Debug, Clone, Error)]
pub enum AgentConstructionError {
    /// A constructor argument is missing or has the wrong shape.
    #[error("invalid constructor argument '{field}': {reason}")]
    InvalidArgument {
        /// Argument name.
        field: String,
        /// Reason string.
        reason: String,
    },

    /// The agent's descriptor failed validation.
    #[error("invalid agent descriptor: {0}")]
    Descriptor(#[from] AgentDomainError),

    /// Construction-time side effect failed (connection, template load).
    #[error("agent construction failed: {0}")]
    Other(Arc<dyn std::error::Error + Send + Sync>),

    /// The constructor panicked; carries the panic message.
    #[error("agent constructor panicked: {0}")]
    Panicked(String),
}

impl AgentConstructionError {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a construction-time error.
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(err))
    }
}
