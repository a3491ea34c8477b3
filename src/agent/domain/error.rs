//! Error types for agent domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing agent domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgentDomainError {
    /// The agent identifier is empty after trimming.
    #[error("agent identifier must not be empty")]
    EmptyAgentId,

    /// The agent identifier contains characters outside `[a-z0-9_-]`.
    #[error(
        "agent identifier '{0}' contains invalid characters (only lowercase alphanumeric, hyphens and underscores allowed)"
    )]
    InvalidAgentId(String),

    /// The agent identifier exceeds the 100-character limit.
    #[error("agent identifier exceeds 100 character limit: {0}")]
    AgentIdTooLong(String),

    /// The agent display name is empty after trimming.
    #[error("agent display name must not be empty")]
    EmptyDisplayName,

    /// A capability tag is empty after trimming.
    #[error("capability tag must not be empty")]
    EmptyCapability,
}

/// Error returned while parsing an agent category.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown agent category: {0}")]
pub struct ParseAgentCategoryError(pub String);

/// Error returned while parsing a payload priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
