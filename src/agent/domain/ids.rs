//! Identifier types for the agent domain.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum length for agent identifiers and type names.
const MAX_IDENTIFIER_LENGTH: usize = 100;

/// Trims, lowercases and validates an identifier against `[a-z0-9_-]`.
fn normalize_identifier(raw: String) -> Result<String, AgentDomainError> {
    let normalized = raw.trim().to_ascii_lowercase();

    if normalized.is_empty() {
        return Err(AgentDomainError::EmptyAgentId);
    }

    if normalized.len() > MAX_IDENTIFIER_LENGTH {
        return Err(AgentDomainError::AgentIdTooLong(raw));
    }

    let is_valid = normalized
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');

    if !is_valid {
        return Err(AgentDomainError::InvalidAgentId(raw));
    }

    Ok(normalized)
}

/// Validated identifier of a constructed agent (e.g. `content-generator`).
///
/// Identifiers are unique per process and appear in logs and descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgentId(String);

impl AgentId {
    /// Creates a validated agent identifier.
    ///
    /// The input is trimmed and lowercased. Only characters in `[a-z0-9_-]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyAgentId`] when the value is empty
    /// after trimming, [`AgentDomainError::InvalidAgentId`] when it contains
    /// characters outside `[a-z0-9_-]`, or
    /// [`AgentDomainError::AgentIdTooLong`] when it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        normalize_identifier(value.into()).map(Self)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AgentId {
    type Error = AgentDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AgentId> for String {
    fn from(value: AgentId) -> Self {
        value.0
    }
}

impl AsRef<str> for AgentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated registry key naming a constructible kind of agent.
///
/// The manager resolves agents by type name, so a type name doubles as the
/// identifier callers pass to `get_agent` and `execute_agent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgentType(String);

impl AgentType {
    /// Creates a validated agent type name.
    ///
    /// Follows the same normalization rules as [`AgentId::new`].
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError`] when the name is empty, too long, or
    /// contains characters outside `[a-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        normalize_identifier(value.into()).map(Self)
    }

    /// Returns the type name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AgentType {
    type Error = AgentDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AgentType> for String {
    fn from(value: AgentType) -> Self {
        value.0
    }
}

impl AsRef<str> for AgentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a single guarded invocation.
///
/// Only used to correlate log events; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionId(Uuid);

impl ExecutionId {
    /// Creates a new random execution identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ExecutionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
