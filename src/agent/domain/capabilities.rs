//! Ordered capability declarations.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free set of task names an agent claims to support.
///
/// Capabilities are advertised, not enforced: the framework never rejects a
/// payload whose task is missing from the set. The set is immutable once
/// built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CapabilitySet(Vec<String>);

impl CapabilitySet {
    /// Creates a capability set from task names.
    ///
    /// Tags are trimmed. Duplicates are dropped, keeping the first
    /// occurrence so declaration order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyCapability`] when any tag is blank.
    pub fn new<I, S>(tags: I) -> Result<Self, AgentDomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for tag in tags {
            let trimmed = tag.into().trim().to_owned();
            if trimmed.is_empty() {
                return Err(AgentDomainError::EmptyCapability);
            }
            if !ordered.contains(&trimmed) {
                ordered.push(trimmed);
            }
        }
        Ok(Self(ordered))
    }

    /// Returns whether the set declares `task`.
    #[must_use]
    pub fn contains(&self, task: &str) -> bool {
        self.0.iter().any(|tag| tag == task)
    }

    /// Iterates over task names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the task names as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of declared capabilities.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no capabilities are declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for CapabilitySet {
    type Error = AgentDomainError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CapabilitySet> for Vec<String> {
    fn from(value: CapabilitySet) -> Self {
        value.0
    }
}
