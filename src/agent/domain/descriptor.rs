//! Static agent identity metadata.

use super::{AgentCategory, AgentDomainError, AgentId, CapabilitySet};
use serde::{Deserialize, Serialize};

/// Identity and capability declaration of an agent.
///
/// Every field is fixed at construction; descriptors expose read-only
/// accessors only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDescriptor {
    id: AgentId,
    name: String,
    category: AgentCategory,
    capabilities: CapabilitySet,
}

impl AgentDescriptor {
    /// Creates a validated descriptor.
    ///
    /// The display name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyDisplayName`] when the display name
    /// is blank.
    pub fn new(
        id: AgentId,
        raw_name: impl Into<String>,
        category: AgentCategory,
        capabilities: CapabilitySet,
    ) -> Result<Self, AgentDomainError> {
        let name = raw_name.into().trim().to_owned();
        if name.is_empty() {
            return Err(AgentDomainError::EmptyDisplayName);
        }

        Ok(Self {
            id,
            name,
            category,
            capabilities,
        })
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn id(&self) -> &AgentId {
        &self.id
    }

    /// Returns the human-readable agent name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the agent category.
    #[must_use]
    pub const fn category(&self) -> AgentCategory {
        self.category
    }

    /// Returns the declared capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// Returns whether the agent declares `task` among its capabilities.
    #[must_use]
    pub fn supports(&self, task: &str) -> bool {
        self.capabilities.contains(task)
    }
}
