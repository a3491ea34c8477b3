//! Agent category enumeration.

use super::ParseAgentCategoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of agent kinds offered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentCategory {
    /// Copy and long-form content generation.
    Content,
    /// Search-engine optimisation audits and keyword work.
    Seo,
    /// Email campaign drafting and sequencing.
    Email,
    /// Social media posting and scheduling.
    Social,
    /// Customer support replies and triage.
    Support,
    /// Paid advertising creatives and budgets.
    Ads,
    /// Campaign reporting and insight extraction.
    Analytics,
    /// Diagnostic and helper agents with no marketing function.
    Utility,
}

impl AgentCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Content,
        Self::Seo,
        Self::Email,
        Self::Social,
        Self::Support,
        Self::Ads,
        Self::Analytics,
        Self::Utility,
    ];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Seo => "seo",
            Self::Email => "email",
            Self::Social => "social",
            Self::Support => "support",
            Self::Ads => "ads",
            Self::Analytics => "analytics",
            Self::Utility => "utility",
        }
    }
}

impl fmt::Display for AgentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AgentCategory {
    type Error = ParseAgentCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseAgentCategoryError(value.to_owned()))
    }
}
