//! Execution payload and priority.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Relative urgency of a request. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Background work.
    Low,
    /// Normal interactive work.
    #[default]
    Medium,
    /// Work a user is actively waiting on.
    High,
}

impl Priority {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Request envelope handed to an agent.
///
/// The task name should be one of the target agent's declared
/// capabilities, but this is the agent's concern: the framework forwards
/// any task name unchanged. `metadata` carries trace data the framework
/// never interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPayload {
    task: String,
    context: Map<String, Value>,
    #[serde(default)]
    priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Map<String, Value>>,
}

impl AgentPayload {
    /// Creates a payload for `task` with an empty context and default
    /// priority.
    #[must_use]
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            context: Map::new(),
            priority: Priority::default(),
            metadata: None,
        }
    }

    /// Replaces the whole context map.
    #[must_use]
    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = context;
        self
    }

    /// Inserts a single context entry.
    #[must_use]
    pub fn with_context_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets the request priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Attaches trace metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Returns the task name.
    #[must_use]
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Returns the context map.
    #[must_use]
    pub const fn context(&self) -> &Map<String, Value> {
        &self.context
    }

    /// Returns a single context value, if present.
    #[must_use]
    pub fn context_value(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    /// Returns the request priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the trace metadata, if any.
    #[must_use]
    pub const fn metadata(&self) -> Option<&Map<String, Value>> {
        self.metadata.as_ref()
    }
}
