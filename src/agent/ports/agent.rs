//! The agent contract.

use crate::agent::{
    domain::{AgentCategory, AgentDescriptor, AgentId, AgentPayload, AgentResult, CapabilitySet},
    services::ExecutionGuard,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for per-task dispatch.
pub type TaskResult = Result<Value, AgentTaskError>;

/// Polymorphic contract every agent implements.
///
/// Implementations provide fixed identity metadata through
/// [`descriptor`](Self::descriptor) and a per-task
/// [`dispatch`](Self::dispatch). Callers use [`execute`](Self::execute),
/// which wraps dispatch in an [`ExecutionGuard`] and therefore never fails
/// or panics.
///
/// Agents must be safe to call concurrently. Any agent holding shared
/// mutable state synchronises it internally; the framework provides no
/// locking around calls. Side effects are the handler's concern, and a
/// handler failing partway must leave the system recoverable by a simple
/// retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Agent: Send + Sync {
    /// Returns the agent's identity and declared capabilities.
    fn descriptor(&self) -> &AgentDescriptor;

    /// Runs the handler registered for `payload.task()`.
    ///
    /// Unknown task names must yield [`AgentTaskError::UnknownTask`].
    ///
    /// # Errors
    ///
    /// Returns [`AgentTaskError`] when the task is unknown, the context is
    /// invalid, or the handler fails.
    async fn dispatch(&self, payload: &AgentPayload) -> TaskResult;

    /// Dispatches `payload` inside a system-clock execution guard.
    ///
    /// Do not override. [`AgentManager`](crate::agent::services::AgentManager)
    /// wraps [`dispatch`](Self::dispatch) in its own guard and never calls
    /// this method, so an override would only apply to direct callers.
    async fn execute(&self, payload: &AgentPayload) -> AgentResult {
        ExecutionGuard::system()
            .run(self.descriptor().id(), payload, || self.dispatch(payload))
            .await
    }

    /// Returns the agent identifier.
    fn id(&self) -> &AgentId {
        self.descriptor().id()
    }

    /// Returns the human-readable agent name.
    fn name(&self) -> &str {
        self.descriptor().name()
    }

    /// Returns the agent category.
    fn category(&self) -> AgentCategory {
        self.descriptor().category()
    }

    /// Returns the declared capabilities.
    fn capabilities(&self) -> &CapabilitySet {
        self.descriptor().capabilities()
    }
}

/// Errors returned by per-task handlers.
///
/// The guard turns every variant into a failed [`AgentResult`] whose error
/// is this type's `Display` output.
#[derive(Debug, Clone, Error)]
pub enum AgentTaskError {
    /// No handler is registered for the task name.
    #[error("Unknown task: {0}")]
    UnknownTask(String),

    /// A context field is missing or has the wrong shape.
    #[error("invalid context field '{field}': {reason}")]
    InvalidContext {
        /// Context key.
        field: String,
        /// Reason string.
        reason: String,
    },

    /// The handler failed with a message, reported verbatim.
    #[error("{0}")]
    Failed(String),

    /// The handler failed with a foreign error, reported by its message.
    #[error("{0}")]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl AgentTaskError {
    /// Creates an unknown-task error.
    pub fn unknown_task(task: impl Into<String>) -> Self {
        Self::UnknownTask(task.into())
    }

    /// Creates an invalid-context error.
    pub fn invalid_context(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidContext {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a handler failure with a verbatim message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Wraps a foreign handler error.
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(err))
    }
}
