//! Task-name dispatch helper for agent implementations.

use crate::agent::{
    domain::{AgentDomainError, AgentPayload, CapabilitySet},
    ports::{AgentTaskError, TaskResult},
};
use futures::future::{self, BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

type TaskHandler = Arc<dyn Fn(AgentPayload) -> BoxFuture<'static, TaskResult> + Send + Sync>;

/// Ordered mapping from task name to handler.
///
/// Task names arrive as untyped strings, so an unmatched name is a runtime
/// [`AgentTaskError::UnknownTask`] rather than a compile-time error.
/// Handlers receive an owned copy of the payload and capture whatever
/// shared state they need.
#[derive(Clone, Default)]
pub struct TaskRouter {
    routes: Vec<(String, TaskHandler)>,
}

impl TaskRouter {
    /// Creates an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an asynchronous handler for `task`.
    ///
    /// Registering the same task twice replaces the earlier handler and
    /// keeps its original position.
    #[must_use]
    pub fn route<F, Fut>(self, task: impl Into<String>, handler: F) -> Self
    where
        F: Fn(AgentPayload) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = TaskResult> + Send + 'static,
    {
        let boxed: TaskHandler = Arc::new(move |payload: AgentPayload| handler(payload).boxed());
        self.insert(task.into(), boxed)
    }

    /// Adds a synchronous handler for `task`.
    #[must_use]
    pub fn route_sync<F>(self, task: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&AgentPayload) -> TaskResult + Send + Sync + 'static,
    {
        let boxed: TaskHandler = Arc::new(move |payload: AgentPayload| {
            future::ready(handler(&payload)).boxed()
        });
        self.insert(task.into(), boxed)
    }

    fn insert(mut self, task: String, handler: TaskHandler) -> Self {
        if let Some(slot) = self.routes.iter_mut().find(|(name, _)| *name == task) {
            slot.1 = handler;
        } else {
            self.routes.push((task, handler));
        }
        self
    }

    /// Returns whether a handler exists for `task`.
    #[must_use]
    pub fn handles(&self, task: &str) -> bool {
        self.routes.iter().any(|(name, _)| name == task)
    }

    /// Iterates over routed task names in registration order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(name, _)| name.as_str())
    }

    /// Derives the capability set advertised by this router.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyCapability`] when a route was added
    /// with a blank task name.
    pub fn capabilities(&self) -> Result<CapabilitySet, AgentDomainError> {
        CapabilitySet::new(self.tasks())
    }

    /// Runs the handler registered for `payload.task()`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentTaskError::UnknownTask`] when no handler matches, or
    /// the handler's own error.
    pub async fn dispatch(&self, payload: &AgentPayload) -> TaskResult {
        let handler = self
            .routes
            .iter()
            .find(|(name, _)| name == payload.task())
            .map(|(_, handler)| Arc::clone(handler))
            .ok_or_else(|| AgentTaskError::unknown_task(payload.task()))?;
        handler(payload.clone()).await
    }
}

impl fmt::Debug for TaskRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskRouter")
            .field("tasks", &self.tasks().collect::<Vec<_>>())
            .finish()
    }
}
