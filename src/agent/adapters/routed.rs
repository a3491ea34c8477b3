//! Agent assembled from a descriptor and a task router.

use crate::agent::{
    domain::{AgentCategory, AgentDescriptor, AgentDomainError, AgentId, AgentPayload},
    ports::{Agent, TaskResult},
    services::TaskRouter,
};
use async_trait::async_trait;

/// Agent whose capabilities and dispatch both come from a [`TaskRouter`].
///
/// Capabilities are derived from the router's routes, so the advertised
/// task list always matches the handlers that exist.
#[derive(Debug, Clone)]
pub struct RoutedAgent {
    descriptor: AgentDescriptor,
    router: TaskRouter,
}

impl RoutedAgent {
    /// Creates a routed agent.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError`] when the display name is blank or a
    /// routed task name is empty.
    pub fn new(
        id: AgentId,
        name: impl Into<String>,
        category: AgentCategory,
        router: TaskRouter,
    ) -> Result<Self, AgentDomainError> {
        let descriptor = AgentDescriptor::new(id, name, category, router.capabilities()?)?;
        Ok(Self { descriptor, router })
    }
}

#[async_trait]
impl Agent for RoutedAgent {
    fn descriptor(&self) -> &AgentDescriptor {
        &self.descriptor
    }

    async fn dispatch(&self, payload: &AgentPayload) -> TaskResult {
        self.router.dispatch(payload).await
    }
}
