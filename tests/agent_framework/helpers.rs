//! Shared helpers for agent framework integration tests.

use mercator::agent::{
    adapters::{RoutedAgent, register_builtin_agents},
    domain::{AgentCategory, AgentDomainError, AgentId, AgentType},
    ports::{Agent, AgentConstructionError, AgentTaskError},
    services::{AgentManager, AgentRegistry, TaskRouter},
};
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::json;
use std::sync::Arc;

/// Manager type used across integration tests.
pub type TestManager = AgentManager<DefaultClock>;

/// Registry type name of the headline-writing content agent.
pub const CONTENT_AGENT_TYPE: &str = "content";

/// Builds a content agent drafting headlines from `context.topic`.
///
/// # Errors
///
/// Returns an error if the agent descriptor cannot be built.
pub fn content_agent() -> Result<RoutedAgent, AgentDomainError> {
    let router = TaskRouter::new()
        .route_sync("draft_headline", |payload| {
            let topic = payload
                .context_value("topic")
                .and_then(|value| value.as_str())
                .ok_or_else(|| AgentTaskError::invalid_context("topic", "expected a string"))?;
            Ok(json!({ "headline": format!("Everything you need to know about {topic}") }))
        })
        .route_sync("review", |payload| {
            let approved = payload
                .context_value("draft")
                .and_then(|value| value.as_str())
                .is_some_and(|draft| !draft.trim().is_empty());
            Ok(json!({ "approved": approved }))
        });
    RoutedAgent::new(
        AgentId::new(CONTENT_AGENT_TYPE)?,
        "Content Agent",
        AgentCategory::Content,
        router,
    )
}

/// Provides a registry holding the builtin agents and the content agent.
#[fixture]
pub fn registry() -> Arc<AgentRegistry> {
    let registry = AgentRegistry::new();
    register_builtin_agents(&registry).expect("builtin registration should succeed");
    registry
        .register(
            AgentType::new(CONTENT_AGENT_TYPE).expect("valid type name"),
            |_| {
                content_agent()
                    .map(|agent| Arc::new(agent) as Arc<dyn Agent>)
                    .map_err(AgentConstructionError::from)
            },
        )
        .expect("content registration should succeed");
    Arc::new(registry)
}

/// Provides a manager over [`registry`].
#[fixture]
pub fn manager(registry: Arc<AgentRegistry>) -> TestManager {
    AgentManager::new(registry, Arc::new(DefaultClock))
}
