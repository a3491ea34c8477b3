//! Agent implementations shipped with the framework.
//!
//! Business agents (content, SEO, email and so on) live outside this crate
//! and register themselves through the same [`AgentRegistry`] calls used by
//! [`register_builtin_agents`].

mod echo;
mod routed;

pub use echo::{ECHO_AGENT_TYPE, EchoAgent};
pub use routed::RoutedAgent;

use crate::agent::{
    domain::AgentType,
    ports::Agent,
    services::{AgentRegistry, AgentRegistryResult},
};
use std::sync::Arc;
use tracing::info;

/// Registers every built-in agent type with `registry`.
///
/// Call once during startup, before serving requests. Calling it again
/// replaces the constructors with identical ones.
///
/// # Errors
///
/// Returns registry errors when lock acquisition fails or a built-in type
/// name is invalid.
pub fn register_builtin_agents(registry: &AgentRegistry) -> AgentRegistryResult<()> {
    registry.register(AgentType::new(ECHO_AGENT_TYPE)?, |args| {
        EchoAgent::from_args(args).map(|agent| Arc::new(agent) as Arc<dyn Agent>)
    })?;

    info!(event = "agent_registry.builtins_registered", count = 1_u32);
    Ok(())
}
