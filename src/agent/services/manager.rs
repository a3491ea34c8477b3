//! Service layer resolving agents and forwarding execution requests.
//!
//! Provides [`AgentManager`], the façade applications use instead of the
//! registry directly. The manager owns the agents it constructs and keeps
//! them for the life of the process unless explicitly evicted.

use super::{AgentRegistry, AgentRegistryError, ExecutionGuard};
use crate::agent::{
    domain::{AgentDescriptor, AgentPayload, AgentResult, AgentType},
    ports::{Agent, ConstructorArgs},
};
use crate::config::{ConfigError, FrameworkConfig};
use mockable::Clock;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

type InstanceSlot = Arc<OnceCell<Arc<dyn Agent>>>;

/// Agent resolution and execution façade.
///
/// Instances are constructed lazily on first use and cached per type. The
/// cache lock is held only to find or create a per-type slot; construction
/// itself runs inside that slot's once-cell, so concurrent first calls for
/// one type construct exactly once while other types proceed unblocked.
pub struct AgentManager<C>
where
    C: Clock + Send + Sync,
{
    registry: Arc<AgentRegistry>,
    guard: ExecutionGuard<C>,
    constructor_args: HashMap<AgentType, ConstructorArgs>,
    instances: Mutex<HashMap<AgentType, InstanceSlot>>,
}

impl<C> AgentManager<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a manager over `registry`, timing executions with `clock`.
    #[must_use]
    pub fn new(registry: Arc<AgentRegistry>, clock: Arc<C>) -> Self {
        Self {
            registry,
            guard: ExecutionGuard::new(clock),
            constructor_args: HashMap::new(),
            instances: Mutex::new(HashMap::new()),
        }
    }

    /// Sets the arguments passed to the constructor of `agent_type`.
    #[must_use]
    pub fn with_constructor_args(mut self, agent_type: AgentType, args: ConstructorArgs) -> Self {
        self.constructor_args.insert(agent_type, args);
        self
    }

    /// Applies per-type constructor arguments from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAgentType`] when a configured key is
    /// not a valid agent type name.
    pub fn with_config(mut self, config: &FrameworkConfig) -> Result<Self, ConfigError> {
        self.constructor_args.extend(config.constructor_args()?);
        Ok(self)
    }

    /// Returns the registry backing this manager.
    #[must_use]
    pub const fn registry(&self) -> &Arc<AgentRegistry> {
        &self.registry
    }

    /// Returns the cached agent for `identifier`, constructing it on first
    /// use.
    ///
    /// Returns `None` when the identifier is not a valid type name, no
    /// constructor is registered for it, or construction fails. Failed
    /// constructions are logged and retried on the next call.
    pub fn get_agent(&self, identifier: &str) -> Option<Arc<dyn Agent>> {
        let agent_type = match AgentType::new(identifier) {
            Ok(agent_type) => agent_type,
            Err(err) => {
                debug!(event = "agent_manager.invalid_identifier", identifier, error = %err);
                return None;
            }
        };

        match self.registry.contains(&agent_type) {
            Ok(true) => {}
            Ok(false) => {
                debug!(event = "agent_manager.unknown_type", agent_type = %agent_type);
                return None;
            }
            Err(err) => {
                warn!(event = "agent_manager.registry_unavailable", error = %err);
                return None;
            }
        }

        let slot = {
            let mut instances = self.lock_instances();
            Arc::clone(instances.entry(agent_type.clone()).or_default())
        };

        let constructed = slot.get_or_try_init(|| {
            let args = self
                .constructor_args
                .get(&agent_type)
                .cloned()
                .unwrap_or_default();
            let agent = self.registry.create(&agent_type, &args)?;
            info!(
                event = "agent_manager.constructed",
                agent_type = %agent_type,
                agent_id = %agent.descriptor().id()
            );
            Ok::<_, AgentRegistryError>(agent)
        });

        match constructed {
            Ok(agent) => Some(Arc::clone(agent)),
            Err(err) => {
                warn!(
                    event = "agent_manager.construction_failed",
                    agent_type = %agent_type,
                    error = %err
                );
                None
            }
        }
    }

    /// Resolves `identifier` and runs `payload` through the execution guard.
    ///
    /// Never fails: an unknown identifier yields a failed result whose error
    /// is [`AGENT_NOT_FOUND`](crate::agent::domain::AGENT_NOT_FOUND) and
    /// whose performance is zero.
    pub async fn execute_agent(&self, identifier: &str, payload: &AgentPayload) -> AgentResult {
        let Some(agent) = self.get_agent(identifier) else {
            warn!(
                event = "agent_manager.agent_not_found",
                identifier,
                task = payload.task()
            );
            return AgentResult::not_found();
        };

        self.guard
            .run(agent.descriptor().id(), payload, || agent.dispatch(payload))
            .await
    }

    /// Returns the type names the registry can construct.
    ///
    /// Returns an empty list when the registry is unavailable.
    #[must_use]
    pub fn available_types(&self) -> Vec<AgentType> {
        self.registry.list_types().unwrap_or_else(|err| {
            warn!(event = "agent_manager.registry_unavailable", error = %err);
            Vec::new()
        })
    }

    /// Returns descriptors of the agents constructed so far, ordered by
    /// type name.
    #[must_use]
    pub fn loaded_agents(&self) -> Vec<AgentDescriptor> {
        let instances = self.lock_instances();
        let mut loaded: Vec<(&AgentType, AgentDescriptor)> = instances
            .iter()
            .filter_map(|(agent_type, slot)| {
                slot.get()
                    .map(|agent| (agent_type, agent.descriptor().clone()))
            })
            .collect();
        loaded.sort_by(|left, right| left.0.cmp(right.0));
        loaded.into_iter().map(|(_, descriptor)| descriptor).collect()
    }

    /// Drops the cached instance for `identifier`.
    ///
    /// Returns whether an entry was removed. The next `get_agent` call
    /// constructs a fresh instance; callers still holding the old `Arc`
    /// keep using it.
    pub fn evict(&self, identifier: &str) -> bool {
        let Ok(agent_type) = AgentType::new(identifier) else {
            return false;
        };
        let removed = self.lock_instances().remove(&agent_type).is_some();
        if removed {
            debug!(event = "agent_manager.evicted", agent_type = %agent_type);
        }
        removed
    }

    /// Drops every cached instance.
    pub fn reset(&self) {
        self.lock_instances().clear();
        debug!(event = "agent_manager.reset");
    }

    /// The map only ever gains or loses whole slots, so a poisoned guard
    /// still holds a consistent map.
    fn lock_instances(&self) -> MutexGuard<'_, HashMap<AgentType, InstanceSlot>> {
        self.instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
