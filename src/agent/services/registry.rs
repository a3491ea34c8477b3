//! Registry mapping agent type names to constructors.
//!
//! Provides [`AgentRegistry`], the table populated once during startup and
//! read by [`AgentManager`](super::AgentManager) whenever it needs to build
//! an agent.

use super::guard::panic_message;
use crate::agent::{
    domain::{AgentDomainError, AgentType},
    ports::{Agent, AgentConstructionError, ConstructorArgs},
};
use std::collections::HashMap;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::debug;

/// Shared constructor building an agent from configuration arguments.
pub type AgentConstructor = Arc<
    dyn Fn(&ConstructorArgs) -> Result<Arc<dyn Agent>, AgentConstructionError> + Send + Sync,
>;

/// Result type for registry operations.
pub type AgentRegistryResult<T> = Result<T, AgentRegistryError>;

/// Errors returned by registry operations.
#[derive(Debug, Clone, Error)]
pub enum AgentRegistryError {
    /// No constructor is registered for the type name.
    #[error("agent type not registered: {0}")]
    TypeNotRegistered(AgentType),

    /// The registered constructor failed.
    #[error("failed to construct agent '{agent_type}': {source}")]
    Construction {
        /// Type name whose constructor failed.
        agent_type: AgentType,
        /// Constructor error.
        #[source]
        source: AgentConstructionError,
    },

    /// A type name failed validation.
    #[error(transparent)]
    InvalidTypeName(#[from] AgentDomainError),

    /// The registry lock was poisoned by a panicking writer.
    #[error("agent registry lock poisoned: {0}")]
    Poisoned(String),
}

/// Thread-safe table of agent constructors keyed by type name.
///
/// Registration inserts or overwrites: the last constructor registered for
/// a type wins, so re-running an initialisation routine is harmless.
#[derive(Default)]
pub struct AgentRegistry {
    constructors: RwLock<HashMap<AgentType, AgentConstructor>>,
}

impl AgentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `constructor` under `agent_type`, replacing any previous
    /// constructor for the same type.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::Poisoned`] when lock acquisition fails.
    pub fn register<F>(&self, agent_type: AgentType, constructor: F) -> AgentRegistryResult<()>
    where
        F: Fn(&ConstructorArgs) -> Result<Arc<dyn Agent>, AgentConstructionError>
            + Send
            + Sync
            + 'static,
    {
        let mut constructors = self
            .constructors
            .write()
            .map_err(|err| AgentRegistryError::Poisoned(err.to_string()))?;

        let replaced = constructors
            .insert(agent_type.clone(), Arc::new(constructor))
            .is_some();
        debug!(
            event = "agent_registry.registered",
            agent_type = %agent_type,
            replaced
        );
        Ok(())
    }

    /// Returns the registered type names in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::Poisoned`] when lock acquisition fails.
    pub fn list_types(&self) -> AgentRegistryResult<Vec<AgentType>> {
        let constructors = self
            .constructors
            .read()
            .map_err(|err| AgentRegistryError::Poisoned(err.to_string()))?;
        let mut types: Vec<AgentType> = constructors.keys().cloned().collect();
        types.sort();
        Ok(types)
    }

    /// Returns whether a constructor is registered for `agent_type`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::Poisoned`] when lock acquisition fails.
    pub fn contains(&self, agent_type: &AgentType) -> AgentRegistryResult<bool> {
        let constructors = self
            .constructors
            .read()
            .map_err(|err| AgentRegistryError::Poisoned(err.to_string()))?;
        Ok(constructors.contains_key(agent_type))
    }

    /// Instantiates the agent registered under `agent_type`.
    ///
    /// The constructor runs outside the registry lock, so constructors may
    /// consult the registry themselves. A panicking constructor is reported
    /// as [`AgentConstructionError::Panicked`].
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::TypeNotRegistered`] when no constructor
    /// exists, [`AgentRegistryError::Construction`] when the constructor
    /// fails or panics, or [`AgentRegistryError::Poisoned`] when lock
    /// acquisition fails.
    pub fn create(
        &self,
        agent_type: &AgentType,
        args: &ConstructorArgs,
    ) -> AgentRegistryResult<Arc<dyn Agent>> {
        let constructor = {
            let constructors = self
                .constructors
                .read()
                .map_err(|err| AgentRegistryError::Poisoned(err.to_string()))?;
            constructors
                .get(agent_type)
                .cloned()
                .ok_or_else(|| AgentRegistryError::TypeNotRegistered(agent_type.clone()))?
        };

        catch_unwind(AssertUnwindSafe(|| constructor(args)))
            .unwrap_or_else(|panic| {
                Err(AgentConstructionError::Panicked(panic_message(
                    panic.as_ref(),
                )))
            })
            .map_err(|source| AgentRegistryError::Construction {
                agent_type: agent_type.clone(),
                source,
            })
    }
}

impl fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types = self.list_types().unwrap_or_default();
        f.debug_struct("AgentRegistry")
            .field("types", &types)
            .finish()
    }
}
