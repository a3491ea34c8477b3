//! Shared world state for agent execution BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use mercator::agent::{
    domain::AgentResult,
    services::{AgentManager, AgentRegistry},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Manager type used by the BDD world.
pub type TestManager = AgentManager<DefaultClock>;

/// Scenario world for agent execution behaviour tests.
pub struct ExecutionWorld {
    /// The manager under test.
    pub manager: TestManager,
    /// Constructor invocation counters keyed by agent type name.
    pub constructions: HashMap<String, Arc<AtomicUsize>>,
    /// Result of the last execution.
    pub last_result: Option<AgentResult>,
}

impl ExecutionWorld {
    /// Creates a world over an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            manager: AgentManager::new(Arc::new(AgentRegistry::new()), Arc::new(DefaultClock)),
            constructions: HashMap::new(),
            last_result: None,
        }
    }

    /// Returns the last execution result.
    ///
    /// # Errors
    ///
    /// Returns an error when no execution has run yet.
    pub fn last_result(&self) -> Result<&AgentResult, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing execution result in scenario world"))
    }
}

impl Default for ExecutionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ExecutionWorld {
    ExecutionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
