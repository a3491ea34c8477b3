//! Application services for agent registration, resolution and execution.

mod guard;
mod manager;
mod registry;
mod router;

pub use guard::ExecutionGuard;
pub use manager::AgentManager;
pub use registry::{AgentConstructor, AgentRegistry, AgentRegistryError, AgentRegistryResult};
pub use router::TaskRouter;
