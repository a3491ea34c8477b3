//! Port contracts for agent implementations.
//!
//! Ports define the infrastructure-agnostic interfaces every concrete agent
//! implements and the constructor signature the registry stores.

pub mod agent;
pub mod constructor;

pub use agent::{Agent, AgentTaskError, TaskResult};
pub use constructor::{AgentConstructionError, ConstructorArgs};

#[cfg(test)]
pub use agent::MockAgent;
