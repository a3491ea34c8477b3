//! Domain model for agent identity and the execution envelope.
//!
//! The agent domain models descriptor metadata, capability declarations,
//! and the payload/result shapes crossing every agent invocation. All
//! infrastructure concerns are kept outside the domain boundary.

mod capabilities;
mod category;
mod descriptor;
mod error;
mod ids;
mod payload;
mod result;

pub use capabilities::CapabilitySet;
pub use category::AgentCategory;
pub use descriptor::AgentDescriptor;
pub use error::{AgentDomainError, ParseAgentCategoryError, ParsePriorityError};
pub use ids::{AgentId, AgentType, ExecutionId};
pub use payload::{AgentPayload, Priority};
pub use result::{AGENT_NOT_FOUND, AgentResult, MalformedResultError};
