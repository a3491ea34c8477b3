//! Diagnostic agent reflecting its input back to the caller.

use crate::agent::{
    domain::{AgentCategory, AgentDescriptor, AgentId, AgentPayload, CapabilitySet},
    ports::{Agent, AgentConstructionError, AgentTaskError, ConstructorArgs, TaskResult},
};
use async_trait::async_trait;
use serde_json::{Value, json};

/// Registry type name of the echo agent.
pub const ECHO_AGENT_TYPE: &str = "echo";

const ECHO_TASK: &str = "echo";
const INSPECT_TASK: &str = "inspect";
const DEFAULT_DISPLAY_NAME: &str = "Echo Agent";

/// Stateless agent used to probe the execution path end to end.
///
/// - `echo` returns `context.value` unchanged.
/// - `inspect` returns the task, priority, context and metadata it received.
#[derive(Debug, Clone)]
pub struct EchoAgent {
    descriptor: AgentDescriptor,
}

impl EchoAgent {
    /// Creates an echo agent with the default display name.
    ///
    /// # Errors
    ///
    /// Returns [`AgentConstructionError::Descriptor`] when the descriptor
    /// cannot be built.
    pub fn new() -> Result<Self, AgentConstructionError> {
        Self::with_display_name(DEFAULT_DISPLAY_NAME)
    }

    /// Creates an echo agent with a custom display name.
    ///
    /// # Errors
    ///
    /// Returns [`AgentConstructionError::Descriptor`] when the display name
    /// is blank.
    pub fn with_display_name(name: &str) -> Result<Self, AgentConstructionError> {
        let descriptor = AgentDescriptor::new(
            AgentId::new(ECHO_AGENT_TYPE)?,
            name,
            AgentCategory::Utility,
            CapabilitySet::new([ECHO_TASK, INSPECT_TASK])?,
        )?;
        Ok(Self { descriptor })
    }

    /// Builds an echo agent from constructor arguments.
    ///
    /// Accepts an optional string `display_name`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentConstructionError::InvalidArgument`] when
    /// `display_name` is present but not a string.
    pub fn from_args(args: &ConstructorArgs) -> Result<Self, AgentConstructionError> {
        match args.get("display_name") {
            None => Self::new(),
            Some(Value::String(name)) => Self::with_display_name(name),
            Some(_) => Err(AgentConstructionError::invalid_argument(
                "display_name",
                "expected a string",
            )),
        }
    }

    fn echo(payload: &AgentPayload) -> TaskResult {
        payload
            .context_value("value")
            .cloned()
            .ok_or_else(|| AgentTaskError::invalid_context("value", "missing"))
    }

    fn inspect(payload: &AgentPayload) -> TaskResult {
        Ok(json!({
            "task": payload.task(),
            "priority": payload.priority(),
            "context": payload.context(),
            "metadata": payload.metadata(),
        }))
    }
}

#[async_trait]
impl Agent for EchoAgent {
    fn descriptor(&self) -> &AgentDescriptor {
        &self.descriptor
    }

    async fn dispatch(&self, payload: &AgentPayload) -> TaskResult {
        match payload.task() {
            ECHO_TASK => Self::echo(payload),
            INSPECT_TASK => Self::inspect(payload),
            other => Err(AgentTaskError::unknown_task(other)),
        }
    }
}
