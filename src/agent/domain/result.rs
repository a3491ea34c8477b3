//! Execution result envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Error message returned when a manager cannot resolve an identifier.
pub const AGENT_NOT_FOUND: &str = "Agent not found";

/// Uniform outcome of one agent invocation.
///
/// Exactly one of [`data`](Self::data) and [`error`](Self::error) is
/// populated, matching [`success`](Self::success). `performance` is the
/// elapsed wall-clock time of the guarded call and is always present.
///
/// # Two layers of success
///
/// `success == true` only means the dispatch mechanism worked: the handler
/// returned a value instead of an error or a panic. A handler may still
/// report a *business* failure inside that value (for example
/// `{"accepted": false}` when a downstream service declined). Callers that
/// care about the business outcome must inspect `data` as well.
///
/// Serialises to `{"success", "data"?, "error"?, "performance"}` with
/// `performance` in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireResult", try_from = "WireResult")]
pub struct AgentResult {
    outcome: Outcome,
    performance: Duration,
}

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Succeeded(Value),
    Failed(String),
}

impl AgentResult {
    /// Creates a successful result carrying `data`.
    #[must_use]
    pub const fn success(data: Value, performance: Duration) -> Self {
        Self {
            outcome: Outcome::Succeeded(data),
            performance,
        }
    }

    /// Creates a failed result carrying `error`.
    #[must_use]
    pub fn failure(error: impl Into<String>, performance: Duration) -> Self {
        Self {
            outcome: Outcome::Failed(error.into()),
            performance,
        }
    }

    /// Creates the failure returned for an unknown agent identifier.
    #[must_use]
    pub fn not_found() -> Self {
        Self::failure(AGENT_NOT_FOUND, Duration::ZERO)
    }

    /// Returns whether dispatch succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Succeeded(_))
    }

    /// Returns the handler's value; `None` for failures.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Succeeded(data) => Some(data),
            Outcome::Failed(_) => None,
        }
    }

    /// Returns the failure message; `None` for successes.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Succeeded(_) => None,
            Outcome::Failed(error) => Some(error),
        }
    }

    /// Returns the elapsed time of the guarded call.
    #[must_use]
    pub const fn performance(&self) -> Duration {
        self.performance
    }

    /// Returns the elapsed time in whole milliseconds, saturating.
    #[must_use]
    pub fn performance_ms(&self) -> u64 {
        u64::try_from(self.performance.as_millis()).unwrap_or(u64::MAX)
    }

    /// Consumes the result, returning the handler's value or the error
    /// message.
    ///
    /// # Errors
    ///
    /// Returns the failure message when the invocation failed.
    pub fn into_data(self) -> Result<Value, String> {
        match self.outcome {
            Outcome::Succeeded(data) => Ok(data),
            Outcome::Failed(error) => Err(error),
        }
    }
}

/// Flat serialised shape of [`AgentResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireResult {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    performance: u64,
}

/// Error returned when a serialised result breaks the data/error invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("result must carry data when successful and an error message when failed")]
pub struct MalformedResultError;

impl From<AgentResult> for WireResult {
    fn from(result: AgentResult) -> Self {
        let performance = result.performance_ms();
        match result.outcome {
            Outcome::Succeeded(data) => Self {
                success: true,
                data: Some(data),
                error: None,
                performance,
            },
            Outcome::Failed(error) => Self {
                success: false,
                data: None,
                error: Some(error),
                performance,
            },
        }
    }
}

impl TryFrom<WireResult> for AgentResult {
    type Error = MalformedResultError;

    fn try_from(wire: WireResult) -> Result<Self, Self::Error> {
        let performance = Duration::from_millis(wire.performance);
        match (wire.success, wire.data, wire.error) {
            (true, data, None) => Ok(Self::success(data.unwrap_or(Value::Null), performance)),
            (false, None, Some(error)) => Ok(Self::failure(error, performance)),
            _ => Err(MalformedResultError),
        }
    }
}
