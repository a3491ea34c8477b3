//! Execution guard wrapping every agent dispatch.
//!
//! The guard is the single point where task outcomes become
//! [`AgentResult`] values: it times the call with the injected clock,
//! captures errors and panics, and never lets either reach the caller.

use crate::agent::{
    domain::{AgentId, AgentPayload, AgentResult, ExecutionId},
    ports::TaskResult,
};
use futures::FutureExt;
use mockable::{Clock, DefaultClock};
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tracing::{Instrument, debug, warn};

/// Message used when a panic payload is neither `&str` nor `String`.
const OPAQUE_PANIC_MESSAGE: &str = "agent handler panicked";

/// Times and normalises a single task dispatch.
#[derive(Debug, Clone)]
pub struct ExecutionGuard<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
}

impl ExecutionGuard<DefaultClock> {
    /// Creates a guard reading the system clock.
    #[must_use]
    pub fn system() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl<C> ExecutionGuard<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a guard reading `clock`.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Builds the future returned by `body`, awaits it and converts its
    /// outcome into an [`AgentResult`].
    ///
    /// - `Ok(value)` becomes a success carrying `value`.
    /// - `Err(err)` becomes a failure carrying `err.to_string()`.
    /// - A panic becomes a failure carrying the panic message.
    ///
    /// `body` is called inside the panic boundary, so work done while
    /// building the future is covered as well as work done while polling
    /// it. In every case `performance` is the time elapsed between the
    /// start of the call and its completion or failure.
    pub async fn run<B, F>(&self, agent_id: &AgentId, payload: &AgentPayload, body: B) -> AgentResult
    where
        B: FnOnce() -> F + Send,
        F: Future<Output = TaskResult> + Send,
    {
        let execution_id = ExecutionId::new();
        let span = tracing::info_span!(
            "agent.execute",
            execution_id = %execution_id,
            agent_id = %agent_id,
            task = payload.task(),
            priority = %payload.priority(),
        );

        async move {
            let started_at = self.clock.utc();
            let outcome = AssertUnwindSafe(async move { body().await })
                .catch_unwind()
                .await;
            let elapsed = self.elapsed_since(started_at);
            let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

            match outcome {
                Ok(Ok(data)) => {
                    debug!(event = "agent.execute.succeeded", elapsed_ms);
                    AgentResult::success(data, elapsed)
                }
                Ok(Err(err)) => {
                    let message = err.to_string();
                    warn!(event = "agent.execute.failed", elapsed_ms, error = %message);
                    AgentResult::failure(message, elapsed)
                }
                Err(panic) => {
                    let message = panic_message(panic.as_ref());
                    warn!(event = "agent.execute.panicked", elapsed_ms, error = %message);
                    AgentResult::failure(message, elapsed)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Clock readings that run backwards clamp to zero.
    fn elapsed_since(&self, started_at: chrono::DateTime<chrono::Utc>) -> Duration {
        (self.clock.utc() - started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

/// Extracts the message carried by a panic payload.
pub(super) fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        OPAQUE_PANIC_MESSAGE.to_owned()
    }
}
