//! Unit tests for the agent execution framework.
//!
//! Shared fixtures live here: a stepping clock for deterministic timing and
//! a routed agent exercising every outcome the guard normalises.


use crate::agent::{
    adapters::RoutedAgent,
    domain::{AgentCategory, AgentId},
    ports::AgentTaskError,
    services::TaskRouter,
};
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use serde_json::json;
use std::sync::atomic::{AtomicI32, Ordering};

/// Clock advancing by a fixed step on every `utc` reading.
#[derive(Debug)]
pub(super) struct SteppingClock {
    step: TimeDelta,
    ticks: AtomicI32,
}

impl SteppingClock {
    pub(super) const fn new(step: TimeDelta) -> Self {
        Self {
            step,
            ticks: AtomicI32::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        DateTime::<Utc>::default() + self.step * tick
    }
}

/// Builds an agent whose tasks cover success, logical failure, error and
/// panic.
pub(super) fn probe_agent(id: &str) -> RoutedAgent {
    let router = TaskRouter::new()
        .route_sync("echo", |payload| {
            payload
                .context_value("value")
                .cloned()
                .ok_or_else(|| AgentTaskError::invalid_context("value", "missing"))
        })
        .route_sync("decline", |_| Ok(json!({"accepted": false})))
        .route_sync("boom", |_| Err(AgentTaskError::failed("boom")))
        .route("slow", |payload| async move {
            tokio::task::yield_now().await;
            Ok(json!({"task": payload.task()}))
        })
        .route_sync("panic", |_| panic!("handler exploded"));

    RoutedAgent::new(
        AgentId::new(id).expect("valid agent id"),
        "Probe Agent",
        AgentCategory::Utility,
        router,
    )
    .expect("valid routed agent")
}
