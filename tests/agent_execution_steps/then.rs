//! Then steps for agent execution BDD scenarios.

use std::sync::atomic::Ordering;
use std::time::Duration;

use super::world::{ExecutionWorld, run_async};
use mercator::agent::domain::AgentPayload;
use rstest_bdd_macros::then;
use serde_json::json;

#[then("the result is successful with data {value:i64}")]
fn result_is_successful(world: &ExecutionWorld, value: i64) -> Result<(), eyre::Report> {
    let result = world.last_result()?;
    if !result.is_success() || result.data() != Some(&json!(value)) {
        return Err(eyre::eyre!("expected success with {value}, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the result fails with error "{message}""#)]
fn result_fails_with(world: &ExecutionWorld, message: String) -> Result<(), eyre::Report> {
    let result = world.last_result()?;
    if result.is_success() || result.error() != Some(message.as_str()) {
        return Err(eyre::eyre!("expected failure '{message}', got {result:?}"));
    }
    Ok(())
}

#[then("the result performance is zero")]
fn result_performance_is_zero(world: &ExecutionWorld) -> Result<(), eyre::Report> {
    let result = world.last_result()?;
    if result.performance() != Duration::ZERO {
        return Err(eyre::eyre!(
            "expected zero performance, got {:?}",
            result.performance()
        ));
    }
    Ok(())
}

#[then(r#"agent "{agent}" still answers task "{task}""#)]
fn agent_still_answers(
    world: &ExecutionWorld,
    agent: String,
    task: String,
) -> Result<(), eyre::Report> {
    let result = run_async(
        world
            .manager
            .execute_agent(&agent, &AgentPayload::new(task.as_str())),
    );
    if !result.is_success() {
        return Err(eyre::eyre!("expected '{agent}' to answer '{task}', got {result:?}"));
    }
    Ok(())
}

#[then(r#"the "{name}" constructor ran {count:usize} time"#)]
fn constructor_ran(world: &ExecutionWorld, name: String, count: usize) -> Result<(), eyre::Report> {
    let counter = world
        .constructions
        .get(&name)
        .ok_or_else(|| eyre::eyre!("no counting agent named '{name}'"))?;
    let ran = counter.load(Ordering::SeqCst);
    if ran != count {
        return Err(eyre::eyre!("expected {count} constructions of '{name}', found {ran}"));
    }
    Ok(())
}
