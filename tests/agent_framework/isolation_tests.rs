//! Failures in one agent must not affect other agents or later calls.

use super::helpers::{CONTENT_AGENT_TYPE, TestManager, manager};
use mercator::agent::{
    adapters::RoutedAgent,
    domain::{AgentCategory, AgentId, AgentPayload, AgentType},
    ports::Agent,
    services::TaskRouter,
};
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

fn register_panicking_agent(manager: &TestManager) {
    manager
        .registry()
        .register(AgentType::new("volatile").expect("valid type name"), |_| {
            let router = TaskRouter::new()
                .route_sync("explode", |_| panic!("template missing"))
                .route_sync("ping", |_| Ok(json!("pong")));
            let agent = RoutedAgent::new(
                AgentId::new("volatile")?,
                "Volatile Agent",
                AgentCategory::Support,
                router,
            )?;
            Ok(Arc::new(agent) as Arc<dyn Agent>)
        })
        .expect("registration should succeed");
}

#[rstest]
#[tokio::test]
async fn panicking_agent_remains_usable(manager: TestManager) {
    register_panicking_agent(&manager);

    let exploded = manager
        .execute_agent("volatile", &AgentPayload::new("explode"))
        .await;
    let pinged = manager
        .execute_agent("volatile", &AgentPayload::new("ping"))
        .await;

    assert_eq!(exploded.error(), Some("template missing"));
    assert_eq!(pinged.data(), Some(&json!("pong")));
}

#[rstest]
#[tokio::test]
async fn failure_in_one_agent_leaves_others_untouched(manager: TestManager) {
    register_panicking_agent(&manager);

    let exploded = manager
        .execute_agent("volatile", &AgentPayload::new("explode"))
        .await;
    let drafted = manager
        .execute_agent(
            CONTENT_AGENT_TYPE,
            &AgentPayload::new("draft_headline").with_context_value("topic", "tea"),
        )
        .await;

    assert!(!exploded.is_success());
    assert!(drafted.is_success());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_executions_share_one_instance(manager: TestManager) {
    let manager = Arc::new(manager);

    let handles: Vec<_> = (0..8)
        .map(|value| {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move {
                let payload = AgentPayload::new("echo").with_context_value("value", value);
                manager.execute_agent("echo", &payload).await
            })
        })
        .collect();

    for (value, handle) in handles.into_iter().enumerate() {
        let result = handle.await.expect("task should join");
        assert_eq!(result.data(), Some(&json!(value)));
    }
    assert_eq!(manager.loaded_agents().len(), 1);
}
