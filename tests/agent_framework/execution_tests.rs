//! End-to-end execution through the manager.

use super::helpers::{CONTENT_AGENT_TYPE, TestManager, manager};
use mercator::agent::domain::{AgentCategory, AgentPayload, AgentResult, Priority};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test]
async fn content_agent_drafts_headline(manager: TestManager) {
    let payload = AgentPayload::new("draft_headline")
        .with_context_value("topic", "spring launches")
        .with_priority(Priority::High);

    let result = manager.execute_agent(CONTENT_AGENT_TYPE, &payload).await;

    assert!(result.is_success());
    assert_eq!(
        result.data(),
        Some(&json!({"headline": "Everything you need to know about spring launches"}))
    );
}

#[rstest]
#[tokio::test]
async fn invalid_context_surfaces_as_failure(manager: TestManager) {
    let payload = AgentPayload::new("draft_headline").with_context_value("topic", 3);

    let result = manager.execute_agent(CONTENT_AGENT_TYPE, &payload).await;

    assert!(!result.is_success());
    assert_eq!(
        result.error(),
        Some("invalid context field 'topic': expected a string")
    );
}

#[rstest]
#[tokio::test]
async fn business_rejection_is_reported_in_data(manager: TestManager) {
    let payload = AgentPayload::new("review").with_context_value("draft", "   ");

    let result = manager.execute_agent(CONTENT_AGENT_TYPE, &payload).await;

    assert!(result.is_success());
    assert_eq!(result.data(), Some(&json!({"approved": false})));
}

#[rstest]
#[tokio::test]
async fn successful_result_serialises_to_envelope(manager: TestManager) {
    let payload = AgentPayload::new("echo").with_context_value("value", "hi");

    let result = manager.execute_agent("echo", &payload).await;
    let wire = serde_json::to_value(&result).expect("result should serialise");

    assert_eq!(wire.get("success"), Some(&json!(true)));
    assert_eq!(wire.get("data"), Some(&json!("hi")));
    assert!(wire.get("error").is_none());
    assert!(wire.get("performance").is_some_and(serde_json::Value::is_u64));
}

#[rstest]
#[tokio::test]
async fn not_found_result_serialises_to_envelope(manager: TestManager) {
    let result = manager
        .execute_agent("copywriter", &AgentPayload::new("draft"))
        .await;
    let wire = serde_json::to_value(&result).expect("result should serialise");

    assert_eq!(
        wire,
        json!({"success": false, "error": "Agent not found", "performance": 0})
    );
    let restored: AgentResult = serde_json::from_value(wire).expect("envelope should parse");
    assert_eq!(restored, result);
}

#[rstest]
#[tokio::test]
async fn payload_decoded_from_json_executes(manager: TestManager) {
    let payload: AgentPayload = serde_json::from_value(json!({
        "task": "inspect",
        "context": {"audience": "retail"},
        "metadata": {"request_id": "r-1"},
    }))
    .expect("payload should parse");

    let result = manager.execute_agent("echo", &payload).await;

    assert_eq!(
        result.data(),
        Some(&json!({
            "task": "inspect",
            "priority": "medium",
            "context": {"audience": "retail"},
            "metadata": {"request_id": "r-1"},
        }))
    );
}

#[rstest]
fn loaded_agents_describe_constructed_instances(manager: TestManager) {
    manager
        .get_agent(CONTENT_AGENT_TYPE)
        .expect("content agent should resolve");

    let loaded = manager.loaded_agents();
    let content = loaded.first().expect("one loaded agent");

    assert_eq!(content.category(), AgentCategory::Content);
    assert!(content.supports("draft_headline"));
    assert!(content.supports("review"));
    assert!(!content.supports("echo"));
}
