use super::*;

fn event(name: &str, data: serde_json::Value) -> Event {
    Event {
        event: name.to_owned(),
        data,
    }
}

// =============================================================
// Token parsing
// =============================================================

#[test]
fn parse_token_accepts_bare_string_payload() {
    let e = event("chat_token", serde_json::json!("Hel"));
    assert_eq!(parse_token(&e), Some("Hel"));
}

#[test]
fn parse_token_accepts_object_fallback() {
    let e = event("chat_token", serde_json::json!({"token": "lo"}));
    assert_eq!(parse_token(&e), Some("lo"));
}

#[test]
fn parse_token_rejects_non_string_payload() {
    let e = event("chat_token", serde_json::json!(42));
    assert_eq!(parse_token(&e), None);
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn dispatch_token_stream_builds_one_message() {
    let mut chat = ChatState::default();

    dispatch_event(&event("chat_token", serde_json::json!("Hel")), &mut chat);
    dispatch_event(&event("chat_token", serde_json::json!("lo")), &mut chat);
    dispatch_event(&event("chat_complete", serde_json::json!({"status": "done"})), &mut chat);

    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].content, "Hello");
    assert!(chat.streaming.is_none());
}

#[test]
fn dispatch_token_after_complete_starts_second_message() {
    let mut chat = ChatState::default();

    dispatch_event(&event("chat_token", serde_json::json!("Hel")), &mut chat);
    dispatch_event(&event("chat_token", serde_json::json!("lo")), &mut chat);
    dispatch_event(&event("chat_complete", serde_json::Value::Null), &mut chat);
    dispatch_event(&event("chat_token", serde_json::json!("Hi")), &mut chat);

    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.messages[0].content, "Hello");
    assert_eq!(chat.messages[1].content, "Hi");
}

#[test]
fn dispatch_complete_without_stream_is_noop() {
    let mut chat = ChatState::default();

    dispatch_event(&event("chat_complete", serde_json::Value::Null), &mut chat);

    assert!(chat.messages.is_empty());
    assert!(chat.streaming.is_none());
}

#[test]
fn dispatch_ignores_unknown_events() {
    let mut chat = ChatState::default();

    dispatch_event(&event("presence:joined", serde_json::json!({"user": "u-1"})), &mut chat);

    assert!(chat.messages.is_empty());
}

#[test]
fn dispatch_ignores_malformed_token_payload() {
    let mut chat = ChatState::default();

    dispatch_event(&event("chat_token", serde_json::json!({"text": "nope"})), &mut chat);

    assert!(chat.messages.is_empty());
    assert!(chat.streaming.is_none());
}
