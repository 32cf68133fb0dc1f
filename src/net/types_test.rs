use super::*;

#[test]
fn chat_message_serializes_with_question_payload() {
    let event = Event::chat_message("What time is it?");
    let json = serde_json::to_value(&event).expect("serialize event");

    assert_eq!(
        json,
        serde_json::json!({
            "event": "chat_message",
            "data": { "question": "What time is it?" }
        })
    );
}

#[test]
fn event_round_trips_through_json() {
    let event = Event::chat_message("hello");
    let text = serde_json::to_string(&event).expect("serialize event");
    let back: Event = serde_json::from_str(&text).expect("deserialize event");

    assert_eq!(back, event);
}

#[test]
fn event_with_missing_data_decodes_as_null() {
    let event: Event = serde_json::from_str(r#"{"event":"chat_complete"}"#).expect("deserialize");

    assert_eq!(event.event, "chat_complete");
    assert!(event.data.is_null());
}

#[test]
fn unknown_event_decodes_without_error() {
    let event: Event =
        serde_json::from_str(r#"{"event":"presence:joined","data":{"user":"u-1"}}"#)
            .expect("deserialize");

    assert_eq!(event.event, "presence:joined");
    assert_eq!(event.data["user"], "u-1");
}
