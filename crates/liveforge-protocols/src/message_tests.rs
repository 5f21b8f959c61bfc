use super::*;

#[test]
fn test_apply_message_wire_shape() {
    let msg = StoreMessage::Apply(PatchRequest::new().with_markup("<p>hi</p>"));
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["type"], "apply");
    assert_eq!(json["payload"]["markup"], "<p>hi</p>");
}

#[test]
fn test_reset_message_wire_shape() {
    let json = serde_json::to_value(StoreMessage::Reset).unwrap();
    assert_eq!(json["type"], "reset");
}

#[test]
fn test_get_state_round_trip() {
    let json = serde_json::to_string(&StoreMessage::GetState).unwrap();
    let back: StoreMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(back, StoreMessage::GetState);
}

#[test]
fn test_success_reply_omits_error() {
    let reply = StoreReply::success(PatchState::empty());
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["ok"], true);
    assert!(json.get("error").is_none());
}

#[test]
fn test_failure_reply_omits_state() {
    let reply = StoreReply::failure("script threw");
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], "script threw");
    assert!(json.get("state").is_none());
}

#[test]
fn test_reply_into_result() {
    let state = PatchState {
        markup: "<b>x</b>".to_string(),
        ..Default::default()
    };
    let reply = StoreReply::success(state.clone());
    assert_eq!(reply.into_result().unwrap(), state);
    assert!(StoreReply::failure("boom").into_result().is_err());
}

#[test]
fn test_generate_reply_success_shape() {
    let patch = Patch {
        markup: "<p>hi</p>".to_string(),
        ..Default::default()
    };
    let json = serde_json::to_value(GenerateReply::success(patch, "done")).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["patch"]["markup"], "<p>hi</p>");
    assert_eq!(json["explanation"], "done");
}
