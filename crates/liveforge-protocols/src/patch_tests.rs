use super::*;

#[test]
fn test_empty_state_is_empty() {
    assert!(PatchState::empty().is_empty());
}

#[test]
fn test_state_with_markup_is_not_empty() {
    let state = PatchState {
        markup: "<b>x</b>".to_string(),
        ..Default::default()
    };
    assert!(!state.is_empty());
}

#[test]
fn test_merge_retains_omitted_fields() {
    let state = PatchState {
        markup: "<b>x</b>".to_string(),
        style: "b{color:red}".to_string(),
        script: "let a = 1;".to_string(),
    };
    let next = state.merged(&PatchRequest::new().with_style("b{color:blue}"));
    assert_eq!(next.markup, "<b>x</b>");
    assert_eq!(next.style, "b{color:blue}");
    assert_eq!(next.script, "let a = 1;");
}

#[test]
fn test_merge_empty_request_is_identity() {
    let state = PatchState {
        markup: "<i>a</i>".to_string(),
        style: "i{}".to_string(),
        script: String::new(),
    };
    assert_eq!(state.merged(&PatchRequest::new()), state);
}

#[test]
fn test_merge_explicit_empty_clears_field() {
    let state = PatchState {
        markup: "<i>a</i>".to_string(),
        ..Default::default()
    };
    let next = state.merged(&PatchRequest::new().with_markup(""));
    assert_eq!(next.markup, "");
}

#[test]
fn test_request_serializes_without_omitted_fields() {
    let json = serde_json::to_string(&PatchRequest::new().with_markup("<p>hi</p>")).unwrap();
    assert!(json.contains("markup"));
    assert!(!json.contains("style"));
    assert!(!json.contains("script"));
}

#[test]
fn test_request_deserializes_missing_fields_as_none() {
    let request: PatchRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(request, PatchRequest::new());
}

#[test]
fn test_patch_deserializes_with_defaults() {
    let patch: Patch = serde_json::from_str(r#"{"markup":"<p>hi</p>"}"#).unwrap();
    assert_eq!(patch.markup, "<p>hi</p>");
    assert_eq!(patch.style, "");
    assert_eq!(patch.script, "");
    assert_eq!(patch.explanation, "");
}

#[test]
fn test_request_from_patch_applies_all_fields() {
    let patch = Patch {
        markup: "<p>hi</p>".to_string(),
        style: String::new(),
        script: String::new(),
        explanation: "done".to_string(),
    };
    let request = PatchRequest::from(patch);
    assert_eq!(request.markup.as_deref(), Some("<p>hi</p>"));
    assert_eq!(request.style.as_deref(), Some(""));
    assert_eq!(request.script.as_deref(), Some(""));
}
