use super::*;

#[test]
fn test_strict_json_parses() {
    let patch = parse_patch_text(
        r#"{"markup":"<p>hi</p>","style":"p{}","script":"","explanation":"added a paragraph"}"#,
    )
    .unwrap();
    assert_eq!(patch.markup, "<p>hi</p>");
    assert_eq!(patch.style, "p{}");
    assert_eq!(patch.explanation, "added a paragraph");
}

#[test]
fn test_object_is_extracted_from_free_text() {
    let patch = parse_patch_text(r#"Here is your patch: {"markup":"<p>hi</p>"}"#).unwrap();
    assert_eq!(patch.markup, "<p>hi</p>");
    assert_eq!(patch.style, "");
    assert_eq!(patch.script, "");
    assert_eq!(patch.explanation, DEFAULT_EXPLANATION);
}

#[test]
fn test_code_fenced_object_is_extracted() {
    let raw = "```json\n{\"style\":\"body{background:black}\"}\n```";
    let patch = parse_patch_text(raw).unwrap();
    assert_eq!(patch.style, "body{background:black}");
}

#[test]
fn test_nested_braces_survive_greedy_extraction() {
    let raw = r#"Sure! {"markup":"<div></div>","style":"div{color:red}","script":"if (x) { y(); }"}"#;
    let patch = parse_patch_text(raw).unwrap();
    assert_eq!(patch.script, "if (x) { y(); }");
}

#[test]
fn test_wrong_shape_fields_default_to_empty() {
    let patch = parse_patch_text(r#"{"markup":3,"style":null,"script":["x"]}"#).unwrap();
    assert_eq!(patch.markup, "");
    assert_eq!(patch.style, "");
    assert_eq!(patch.script, "");
}

#[test]
fn test_text_without_object_is_malformed() {
    let err = parse_patch_text("I cannot help with that.").unwrap_err();
    assert!(matches!(err, BrokerError::MalformedOutput(_)));
}

#[test]
fn test_broken_braces_are_malformed() {
    let err = parse_patch_text(r#"patch } markup { oops"#).unwrap_err();
    assert!(matches!(err, BrokerError::MalformedOutput(_)));
}

#[test]
fn test_missing_explanation_gets_default() {
    let patch = parse_patch_text(r#"{"markup":"<p>hi</p>"}"#).unwrap();
    assert_eq!(patch.explanation, DEFAULT_EXPLANATION);
}
