//! Tolerant patch extraction from model output.

use serde_json::Value;

use liveforge_protocols::error::BrokerError;
use liveforge_protocols::patch::Patch;

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;

/// Explanation used when the model omits one.
pub const DEFAULT_EXPLANATION: &str = "Patch generated.";

/// Extract a patch from raw model output.
///
/// Strict JSON is tried first; if that fails or does not yield an object,
/// the first brace-delimited object in the text is parsed instead. Every
/// field defaults to empty when absent or not a string; nothing in the
/// reply is trusted to be present.
pub fn parse_patch_text(raw: &str) -> Result<Patch, BrokerError> {
    let object = match serde_json::from_str::<Value>(raw) {
        Ok(value) if value.is_object() => value,
        _ => {
            let excerpt = extract_json_object(raw).ok_or_else(|| {
                BrokerError::MalformedOutput("reply did not contain a JSON object".to_string())
            })?;
            serde_json::from_str::<Value>(excerpt)
                .map_err(|e| BrokerError::MalformedOutput(e.to_string()))?
        }
    };

    let explanation = string_field(&object, "explanation");
    Ok(Patch {
        markup: string_field(&object, "markup"),
        style: string_field(&object, "style"),
        script: string_field(&object, "script"),
        explanation: if explanation.is_empty() {
            DEFAULT_EXPLANATION.to_string()
        } else {
            explanation
        },
    })
}

fn string_field(object: &Value, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// First `{` through the last `}`, mirroring a greedy brace match.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}
