use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the tokenization API.
///
/// Every field is optional: server error shapes vary between endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Extracts whatever fields are usable from an arbitrary error payload.
    ///
    /// Validation errors send `message` as an array of strings, which are joined.
    /// A numeric `code` is kept as its decimal text. Fields of any other shape are
    /// dropped individually instead of discarding the whole body.
    pub fn from_value(value: &Value) -> Self {
        let message = match value.get("message") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Array(items)) => {
                let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                Some(parts.join(", "))
            }
            _ => None,
        };
        let code = match value.get("code") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        let detail = value.get("detail").filter(|d| !d.is_null()).cloned();

        Self {
            message,
            code,
            detail,
        }
    }

    /// Parses raw response bytes; anything that is not JSON yields an empty body.
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .map(|value| Self::from_value(&value))
            .unwrap_or_default()
    }
}
