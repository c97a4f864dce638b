use serde::Deserialize;
use serde_json::Value;

/// Error body returned by the record service on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Usually a string; request validation failures carry a list of
    /// `{loc, msg, type}` objects instead.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Renders `detail` as the text shown after `Error: `.
    #[must_use]
    pub fn render_detail(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) => Some(text.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    Some(Value::Array(items.clone()).to_string())
                } else {
                    Some(messages.join("; "))
                }
            }
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
