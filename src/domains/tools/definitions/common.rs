//! Common helpers shared across tool definitions.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

/// Create an error result with a plain text message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Serialize a JSON value into the text body of a tool result.
pub fn json_block(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_result_is_flagged() {
        let result = error_result("boom");
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_json_block_pretty_prints() {
        let block = json_block(&json!({"a": 1}));
        assert!(block.contains("\"a\": 1"));
    }
}
