//! Data validator tool definition.
//!
//! Stateless format checks over a candidate string.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{json_block, success_result};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Formats the validator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Email,
    Url,
    Uuid,
    Integer,
    Json,
}

impl DataFormat {
    fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Url => "url",
            Self::Uuid => "uuid",
            Self::Integer => "integer",
            Self::Json => "json",
        }
    }
}

/// Parameters for the data validator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DataValidatorParams {
    /// The candidate value to check.
    pub value: String,

    /// Expected format: email, url, uuid, integer or json.
    pub format: DataFormat,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Data validator tool - checks a string against a declared format.
pub struct DataValidatorTool;

impl DataValidatorTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "data_validator";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Validate a string against a declared format (email, url, uuid, integer or json). Returns whether the value conforms and, when it does not, a short reason.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(format = ?params.format))]
    pub fn execute(params: &DataValidatorParams) -> CallToolResult {
        let detail = match params.format {
            DataFormat::Email => check_email(&params.value),
            DataFormat::Url => check_url(&params.value),
            DataFormat::Uuid => check_uuid(&params.value),
            DataFormat::Integer => check_integer(&params.value),
            DataFormat::Json => check_json(&params.value),
        };

        let valid = detail.is_none();
        info!(
            "Validated value as {}: {}",
            params.format.name(),
            if valid { "ok" } else { "invalid" }
        );

        success_result(json_block(&json!({
            "valid": valid,
            "format": params.format.name(),
            "detail": detail,
        })))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: DataValidatorParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()).to_string())?;

        let result = Self::execute(&params);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DataValidatorParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: DataValidatorParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Format checks
// ============================================================================
// Each check returns None when the value conforms, or a short reason.

fn check_email(value: &str) -> Option<String> {
    let Some((local, domain)) = value.split_once('@') else {
        return Some("missing '@'".to_string());
    };
    if local.is_empty() {
        return Some("empty local part".to_string());
    }
    if domain.contains('@') {
        return Some("more than one '@'".to_string());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && tld.len() >= 2 => None,
        _ => Some("domain must contain a dot".to_string()),
    }
}

fn check_url(value: &str) -> Option<String> {
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => None,
        Some(_) => Some("missing host".to_string()),
        None => Some("must start with http:// or https://".to_string()),
    }
}

/// UUID format: 8-4-4-4-12 hexadecimal characters.
fn check_uuid(value: &str) -> Option<String> {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let parts: Vec<&str> = value.split('-').collect();
    if parts.len() != GROUPS.len() {
        return Some("expected 5 dash-separated groups".to_string());
    }
    for (part, expected) in parts.iter().zip(GROUPS) {
        if part.len() != expected || !part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Some("expected 8-4-4-4-12 hexadecimal groups".to_string());
        }
    }
    None
}

fn check_integer(value: &str) -> Option<String> {
    value
        .parse::<i64>()
        .err()
        .map(|_| "not a base-10 integer".to_string())
}

fn check_json(value: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(value)
        .err()
        .map(|e| e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::Value;

    fn validate(value: &str, format: DataFormat) -> Value {
        let result = DataValidatorTool::execute(&DataValidatorParams {
            value: value.to_string(),
            format,
        });
        assert!(!result.is_error.unwrap_or(false));
        match &result.content[0].raw {
            RawContent::Text(text) => serde_json::from_str(&text.text).unwrap(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_email() {
        assert_eq!(validate("user@example.com", DataFormat::Email)["valid"], json!(true));
        assert_eq!(validate("no-at-sign", DataFormat::Email)["valid"], json!(false));
        assert_eq!(validate("@example.com", DataFormat::Email)["valid"], json!(false));
        assert_eq!(validate("user@nodot", DataFormat::Email)["valid"], json!(false));
    }

    #[test]
    fn test_url() {
        assert_eq!(validate("https://example.com/x", DataFormat::Url)["valid"], json!(true));
        assert_eq!(validate("ftp://example.com", DataFormat::Url)["valid"], json!(false));
        assert_eq!(validate("https://", DataFormat::Url)["valid"], json!(false));
    }

    #[test]
    fn test_uuid() {
        assert_eq!(
            validate("5b11f4ce-a62d-471e-81fc-a69a8278c7da", DataFormat::Uuid)["valid"],
            json!(true)
        );
        assert_eq!(
            validate("5b11f4ce-a62d-471e-81fc", DataFormat::Uuid)["valid"],
            json!(false)
        );
        assert_eq!(
            validate("5b11f4cg-a62d-471e-81fc-a69a8278c7da", DataFormat::Uuid)["valid"],
            json!(false)
        );
    }

    #[test]
    fn test_integer() {
        assert_eq!(validate("-42", DataFormat::Integer)["valid"], json!(true));
        assert_eq!(validate("4.2", DataFormat::Integer)["valid"], json!(false));
    }

    #[test]
    fn test_json() {
        assert_eq!(validate(r#"{"k": [1, 2]}"#, DataFormat::Json)["valid"], json!(true));
        let invalid = validate("{broken", DataFormat::Json);
        assert_eq!(invalid["valid"], json!(false));
        assert!(invalid["detail"].is_string());
    }
}
