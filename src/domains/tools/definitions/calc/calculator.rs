//! Calculator tool definition.
//!
//! Stateless binary arithmetic over two floating point operands.

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

use crate::domains::tools::definitions::common::{error_result, json_block, success_result};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CalcOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl CalcOperation {
    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "^",
        }
    }
}

/// Parameters for the calculator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculatorParams {
    /// Operation: add, subtract, multiply, divide, modulo or power.
    pub operation: CalcOperation,

    /// Left operand.
    pub a: f64,

    /// Right operand.
    pub b: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Calculator tool - evaluates one binary arithmetic operation per call.
pub struct CalculatorTool;

impl CalculatorTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculator";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Perform basic arithmetic: add, subtract, multiply, divide, modulo or power over two numbers. Returns the operands, the operation and the result.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(operation = ?params.operation))]
    pub fn execute(params: &CalculatorParams) -> CallToolResult {
        let CalculatorParams { operation, a, b } = *params;

        let result = match operation {
            CalcOperation::Add => a + b,
            CalcOperation::Subtract => a - b,
            CalcOperation::Multiply => a * b,
            CalcOperation::Divide => {
                if b == 0.0 {
                    return error_result("Division by zero");
                }
                a / b
            }
            CalcOperation::Modulo => {
                if b == 0.0 {
                    return error_result("Modulo by zero");
                }
                a % b
            }
            CalcOperation::Power => a.powf(b),
        };

        info!("{} {} {} = {}", a, operation.symbol(), b, result);

        success_result(json_block(&json!({
            "operation": operation.symbol(),
            "a": a,
            "b": b,
            "result": result,
        })))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: CalculatorParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<CalculatorParams>(),
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
                let params: CalculatorParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::Value;

    fn result_json(result: &CallToolResult) -> Value {
        match &result.content[0].raw {
            RawContent::Text(text) => serde_json::from_str(&text.text).unwrap(),
            _ => panic!("Expected text content"),
        }
    }

    fn params(operation: CalcOperation, a: f64, b: f64) -> CalculatorParams {
        CalculatorParams { operation, a, b }
    }

    #[test]
    fn test_add() {
        let result = CalculatorTool::execute(&params(CalcOperation::Add, 2.0, 3.5));
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_json(&result)["result"], serde_json::json!(5.5));
    }

    #[test]
    fn test_divide() {
        let result = CalculatorTool::execute(&params(CalcOperation::Divide, 9.0, 2.0));
        assert_eq!(result_json(&result)["result"], serde_json::json!(4.5));
    }

    #[test]
    fn test_divide_by_zero_is_tool_error() {
        let result = CalculatorTool::execute(&params(CalcOperation::Divide, 1.0, 0.0));
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_modulo_by_zero_is_tool_error() {
        let result = CalculatorTool::execute(&params(CalcOperation::Modulo, 5.0, 0.0));
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_power() {
        let result = CalculatorTool::execute(&params(CalcOperation::Power, 2.0, 10.0));
        assert_eq!(result_json(&result)["result"], serde_json::json!(1024.0));
    }

    #[test]
    fn test_operation_deserializes_lowercase() {
        let params: CalculatorParams =
            serde_json::from_str(r#"{"operation": "multiply", "a": 4, "b": 2.5}"#).unwrap();
        assert_eq!(params.operation, CalcOperation::Multiply);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_rejects_bad_operation() {
        let args = serde_json::json!({"operation": "cube", "a": 1, "b": 2});
        assert!(CalculatorTool::http_handler(args).is_err());
    }
}
