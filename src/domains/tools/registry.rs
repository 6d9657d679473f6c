//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::Tool;

use crate::core::config::Config;
use crate::domains::thinking::ThinkingSession;

use super::definitions::{
    CalculatorTool, DataValidatorTool, SequentialThinkingTool, TextAnalyzerTool,
};
#[cfg(feature = "http")]
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
///
/// The registry carries the shared thinking session so HTTP dispatch commits
/// to the same history as the rmcp routes.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    config: Arc<Config>,
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    session: Arc<ThinkingSession>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>, session: Arc<ThinkingSession>) -> Self {
        Self { config, session }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            CalculatorTool::NAME,
            DataValidatorTool::NAME,
            SequentialThinkingTool::NAME,
            TextAnalyzerTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CalculatorTool::to_tool(),
            DataValidatorTool::to_tool(),
            SequentialThinkingTool::to_tool(),
            TextAnalyzerTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            CalculatorTool::NAME => CalculatorTool::http_handler(arguments),
            DataValidatorTool::NAME => DataValidatorTool::http_handler(arguments),
            SequentialThinkingTool::NAME => SequentialThinkingTool::http_handler(
                arguments,
                self.session.clone(),
                self.config.clone(),
            ),
            TextAnalyzerTool::NAME => TextAnalyzerTool::http_handler(arguments),
            _ => {
                tracing::warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name).to_string())
            }
        }
    }
}
