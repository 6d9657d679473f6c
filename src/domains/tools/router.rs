//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route; the sequential thinking tool additionally receives the shared
//! session so every route commits to the same history.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;
use crate::domains::thinking::ThinkingSession;

use super::definitions::{
    CalculatorTool, DataValidatorTool, SequentialThinkingTool, TextAnalyzerTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>, session: Arc<ThinkingSession>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CalculatorTool::create_route())
        .with_route(DataValidatorTool::create_route())
        .with_route(SequentialThinkingTool::create_route(config, session))
        .with_route(TextAnalyzerTool::create_route())
}
