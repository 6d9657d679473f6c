//! Sequential thinking tool definition.
//!
//! The one stateful tool: each call submits a single reasoning step, which
//! is validated, committed to the shared session, rendered to the diagnostic
//! log, and acknowledged with a session snapshot. Validation failures come
//! back as error-flagged tool results, never as protocol faults.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use serde_json::{Value, json};
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{json_block, success_result};
use crate::core::config::Config;
use crate::domains::thinking::{
    SequentialThinkingParams, ThinkingSession, ThoughtRecord, formatter,
};

/// Sequential thinking tool - accumulates a branchable reasoning trace.
pub struct SequentialThinkingTool;

impl SequentialThinkingTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "sequential_thinking";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "A tool for dynamic, reflective problem-solving through a growing chain of thoughts. Submit one reasoning step per call; steps can revise earlier ones (isRevision/revisesThought) or branch into alternative lines (branchFromThought/branchId), and totalThoughts can be adjusted up or down as understanding deepens. Each call returns the committed step numbers, the known branch ids, and the history length.";

    /// Execute one submission against the shared session.
    #[instrument(skip_all)]
    pub fn execute(
        arguments: &Value,
        session: &ThinkingSession,
        log_frames: bool,
    ) -> CallToolResult {
        let record = match ThoughtRecord::parse(arguments) {
            Ok(record) => record,
            Err(e) => {
                info!("Rejected thought submission: {}", e);
                return CallToolResult::error(vec![Content::text(json_block(&json!({
                    "error": e.to_string(),
                    "status": "failed",
                })))]);
            }
        };

        // Normalize before rendering so the frame shows the numbers that get
        // stored, not the caller's overshoot.
        let record = record.normalized();
        if log_frames {
            info!(target: "thought_trace", "\n{}", formatter::render_frame(&record));
        }

        let summary = session.commit(record);
        match serde_json::to_value(&summary) {
            Ok(body) => success_result(json_block(&body)),
            Err(e) => CallToolResult::error(vec![Content::text(format!(
                "Failed to serialize response: {}",
                e
            ))]),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        session: Arc<ThinkingSession>,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let result = Self::execute(&arguments, &session, config.thinking.log_frames);

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
            input_schema: cached_schema_for_type::<SequentialThinkingParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    ///
    /// The raw argument map goes straight to the validator rather than
    /// through serde, so bad required fields are answered with the fixed
    /// error envelope instead of an invalid-params fault.
    pub fn create_route<S>(config: Arc<Config>, session: Arc<ThinkingSession>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let session = session.clone();
            let log_frames = config.thinking.log_frames;
            async move { Ok(Self::execute(&Value::Object(args), &session, log_frames)) }.boxed()
        })
    }
}
