//! Text analyzer tool definition.
//!
//! Stateless statistics over a block of text.

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

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the text analyzer tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TextAnalyzerParams {
    /// The text to analyze.
    pub text: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Text analyzer tool - reports counts and simple shape metrics.
pub struct TextAnalyzerTool;

impl TextAnalyzerTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "text_analyzer";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Analyze a block of text: character counts (with and without whitespace), words, lines, sentences, average word length and the longest word.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(len = params.text.len()))]
    pub fn execute(params: &TextAnalyzerParams) -> CallToolResult {
        let text = &params.text;

        let characters = text.chars().count();
        let characters_no_whitespace = text.chars().filter(|c| !c.is_whitespace()).count();

        let words: Vec<&str> = text.split_whitespace().collect();
        let word_count = words.len();

        let lines = text.lines().count();

        // A sentence is any non-empty run between terminators.
        let sentences = text
            .split(['.', '!', '?'])
            .filter(|part| !part.trim().is_empty())
            .count();

        let stripped = |word: &&str| -> usize {
            word.chars().filter(|c| c.is_alphanumeric()).count()
        };
        let total_word_chars: usize = words.iter().map(stripped).sum();
        let average_word_length = if word_count == 0 {
            0.0
        } else {
            (total_word_chars as f64 / word_count as f64 * 100.0).round() / 100.0
        };

        let longest_word = words
            .iter()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .max_by_key(|w| w.chars().count())
            .unwrap_or("")
            .to_string();

        info!(
            "Analyzed text: {} chars, {} words, {} lines",
            characters, word_count, lines
        );

        success_result(json_block(&json!({
            "characters": characters,
            "charactersNoWhitespace": characters_no_whitespace,
            "words": word_count,
            "lines": lines,
            "sentences": sentences,
            "averageWordLength": average_word_length,
            "longestWord": longest_word,
        })))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let text = arguments
            .get("text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'text' parameter".to_string())?
            .to_string();

        let result = Self::execute(&TextAnalyzerParams { text });

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
            input_schema: cached_schema_for_type::<TextAnalyzerParams>(),
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
                let params: TextAnalyzerParams =
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

    fn analyze(text: &str) -> Value {
        let result = TextAnalyzerTool::execute(&TextAnalyzerParams {
            text: text.to_string(),
        });
        assert!(!result.is_error.unwrap_or(false));
        match &result.content[0].raw {
            RawContent::Text(text) => serde_json::from_str(&text.text).unwrap(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_basic_counts() {
        let stats = analyze("Hello world.\nSecond line here!");
        assert_eq!(stats["words"], json!(5));
        assert_eq!(stats["lines"], json!(2));
        assert_eq!(stats["sentences"], json!(2));
    }

    #[test]
    fn test_character_counts() {
        let stats = analyze("a b c");
        assert_eq!(stats["characters"], json!(5));
        assert_eq!(stats["charactersNoWhitespace"], json!(3));
    }

    #[test]
    fn test_longest_word_ignores_punctuation() {
        let stats = analyze("short, lengthiest! tiny");
        assert_eq!(stats["longestWord"], json!("lengthiest"));
    }

    #[test]
    fn test_average_word_length() {
        // "ab cd" -> 4 alphanumeric chars over 2 words
        let stats = analyze("ab cd");
        assert_eq!(stats["averageWordLength"], json!(2.0));
    }

    #[test]
    fn test_empty_text() {
        let stats = analyze("");
        assert_eq!(stats["words"], json!(0));
        assert_eq!(stats["sentences"], json!(0));
        assert_eq!(stats["averageWordLength"], json!(0.0));
        assert_eq!(stats["longestWord"], json!(""));
    }
}
