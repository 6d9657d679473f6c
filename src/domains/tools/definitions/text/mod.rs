//! Text tools.

mod analyzer;

pub use analyzer::{TextAnalyzerParams, TextAnalyzerTool};
