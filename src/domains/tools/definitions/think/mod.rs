//! Sequential thinking tool.

mod sequential;

pub use sequential::SequentialThinkingTool;
