//! Thinking-domain error types.

use thiserror::Error;

/// A required field of a thought submission was missing or mistyped.
///
/// The display strings are part of the tool's wire contract — callers match
/// on them to repair and resubmit — so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `thought` was missing, not a string, or empty.
    #[error("Invalid thought: must be a string")]
    Thought,

    /// `thoughtNumber` was missing or not numeric.
    #[error("Invalid thoughtNumber: must be a number")]
    ThoughtNumber,

    /// `totalThoughts` was missing or not numeric.
    #[error("Invalid totalThoughts: must be a number")]
    TotalThoughts,

    /// `nextThoughtNeeded` was missing or not a boolean.
    #[error("Invalid nextThoughtNeeded: must be a boolean")]
    NextThoughtNeeded,
}
