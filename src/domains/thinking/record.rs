//! Thought record data model and strict argument parsing.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ValidationError;

/// Parameters accepted by the sequential thinking tool.
///
/// This struct exists for schema generation. Incoming arguments are parsed
/// with [`ThoughtRecord::parse`] instead of serde so that required-field
/// violations are reported one at a time, in a fixed order, with stable
/// messages.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SequentialThinkingParams {
    /// The current reasoning step.
    pub thought: String,

    /// Position of this step as claimed by the caller (starts at 1).
    pub thought_number: u32,

    /// Caller's current estimate of how many steps are needed in total.
    pub total_thoughts: u32,

    /// Whether another step will be submitted after this one.
    pub next_thought_needed: bool,

    /// Marks this step as amending an earlier one.
    #[serde(default)]
    pub is_revision: Option<bool>,

    /// Number of the step being amended; meaningful with `isRevision`.
    #[serde(default)]
    pub revises_thought: Option<u32>,

    /// Number of the step this step diverges from.
    #[serde(default)]
    pub branch_from_thought: Option<u32>,

    /// Name of the branch this step belongs to.
    #[serde(default)]
    pub branch_id: Option<String>,

    /// Hint that the original `totalThoughts` estimate was too low.
    #[serde(default)]
    pub needs_more_thoughts: Option<bool>,
}

/// One validated reasoning step, as stored in the session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtRecord {
    pub thought: String,
    pub thought_number: u32,
    pub total_thoughts: u32,
    pub next_thought_needed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_revision: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub revises_thought: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_from_thought: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_more_thoughts: Option<bool>,

    /// Server-side capture time; not part of the response envelope.
    pub recorded_at: DateTime<Utc>,
}

impl ThoughtRecord {
    /// Parse an untyped argument object into a validated record.
    ///
    /// Required fields are checked in a fixed precedence: `thought`, then
    /// `thoughtNumber`, then `totalThoughts`, then `nextThoughtNeeded`; the
    /// first violation wins. Optional fields pass through without range
    /// checks, and a wrong-typed optional is treated as absent.
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let thought = match input.get("thought").and_then(Value::as_str) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => return Err(ValidationError::Thought),
        };

        let thought_number = match Self::number_field(input, "thoughtNumber") {
            Some(n) => n,
            None => return Err(ValidationError::ThoughtNumber),
        };

        let total_thoughts = match Self::number_field(input, "totalThoughts") {
            Some(n) => n,
            None => return Err(ValidationError::TotalThoughts),
        };

        let next_thought_needed = match input.get("nextThoughtNeeded").and_then(Value::as_bool) {
            Some(flag) => flag,
            None => return Err(ValidationError::NextThoughtNeeded),
        };

        Ok(Self {
            thought,
            thought_number,
            total_thoughts,
            next_thought_needed,
            is_revision: input.get("isRevision").and_then(Value::as_bool),
            revises_thought: Self::number_field(input, "revisesThought"),
            branch_from_thought: Self::number_field(input, "branchFromThought"),
            branch_id: input
                .get("branchId")
                .and_then(Value::as_str)
                .map(str::to_string),
            needs_more_thoughts: input.get("needsMoreThoughts").and_then(Value::as_bool),
            recorded_at: Utc::now(),
        })
    }

    /// Raise `total_thoughts` to match an overshooting `thought_number`.
    ///
    /// The correction applies to this record only, never to records already
    /// in the history.
    pub fn normalized(mut self) -> Self {
        if self.thought_number > self.total_thoughts {
            self.total_thoughts = self.thought_number;
        }
        self
    }

    /// Branch reference, present only when both halves were supplied.
    pub fn branch_ref(&self) -> Option<(&str, u32)> {
        match (self.branch_id.as_deref(), self.branch_from_thought) {
            (Some(id), Some(from)) => Some((id, from)),
            _ => None,
        }
    }

    fn number_field(input: &Value, key: &str) -> Option<u32> {
        input
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    }
}
