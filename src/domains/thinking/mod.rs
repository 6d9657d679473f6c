//! Sequential-thinking domain: the stateful reasoning session.
//!
//! This is the one bounded context with real state. A session accumulates an
//! ordered, branchable history of reasoning steps submitted one tool call at
//! a time:
//!
//! - `record` - thought data model and strict argument parsing
//! - `session` - append-only history plus branch index
//! - `formatter` - framed diagnostic rendering
//! - `error` - validation failures
//!
//! The session itself is pure state; the tool layer in
//! `domains/tools/definitions/think` owns the diagnostic logging side
//! effect.

mod error;
pub mod formatter;
mod record;
mod session;

pub use error::ValidationError;
pub use record::{SequentialThinkingParams, ThoughtRecord};
pub use session::{SessionSummary, ThinkingSession, ThoughtSummary};
