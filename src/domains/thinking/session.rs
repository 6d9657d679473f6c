//! In-memory thought history and branch index.
//!
//! The session is the only stateful piece of the server: an append-only log
//! of validated thought records plus a derived index of named branches.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use super::record::ThoughtRecord;

/// Snapshot returned to the caller after each committed thought.
///
/// Field names serialize to the camelCase keys of the tool's success
/// envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtSummary {
    pub thought_number: u32,
    pub total_thoughts: u32,
    pub next_thought_needed: bool,
    pub branches: Vec<String>,
    pub thought_history_length: usize,
}

/// Read-only view of the session: branch ids plus history length, without
/// record contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub branches: Vec<String>,
    pub thought_history_length: usize,
}

/// A named branch, kept as positions into the history log so a branch can
/// never reference a record that is not also in `history`.
#[derive(Debug)]
struct Branch {
    id: String,
    members: Vec<usize>,
}

#[derive(Debug, Default)]
struct SessionState {
    history: Vec<ThoughtRecord>,
    /// First-appearance order; branch counts stay small, linear scans are fine.
    branches: Vec<Branch>,
}

/// One reasoning session.
///
/// Created by the server at construction and shared by every transport
/// connection of that server; dropped with it. All access goes through a
/// mutex so concurrent connections preserve the append-order invariant,
/// even though the expected workload is a single sequential caller.
#[derive(Debug, Default)]
pub struct ThinkingSession {
    state: Mutex<SessionState>,
}

impl ThinkingSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated thought and return the post-append snapshot.
    ///
    /// Physical order is always call order; `thought_number` is advisory
    /// metadata, never a storage key, so duplicate or out-of-order numbers
    /// are stored as-is. Infallible for a validated record.
    pub fn commit(&self, record: ThoughtRecord) -> ThoughtSummary {
        let record = record.normalized();
        let mut state = self.lock();
        let position = state.history.len();

        if let Some((id, _)) = record.branch_ref() {
            match state.branches.iter_mut().find(|b| b.id == id) {
                Some(branch) => branch.members.push(position),
                None => state.branches.push(Branch {
                    id: id.to_string(),
                    members: vec![position],
                }),
            }
        }

        state.history.push(record);

        let entry = &state.history[position];
        ThoughtSummary {
            thought_number: entry.thought_number,
            total_thoughts: entry.total_thoughts,
            next_thought_needed: entry.next_thought_needed,
            branches: state.branches.iter().map(|b| b.id.clone()).collect(),
            thought_history_length: state.history.len(),
        }
    }

    /// Branch ids in first-appearance order plus current history length.
    ///
    /// Does not expose record contents and does not mutate state.
    pub fn summary(&self) -> SessionSummary {
        let state = self.lock();
        SessionSummary {
            branches: state.branches.iter().map(|b| b.id.clone()).collect(),
            thought_history_length: state.history.len(),
        }
    }

    /// Number of records committed so far.
    pub fn history_len(&self) -> usize {
        self.lock().history.len()
    }

    /// Length of a branch sequence, if the branch exists.
    pub fn branch_len(&self, id: &str) -> Option<usize> {
        self.lock()
            .branches
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.members.len())
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // The log is append-only, so state behind a poisoned lock is still
        // consistent; take it back rather than propagate the panic.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::thinking::record::ThoughtRecord;
    use serde_json::json;

    fn record(input: serde_json::Value) -> ThoughtRecord {
        ThoughtRecord::parse(&input).unwrap()
    }

    fn step(n: u32) -> ThoughtRecord {
        record(json!({
            "thought": format!("step{n}"),
            "thoughtNumber": n,
            "totalThoughts": 3,
            "nextThoughtNeeded": true
        }))
    }

    fn branch_step(n: u32, from: u32, id: &str) -> ThoughtRecord {
        record(json!({
            "thought": format!("alt{n}"),
            "thoughtNumber": n,
            "totalThoughts": 3,
            "nextThoughtNeeded": true,
            "branchFromThought": from,
            "branchId": id
        }))
    }

    #[test]
    fn test_commit_grows_history_by_one() {
        let session = ThinkingSession::new();
        for n in 1..=4 {
            let summary = session.commit(step(n));
            assert_eq!(summary.thought_history_length, n as usize);
        }
        assert_eq!(session.history_len(), 4);
    }

    #[test]
    fn test_first_commit_envelope_fields() {
        let session = ThinkingSession::new();
        let summary = session.commit(record(json!({
            "thought": "step1",
            "thoughtNumber": 1,
            "totalThoughts": 3,
            "nextThoughtNeeded": true
        })));
        assert_eq!(
            summary,
            ThoughtSummary {
                thought_number: 1,
                total_thoughts: 3,
                next_thought_needed: true,
                branches: vec![],
                thought_history_length: 1,
            }
        );
    }

    #[test]
    fn test_commit_self_corrects_total_thoughts() {
        let session = ThinkingSession::new();
        session.commit(step(1));
        let summary = session.commit(record(json!({
            "thought": "step2",
            "thoughtNumber": 5,
            "totalThoughts": 3,
            "nextThoughtNeeded": false
        })));
        assert_eq!(summary.thought_number, 5);
        assert_eq!(summary.total_thoughts, 5);
        assert!(!summary.next_thought_needed);
        assert_eq!(summary.thought_history_length, 2);
    }

    #[test]
    fn test_correction_never_touches_earlier_records() {
        let session = ThinkingSession::new();
        let first = session.commit(step(1));
        session.commit(record(json!({
            "thought": "overshoot",
            "thoughtNumber": 9,
            "totalThoughts": 3,
            "nextThoughtNeeded": true
        })));
        // The first summary was taken before the overshoot and stays valid.
        assert_eq!(first.total_thoughts, 3);
        assert_eq!(session.history_len(), 2);
    }

    #[test]
    fn test_branch_registration_and_growth() {
        let session = ThinkingSession::new();
        session.commit(step(1));
        let summary = session.commit(branch_step(2, 1, "b1"));
        assert_eq!(summary.branches, vec!["b1".to_string()]);
        assert_eq!(session.branch_len("b1"), Some(1));

        let summary = session.commit(branch_step(3, 1, "b1"));
        assert_eq!(summary.branches, vec!["b1".to_string()]);
        assert_eq!(session.branch_len("b1"), Some(2));
        assert_eq!(summary.thought_history_length, 3);
    }

    #[test]
    fn test_branch_ids_keep_first_appearance_order() {
        let session = ThinkingSession::new();
        session.commit(branch_step(1, 1, "zeta"));
        session.commit(branch_step(2, 1, "alpha"));
        session.commit(branch_step(3, 1, "zeta"));
        assert_eq!(
            session.summary().branches,
            vec!["zeta".to_string(), "alpha".to_string()]
        );
    }

    #[test]
    fn test_lone_branch_field_registers_nothing() {
        let session = ThinkingSession::new();
        session.commit(record(json!({
            "thought": "no pair",
            "thoughtNumber": 1,
            "totalThoughts": 1,
            "nextThoughtNeeded": false,
            "branchId": "orphan"
        })));
        assert!(session.summary().branches.is_empty());
        assert_eq!(session.branch_len("orphan"), None);
    }

    #[test]
    fn test_duplicate_thought_numbers_are_kept() {
        let session = ThinkingSession::new();
        session.commit(step(3));
        session.commit(step(3));
        assert_eq!(session.history_len(), 2);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let session = ThinkingSession::new();
        session.commit(step(1));
        session.commit(branch_step(2, 1, "b1"));
        let first = session.summary();
        let second = session.summary();
        assert_eq!(first, second);
        assert_eq!(session.history_len(), 2);
    }
}
