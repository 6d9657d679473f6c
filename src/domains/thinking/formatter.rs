//! Framed diagnostic rendering for thought records.

use super::record::ThoughtRecord;

/// Render a record as a framed text block for the diagnostic log.
///
/// Label precedence: revision, then branch, then plain thought. The frame is
/// sized to the wider of the header and the thought text. Output goes to the
/// log sink only and is never parsed back.
pub fn render_frame(record: &ThoughtRecord) -> String {
    let (label, context) = if record.is_revision.unwrap_or(false) {
        let context = match record.revises_thought {
            Some(n) => format!(" (revising thought {n})"),
            None => String::new(),
        };
        ("Revision", context)
    } else if let Some(from) = record.branch_from_thought {
        let context = match record.branch_id.as_deref() {
            Some(id) => format!(" (from thought {from}, ID: {id})"),
            None => format!(" (from thought {from})"),
        };
        ("Branch", context)
    } else {
        ("Thought", String::new())
    };

    let header = format!(
        "{} {}/{}{}",
        label, record.thought_number, record.total_thoughts, context
    );
    let width = header.chars().count().max(record.thought.chars().count()) + 4;
    let border = "─".repeat(width);

    format!(
        "┌{border}┐\n│ {header:<pad$} │\n├{border}┤\n│ {thought:<pad$} │\n└{border}┘",
        thought = record.thought,
        pad = width - 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::thinking::record::ThoughtRecord;
    use serde_json::json;

    fn record(input: serde_json::Value) -> ThoughtRecord {
        ThoughtRecord::parse(&input).unwrap()
    }

    #[test]
    fn test_plain_thought_header() {
        let frame = render_frame(&record(json!({
            "thought": "weigh the options",
            "thoughtNumber": 1,
            "totalThoughts": 3,
            "nextThoughtNeeded": true
        })));
        assert!(frame.contains("Thought 1/3"));
        assert!(frame.contains("weigh the options"));
        assert!(!frame.contains("Revision"));
        assert!(!frame.contains("Branch"));
    }

    #[test]
    fn test_revision_header_wins_over_branch() {
        let frame = render_frame(&record(json!({
            "thought": "correcting step 2",
            "thoughtNumber": 3,
            "totalThoughts": 4,
            "nextThoughtNeeded": true,
            "isRevision": true,
            "revisesThought": 2,
            "branchFromThought": 1,
            "branchId": "alt"
        })));
        assert!(frame.contains("Revision 3/4 (revising thought 2)"));
        assert!(!frame.contains("Branch"));
    }

    #[test]
    fn test_branch_header() {
        let frame = render_frame(&record(json!({
            "thought": "what if we cache",
            "thoughtNumber": 2,
            "totalThoughts": 3,
            "nextThoughtNeeded": true,
            "branchFromThought": 1,
            "branchId": "cache"
        })));
        assert!(frame.contains("Branch 2/3 (from thought 1, ID: cache)"));
    }

    #[test]
    fn test_frame_width_tracks_longest_line() {
        let frame = render_frame(&record(json!({
            "thought": "a thought that is clearly longer than its header",
            "thoughtNumber": 1,
            "totalThoughts": 1,
            "nextThoughtNeeded": false
        })));
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines.len(), 5);
        let expected = "a thought that is clearly longer than its header"
            .chars()
            .count()
            + 4;
        // top border: corner + width dashes + corner
        assert_eq!(lines[0].chars().count(), expected + 2);
        // every row of the box is the same width
        for line in &lines {
            assert_eq!(line.chars().count(), expected + 2);
        }
    }

    #[test]
    fn test_frame_width_tracks_header_when_longer() {
        let frame = render_frame(&record(json!({
            "thought": "ok",
            "thoughtNumber": 10,
            "totalThoughts": 12,
            "nextThoughtNeeded": true,
            "branchFromThought": 4,
            "branchId": "deep-dive"
        })));
        let header_len = "Branch 10/12 (from thought 4, ID: deep-dive)"
            .chars()
            .count();
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines[0].chars().count(), header_len + 4 + 2);
    }
}
