//! Targeted checkbox updates inside the implementation plan.

use super::parser::{classify_line, is_plan_heading, PlanLine};

const PENDING_BOX: &str = "- [ ]";
const COMPLETED_BOX: &str = "- [x]";

/// Ticks the checkbox of the pending task whose bold ID is `task_id`.
///
/// Only the first matching line inside the `## Implementation Plan`
/// section changes; every other byte of `body` is preserved. Returns
/// `None` when no pending task line carries that ID.
#[must_use]
pub fn mark_task_completed(body: &str, task_id: &str) -> Option<String> {
    let mut capturing = false;
    let mut offset = 0;

    for line in body.split_inclusive('\n') {
        match classify_line(line) {
            PlanLine::SectionHeading(heading) => capturing = is_plan_heading(heading),
            PlanLine::Task(task) if capturing && !task.completed && task.id == task_id => {
                let box_at = offset + line.find(PENDING_BOX)?;
                let mut updated = String::with_capacity(body.len());
                updated.push_str(&body[..box_at]);
                updated.push_str(COMPLETED_BOX);
                updated.push_str(&body[box_at + PENDING_BOX.len()..]);
                return Some(updated);
            }
            _ => {}
        }
        offset += line.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::parser::parse_plan;
    use crate::spec::TaskStatus;

    const BODY: &str = "\
## Implementation Plan

#### API Layer (2 tasks)

- [ ] **API-001**: Define routes [Estimate: 2h]
- [ ] **API-002**: Validate payloads [Estimate: 1h]

## Timeline
";

    #[test]
    fn toggles_only_the_identified_task() {
        let updated = mark_task_completed(BODY, "API-002").unwrap();
        let before = parse_plan(BODY);
        let after = parse_plan(&updated);

        let old = &before[0].tasks[1];
        let new = &after[0].tasks[1];
        assert_eq!(new.status, TaskStatus::Completed);
        assert_eq!(new.id, old.id);
        assert_eq!(new.description, old.description);
        assert_eq!(new.estimate, old.estimate);
        assert_eq!(after[0].tasks[0].status, TaskStatus::Pending);
        assert_eq!(updated.len(), BODY.len());
    }

    #[test]
    fn unknown_or_completed_task_returns_none() {
        assert!(mark_task_completed(BODY, "API-999").is_none());
        let once = mark_task_completed(BODY, "API-001").unwrap();
        assert!(mark_task_completed(&once, "API-001").is_none());
    }

    #[test]
    fn id_prefixes_do_not_match() {
        let body = "## Implementation Plan\n#### A (2)\n- [ ] **A-10**: ten\n- [ ] **A-1**: one\n";
        let updated = mark_task_completed(body, "A-1").unwrap();
        assert!(updated.contains("- [ ] **A-10**"));
        assert!(updated.contains("- [x] **A-1**:"));
    }

    #[test]
    fn lines_outside_the_plan_are_untouched() {
        let body = "## Notes\n- [ ] **A-1**: note\n\
                    ## Implementation Plan\n#### A (1)\n- [ ] **A-1**: real\n";
        let updated = mark_task_completed(body, "A-1").unwrap();
        assert!(updated.starts_with("## Notes\n- [ ] **A-1**: note"));
        assert!(updated.ends_with("- [x] **A-1**: real\n"));
    }
}
