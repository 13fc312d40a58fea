//! Task Collection Helpers
//!
//! Plain functions for patching the in-memory task cache after a
//! confirmed server response, plus the per-id in-flight guard that
//! keeps overlapping mutations for one task from racing.

use crate::models::Task;

/// Swap in the server's echoed task by id; no-op if the id is gone
pub fn replace_task(tasks: &mut Vec<Task>, updated: Task) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == updated.id) {
        *task = updated;
    }
}

/// Drop a task by id after the server confirmed the delete
pub fn remove_task(tasks: &mut Vec<Task>, id: &str) {
    tasks.retain(|task| task.id != id);
}

/// Flip which task shows its description. At most one task is
/// expanded; expanding one collapses whichever other was open.
pub fn toggle_expanded(expanded: &mut Option<String>, id: &str) {
    if expanded.as_deref() == Some(id) {
        *expanded = None;
    } else {
        *expanded = Some(id.to_string());
    }
}

/// Mark a task id as having a mutation in flight. Returns false (and
/// leaves the set untouched) if one is already outstanding for it.
pub fn begin_mutation(pending: &mut Vec<String>, id: &str) -> bool {
    if pending.iter().any(|p| p == id) {
        return false;
    }
    pending.push(id.to_string());
    true
}

/// Clear the in-flight mark once the call resolves, success or not
pub fn end_mutation(pending: &mut Vec<String>, id: &str) {
    pending.retain(|p| p != id);
}
