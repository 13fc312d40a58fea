//! Derived Task Views
//!
//! Pure filter/search/sort pipeline over the task collection.
//! Recomputed from the full collection on every render; nothing here
//! caches or indexes.

use chrono::NaiveDate;

use crate::models::{FilterCriteria, SortCriteria, Task};

/// Combined status-filter and search predicate
pub fn matches(task: &Task, filter: FilterCriteria, query: &str) -> bool {
    let matches_filter = match filter {
        FilterCriteria::All => true,
        FilterCriteria::Completed => task.completed,
        FilterCriteria::Pending => !task.completed,
    };
    let query = query.to_lowercase();
    let matches_search = query.is_empty()
        || task.title.to_lowercase().contains(&query)
        || task.description.to_lowercase().contains(&query);
    matches_filter && matches_search
}

/// Unparseable deadlines sort after every real date
fn deadline_key(task: &Task) -> NaiveDate {
    NaiveDate::parse_from_str(&task.deadline, "%Y-%m-%d").unwrap_or(NaiveDate::MAX)
}

/// The rendered list: filtered, searched, then stably sorted
pub fn visible_tasks(
    tasks: &[Task],
    filter: FilterCriteria,
    query: &str,
    sort: SortCriteria,
) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| matches(task, filter, query))
        .cloned()
        .collect();
    match sort {
        SortCriteria::Deadline => visible.sort_by_key(deadline_key),
        SortCriteria::Alphabetical => {
            visible.sort_by_key(|task| task.title.to_lowercase());
        }
        SortCriteria::Status => visible.sort_by_key(|task| task.completed),
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, title: &str, description: &str, deadline: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            deadline: deadline.to_string(),
            completed,
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            make_task("1", "Buy milk", "from the corner shop", "2099-01-05", false),
            make_task("2", "Answer mail", "Inbox Description backlog", "2099-01-02", true),
            make_task("3", "call dentist", "", "2099-01-02", false),
            make_task("4", "Water plants", "balcony only", "2099-01-10", true),
        ]
    }

    #[test]
    fn test_filter_by_status() {
        let tasks = sample_tasks();
        let pending = visible_tasks(&tasks, FilterCriteria::Pending, "", SortCriteria::Deadline);
        assert!(pending.iter().all(|t| !t.completed));
        assert_eq!(pending.len(), 2);

        let completed =
            visible_tasks(&tasks, FilterCriteria::Completed, "", SortCriteria::Deadline);
        assert!(completed.iter().all(|t| t.completed));
        assert_eq!(completed.len(), 2);

        let all = visible_tasks(&tasks, FilterCriteria::All, "", SortCriteria::Deadline);
        assert_eq!(all.len(), tasks.len());
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let tasks = sample_tasks();
        // "desc" matches task 2 through its description, not its title
        let hits = visible_tasks(&tasks, FilterCriteria::All, "desc", SortCriteria::Deadline);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        let hits = visible_tasks(&tasks, FilterCriteria::All, "DENTIST", SortCriteria::Deadline);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }

    #[test]
    fn test_filter_and_search_compose() {
        let tasks = sample_tasks();
        // "a" matches tasks 2, 3, 4 by title; pending keeps only 3
        let hits = visible_tasks(&tasks, FilterCriteria::Pending, "a", SortCriteria::Deadline);
        assert_eq!(
            hits.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["3"]
        );
    }

    #[test]
    fn test_sort_by_deadline_ascending() {
        let tasks = sample_tasks();
        let sorted = visible_tasks(&tasks, FilterCriteria::All, "", SortCriteria::Deadline);
        assert_eq!(
            sorted.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["2", "3", "1", "4"]
        );
    }

    #[test]
    fn test_sort_by_deadline_is_stable_on_ties() {
        let tasks = sample_tasks();
        let sorted = visible_tasks(&tasks, FilterCriteria::All, "", SortCriteria::Deadline);
        // Tasks 2 and 3 share a deadline and keep collection order
        assert_eq!(sorted[0].id, "2");
        assert_eq!(sorted[1].id, "3");
    }

    #[test]
    fn test_sort_alphabetical_ignores_case() {
        let tasks = sample_tasks();
        let sorted = visible_tasks(&tasks, FilterCriteria::All, "", SortCriteria::Alphabetical);
        assert_eq!(
            sorted.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
            vec!["Answer mail", "Buy milk", "call dentist", "Water plants"]
        );
    }

    #[test]
    fn test_sort_by_status_puts_pending_first() {
        let tasks = sample_tasks();
        let sorted = visible_tasks(&tasks, FilterCriteria::All, "", SortCriteria::Status);
        assert_eq!(
            sorted.iter().map(|t| t.completed).collect::<Vec<_>>(),
            vec![false, false, true, true]
        );
        // Stable within each status bucket
        assert_eq!(sorted[0].id, "1");
        assert_eq!(sorted[1].id, "3");
        assert_eq!(sorted[2].id, "2");
        assert_eq!(sorted[3].id, "4");
    }

    #[test]
    fn test_unparseable_deadline_sorts_last() {
        let mut tasks = sample_tasks();
        tasks.push(make_task("5", "No date yet", "", "", false));
        let sorted = visible_tasks(&tasks, FilterCriteria::All, "", SortCriteria::Deadline);
        assert_eq!(sorted.last().unwrap().id, "5");
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let tasks = sample_tasks();
        let once = visible_tasks(&tasks, FilterCriteria::Pending, "a", SortCriteria::Status);
        let twice = visible_tasks(&once, FilterCriteria::Pending, "a", SortCriteria::Status);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_query_change_never_reorders_surviving_matches() {
        let tasks = sample_tasks();
        let broad = visible_tasks(&tasks, FilterCriteria::All, "", SortCriteria::Deadline);
        let narrow = visible_tasks(&tasks, FilterCriteria::All, "a", SortCriteria::Deadline);
        // The narrowed list is the broad list with non-matches removed
        let broad_ids: Vec<&str> = broad
            .iter()
            .filter(|t| narrow.iter().any(|n| n.id == t.id))
            .map(|t| t.id.as_str())
            .collect();
        let narrow_ids: Vec<&str> = narrow.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(broad_ids, narrow_ids);
    }
}
