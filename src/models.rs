//! Frontend Models
//!
//! Data structures matching the task service's JSON payloads.

use serde::{Deserialize, Serialize};

/// Task data structure (matches the service's wire shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub completed: bool,
}

/// Unsaved task fields, used by both the new-task and edit forms.
/// Serializes to exactly the three fields the service accepts on
/// create, and that the edit-save path sends on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub deadline: String,
}

/// Sort order for the rendered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriteria {
    #[default]
    Deadline,
    Alphabetical,
    Status,
}

impl SortCriteria {
    pub fn as_str(self) -> &'static str {
        match self {
            SortCriteria::Deadline => "deadline",
            SortCriteria::Alphabetical => "alphabetical",
            SortCriteria::Status => "status",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to the default.
    pub fn parse(value: &str) -> Self {
        match value {
            "alphabetical" => SortCriteria::Alphabetical,
            "status" => SortCriteria::Status,
            _ => SortCriteria::Deadline,
        }
    }
}

/// Status filter for the rendered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterCriteria {
    #[default]
    All,
    Completed,
    Pending,
}

impl FilterCriteria {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterCriteria::All => "all",
            FilterCriteria::Completed => "completed",
            FilterCriteria::Pending => "pending",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "completed" => FilterCriteria::Completed,
            "pending" => FilterCriteria::Pending,
            _ => FilterCriteria::All,
        }
    }
}
