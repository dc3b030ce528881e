/// Create/edit form for a task
///
/// Status and priority are form-only. On submit, status collapses onto the
/// server's `completed` flag and priority is dropped.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{NewTask, Task, TaskPatch};

pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn is_completed(self) -> bool {
        self == TaskStatus::Completed
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Field name to message, filled by [`TaskForm::validate`]
    pub errors: BTreeMap<&'static str, String>,
}

impl TaskForm {
    /// Empty form for a new task
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled from an existing task
    pub fn edit(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: if task.completed {
                TaskStatus::Completed
            } else {
                TaskStatus::Pending
            },
            ..Self::default()
        }
    }

    /// Checks the fields, replacing `errors`; true when the form is valid
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.title.trim().is_empty() {
            self.errors.insert("title", "Title is required".to_string());
        } else if self.title.chars().count() > MAX_TITLE_LENGTH {
            self.errors.insert(
                "title",
                format!("Title cannot exceed {} characters", MAX_TITLE_LENGTH),
            );
        }

        if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            self.errors.insert(
                "description",
                format!("Description cannot exceed {} characters", MAX_DESCRIPTION_LENGTH),
            );
        }

        self.errors.is_empty()
    }

    /// Clears a field's error once the user edits it
    pub fn clear_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    /// Create payload, or None if validation fails
    pub fn to_new_task(&mut self) -> Option<NewTask> {
        if !self.validate() {
            return None;
        }
        Some(NewTask {
            title: self.title.clone(),
            description: Some(self.description.clone()).filter(|d| !d.is_empty()),
        })
    }

    /// Update payload carrying every form field, or None if validation fails
    pub fn to_patch(&mut self) -> Option<TaskPatch> {
        if !self.validate() {
            return None;
        }
        Some(TaskPatch {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            completed: Some(self.status.is_completed()),
        })
    }
}
