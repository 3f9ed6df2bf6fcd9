//! Task repository trait
//!
//! Defines the interface for task storage operations.

use super::model::{Task, TaskId, TaskPriority};
use crate::Result;

/// Status filter for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.is_completed(),
            Self::Completed => task.is_completed(),
        }
    }

    /// Message shown when a listing with this filter comes back empty
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::All => "No tasks available.",
            Self::Pending => "No pending tasks.",
            Self::Completed => "No completed tasks.",
        }
    }
}

/// Repository interface for task operations
pub trait TaskRepository {
    /// Create a task and return its newly assigned ID
    fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> TaskId;

    /// Get a task by ID
    fn get(&self, id: TaskId) -> Option<&Task>;

    /// Mark a task completed. Completing twice is not an error.
    fn complete(&mut self, id: TaskId) -> Result<()>;

    /// Remove a task, returning it
    fn delete(&mut self, id: TaskId) -> Result<Task>;

    /// Tasks matching the filter, in creation order
    fn list(&self, filter: TaskFilter) -> Vec<&Task>;

    fn list_all(&self) -> Vec<&Task> {
        self.list(TaskFilter::All)
    }

    fn list_pending(&self) -> Vec<&Task> {
        self.list(TaskFilter::Pending)
    }

    fn list_completed(&self) -> Vec<&Task> {
        self.list(TaskFilter::Completed)
    }
}
