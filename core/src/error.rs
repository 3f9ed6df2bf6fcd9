//! Error types for the core library

use thiserror::Error;

use crate::task::TaskId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Invalid priority code: {0} (expected 1-High, 2-Medium, 3-Low)")]
    InvalidPriority(i64),
}
