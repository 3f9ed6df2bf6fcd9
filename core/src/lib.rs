//! Core library for the task tracker
//!
//! This crate contains the task-store logic:
//! - Task model and priority codes
//! - The repository interface
//! - The in-memory store

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
