//! Runtime module
//!
//! Provides the task handle used by the GitHub fetch operations.

pub mod async_task;

pub use async_task::AsyncTask;
