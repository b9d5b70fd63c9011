//! Client-side utilities for submitting instructions to the on-chain todo program.
//!
//! Includes the task-list client, transaction submission, cluster configuration and
//! pretty-printing utilities.

pub mod config;
pub mod context;
pub mod e2e_helpers;
pub mod logs;
pub mod pretty;
pub mod transactions;

pub use context::todo_list::TodoClient;
pub use logs::LogColor;
