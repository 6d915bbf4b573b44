//! Application layer containing the core aggregation logic.
//!
//! This module defines the shared [`state::ReportState`], the two
//! per-(branch, product) work units in [`tasks`], and the
//! [`engine::ReportEngine`] that wires up completion counters and submits
//! the tasks to the runtime's worker pool.

pub mod engine;
pub mod state;
pub mod tasks;
