//! Backend test support utilities
//!
//! Shared helpers for the backend's integration tests: one-time logging
//! initialization and assertions over the problem-details error contract.

pub mod problem_details;
pub mod test_logging;
