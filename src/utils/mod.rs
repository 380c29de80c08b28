//! Shared utilities for the triage core.

pub mod logging;

pub use logging::{log_load_complete, log_load_start, log_warning};
