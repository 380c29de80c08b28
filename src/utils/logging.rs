//! Logging utilities
//!
//! This module provides standardized logging functions for startup loads.

use std::path::Path;

/// Log a load operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file or directory being loaded
pub fn log_load_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log a load operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file or directory that was loaded
/// * `items` - Number of items loaded
pub fn log_load_complete(operation: &str, path: &Path, items: usize) {
    log::info!(
        "Successfully {} {} items from {}",
        operation,
        items,
        path.display()
    );
}

/// Log a warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
