//! Operations on packages and repositories
//!
//! This module provides the high-level workflows behind each command:
//! - [`install`]: fetch, extract, configure, register and persist a package
//! - [`remove`]: deregister and delete a package
//! - [`update`]: re-fetch a package from its recorded URL
//! - [`repository`]: add, remove and list local repositories
//! - [`list`]: enumerate installed packages
//!
//! Operations are the only layer that decides whether a failure is fatal or
//! just a warning.

pub mod context;
pub mod install;
pub mod list;
pub mod remove;
pub mod repository;
pub mod update;

use std::fs;
use std::path::Path;

use crate::error::{Result, fs as fs_error, package};
use crate::ui::output;

pub use context::Context;

/// How an operation that did not fail ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user declined a confirmation
    Aborted,
}

/// Reject names that could escape the directory they are joined onto
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return Err(package::invalid_name(name));
    }
    Ok(())
}

/// Delete a downloaded archive, warning when it cannot be removed
pub(crate) fn purge_cache(archive: &Path) {
    output::progress(&format!("Removing cache '{}'", archive.display()));
    if let Err(e) = fs::remove_file(archive) {
        tracing::debug!("Failed to remove {}: {e}", archive.display());
        output::warning("Unable to delete cache");
    }
}

/// Create `dir` and any missing parents
pub(crate) fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| fs_error::create_dir_failed(dir.display().to_string(), e.to_string()))
}
