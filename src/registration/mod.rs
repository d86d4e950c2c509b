//! Making installed packages reachable from outside the package directory
//!
//! - [`path`]: symlink in the managed bin directory
//! - [`desktop`]: desktop menu entry
//! - [`plugin`]: symlink in the tarman plugin directory
//!
//! These are primitives only. Whether a failure is fatal is decided by the
//! install and remove operations.

pub mod desktop;
pub mod path;
pub mod plugin;

use std::path::{Path, PathBuf};

/// Absolute location of `relative` inside `package_dir`
pub fn package_path(package_dir: &Path, relative: &str) -> PathBuf {
    match relative.trim_start_matches("./") {
        "" | "." => package_dir.to_path_buf(),
        rest => package_dir.join(rest),
    }
}
