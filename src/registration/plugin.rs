//! Exposing a package's executable as a tarman plugin
//!
//! The package name becomes the plugin name, so a package called `zip`
//! whose executable extracts zip files makes `.zip` archives installable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::common::fs::{remove_path, replace_symlink};

pub fn add(plugins_dir: &Path, package_name: &str, executable: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(plugins_dir)?;
    let link = plugins_dir.join(package_name);
    replace_symlink(executable, &link)?;
    Ok(link)
}

/// Remove the plugin link for `package_name` if it points into `package_dir`
pub fn remove(plugins_dir: &Path, package_name: &str, package_dir: &Path) -> io::Result<()> {
    let link = plugins_dir.join(package_name);
    match fs::read_link(&link) {
        Ok(target) if target.starts_with(package_dir) => remove_path(&link),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
