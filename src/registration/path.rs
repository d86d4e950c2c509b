//! PATH registration through symlinks in the managed bin directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::common::fs::{remove_path, replace_symlink};

fn link_path(bin_dir: &Path, executable: &Path) -> io::Result<PathBuf> {
    let name = executable.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' has no file name", executable.display()),
        )
    })?;
    Ok(bin_dir.join(name))
}

/// Link `executable` (absolute) into `bin_dir` under its file name
pub fn add(bin_dir: &Path, executable: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(bin_dir)?;
    let link = link_path(bin_dir, executable)?;
    replace_symlink(executable, &link)?;
    Ok(link)
}

/// Remove the link created by [`add`], if it still points at `executable`
pub fn remove(bin_dir: &Path, executable: &Path) -> io::Result<()> {
    let link = link_path(bin_dir, executable)?;
    match fs::read_link(&link) {
        Ok(target) if target == executable => remove_path(&link),
        Ok(_) => Err(io::Error::other(format!(
            "'{}' points somewhere else and was left in place",
            link.display()
        ))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
