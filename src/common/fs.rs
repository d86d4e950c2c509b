//! Common file system operations with unified error handling

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Coarse type of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Dir,
    Regular,
    Executable,
    Unknown,
}

/// One entry of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: FileKind,
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    false
}

/// Classify `path`, following symlinks
pub fn file_kind(path: &Path) -> FileKind {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => FileKind::Dir,
        Ok(metadata) if metadata.is_file() && is_executable(&metadata) => FileKind::Executable,
        Ok(metadata) if metadata.is_file() => FileKind::Regular,
        _ => FileKind::Unknown,
    }
}

/// Whether `path` is an executable regular file
pub fn is_executable_file(path: &Path) -> bool {
    file_kind(path) == FileKind::Executable
}

/// List the immediate children of `dir`, sorted by name.
///
/// Entries whose names are not valid UTF-8 are skipped.
pub fn list_dir(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        let kind = file_kind(&entry.path());
        entries.push(DirEntry { name, kind });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Names of the immediate subdirectories of `dir`, sorted
pub fn list_subdirs(dir: &Path) -> io::Result<Vec<String>> {
    Ok(list_dir(dir)?
        .into_iter()
        .filter(|entry| entry.kind == FileKind::Dir)
        .map(|entry| entry.name)
        .collect())
}

/// Every executable file below `root`, as paths relative to `root`, sorted.
///
/// Symlinks are not followed so a package cannot point the scan outside
/// its own directory.
pub fn find_executables(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(io::Error::other)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let metadata = entry.metadata().map_err(io::Error::other)?;
        if !is_executable(&metadata) {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(root) {
            found.push(relative.to_path_buf());
        }
    }

    Ok(found)
}

/// Remove `path` whether it is a file, a symlink or a directory tree.
///
/// A missing path is not an error.
pub fn remove_path(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Create a symlink at `link` pointing to `target`, replacing an existing link
#[cfg(unix)]
pub fn replace_symlink(target: &Path, link: &Path) -> io::Result<()> {
    if let Ok(metadata) = fs::symlink_metadata(link) {
        if metadata.file_type().is_symlink() {
            fs::remove_file(link)?;
        }
    }
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(unix))]
pub fn replace_symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are only supported on unix hosts",
    ))
}
