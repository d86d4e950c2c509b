//! Archive extraction dispatch
//!
//! An archive is handled either by a plugin named after its format or by a
//! built-in handler. Resolution is deterministic:
//!
//! 1. An explicit format short-circuits everything else: plugin of that
//!    name, then a built-in handler with exactly that name.
//! 2. Otherwise each dot-delimited suffix of the file name is tried as a
//!    plugin name, longest first (`foo.tar.gz` tries `tar.gz`, then `gz`).
//! 3. Otherwise the built-in table is matched against the file name tail.

pub mod plugin;

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::Result;
use crate::error::archive::extraction_failed;

pub use plugin::{PluginDirectory, PluginHost};

/// Built-in extraction routines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Tar,
}

/// Known formats handled without a plugin
const BUILTIN_FORMATS: &[(&str, Builtin)] = &[
    ("tar", Builtin::Tar),
    ("tar.gz", Builtin::Tar),
    ("tar.xz", Builtin::Tar),
];

/// Strategy chosen for one archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    Plugin(String),
    Builtin(Builtin),
}

/// Candidate format suffixes of `file_name`, longest first.
///
/// A suffix must start with an alphanumeric character, which skips the
/// empty tail of `name.` and the leading dot of hidden files.
pub fn format_suffixes(file_name: &str) -> Vec<&str> {
    file_name
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .map(|(index, _)| &file_name[index + 1..])
        .filter(|suffix| suffix.starts_with(|c: char| c.is_ascii_alphanumeric()))
        .collect()
}

fn builtin_named(format: &str) -> Option<Builtin> {
    BUILTIN_FORMATS
        .iter()
        .find(|(name, _)| *name == format)
        .map(|&(_, builtin)| builtin)
}

fn builtin_for_file(file_name: &str) -> Option<Builtin> {
    BUILTIN_FORMATS
        .iter()
        .find(|(name, _)| file_name.ends_with(&format!(".{name}")))
        .map(|&(_, builtin)| builtin)
}

/// Pick the handler for `archive`, or `None` when nothing can extract it
pub fn resolve(plugins: &dyn PluginHost, archive: &Path, format: Option<&str>) -> Option<Handler> {
    if let Some(format) = format.filter(|f| !f.is_empty()) {
        if plugins.exists(format) {
            return Some(Handler::Plugin(format.to_string()));
        }
        return builtin_named(format).map(Handler::Builtin);
    }

    let file_name = archive.file_name()?.to_str()?;

    if let Some(suffix) = format_suffixes(file_name)
        .into_iter()
        .find(|suffix| plugins.exists(suffix))
    {
        return Some(Handler::Plugin(suffix.to_string()));
    }

    builtin_for_file(file_name).map(Handler::Builtin)
}

/// Extract `archive` into `destination`
pub fn extract(
    plugins: &dyn PluginHost,
    destination: &Path,
    archive: &Path,
    format: Option<&str>,
) -> Result<()> {
    let archive_display = archive.display().to_string();

    let Some(handler) = resolve(plugins, archive, format) else {
        return Err(extraction_failed(
            archive_display,
            "no plugin or built-in handler for this archive type",
        ));
    };
    tracing::debug!("Extracting {archive_display} with {handler:?}");

    let succeeded = match &handler {
        Handler::Plugin(name) => plugins
            .run(name, archive.as_os_str(), destination.as_os_str())
            .map_err(|e| extraction_failed(&archive_display, e.to_string()))?,
        Handler::Builtin(Builtin::Tar) => extract_tar(destination, archive)
            .map_err(|e| extraction_failed(&archive_display, e.to_string()))?,
    };

    if succeeded {
        Ok(())
    } else {
        Err(extraction_failed(
            archive_display,
            format!("{handler:?} exited with a failure status"),
        ))
    }
}

fn extract_tar(destination: &Path, archive: &Path) -> std::io::Result<bool> {
    let status = Command::new("tar")
        .arg("-xf")
        .arg(archive)
        .arg("-C")
        .arg(destination)
        .stdin(Stdio::null())
        .status()?;
    Ok(status.success())
}
