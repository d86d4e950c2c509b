//! Package information (`package.tarman`) model and codec
//!
//! A package file is embedded at the root of an archive and describes where
//! the software lives inside it. Every key accepts any string value.

use std::io::BufRead;
use std::path::Path;

use super::parser::{self, ParseError, Translation};

pub const KEY_URL: &str = "URL";
pub const KEY_FROM_REPOSITORY: &str = "FROM_REPOSITORY";
pub const KEY_APPLICATION_NAME: &str = "APPLICATION_NAME";
pub const KEY_EXECUTABLE_PATH: &str = "EXECUTABLE_PATH";
pub const KEY_WORKING_DIRECTORY: &str = "WORKING_DIRECTORY";
pub const KEY_ICON_PATH: &str = "ICON_PATH";

/// Name of the package file embedded in archives
pub const PACKAGE_FILE: &str = "package.tarman";

/// Metadata describing one installable artifact.
///
/// All paths are relative to the package root. `None` and `Some("")` are both
/// treated as unset when layering configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
    pub url: Option<String>,
    /// Filled in when resolving through a repository; never written back
    pub from_repository: Option<String>,
    pub application_name: Option<String>,
    pub executable_path: Option<String>,
    pub working_directory: Option<String>,
    pub icon_path: Option<String>,
}

impl PackageInfo {
    /// Parse a package file from a reader
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut info = Self::default();
        parser::parse(reader, &mut info, translate)?;
        Ok(info)
    }

    /// Parse a package file from disk
    pub fn parse_file(path: &Path) -> Result<Self, ParseError> {
        let mut info = Self::default();
        parser::parse_file(path, &mut info, translate)?;
        Ok(info)
    }

    /// Persisted `(key, value)` pairs for every set field, in canonical order.
    ///
    /// `FROM_REPOSITORY` is runtime-only and never emitted.
    pub(crate) fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            (KEY_URL, &self.url),
            (KEY_APPLICATION_NAME, &self.application_name),
            (KEY_EXECUTABLE_PATH, &self.executable_path),
            (KEY_WORKING_DIRECTORY, &self.working_directory),
            (KEY_ICON_PATH, &self.icon_path),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

/// Translator for the package key vocabulary
pub(crate) fn translate(key: &str, value: &str, info: &mut PackageInfo) -> Translation {
    let target = match key {
        KEY_URL => &mut info.url,
        KEY_FROM_REPOSITORY => &mut info.from_repository,
        KEY_APPLICATION_NAME => &mut info.application_name,
        KEY_EXECUTABLE_PATH => &mut info.executable_path,
        KEY_WORKING_DIRECTORY => &mut info.working_directory,
        KEY_ICON_PATH => &mut info.icon_path,
        _ => return Translation::UnknownKey,
    };

    *target = Some(value.to_string());
    Translation::Accepted
}
