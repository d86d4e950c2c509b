//! Recipe (`<pkg>.tarman`, `recipe.tarman`) model and codec
//!
//! A recipe is package information plus the archive format and the
//! registration flags. It is what repositories offer per package and what
//! gets persisted inside every installed package directory.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::package::{self, PackageInfo};
use super::parser::{self, ParseError, Translation};

pub const KEY_PACKAGE_FORMAT: &str = "PACKAGE_FORMAT";
pub const KEY_ADD_TO_PATH: &str = "ADD_TO_PATH";
pub const KEY_ADD_TO_DESKTOP: &str = "ADD_TO_DESKTOP";
pub const KEY_ADD_TO_TARMAN: &str = "ADD_TO_TARMAN";

/// Name of the recipe artifact stored at the root of each package directory
pub const RECIPE_FILE: &str = "recipe.tarman";

/// Extension of recipe files offered by repositories
pub const RECIPE_EXTENSION: &str = "tarman";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    pub info: PackageInfo,
    pub package_format: Option<String>,
    pub add_to_path: bool,
    pub add_to_desktop: bool,
    pub add_to_tarman: bool,
}

impl Recipe {
    /// Parse a recipe from a reader
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut recipe = Self::default();
        parser::parse(reader, &mut recipe, translate)?;
        Ok(recipe)
    }

    /// Parse a recipe from disk
    pub fn parse_file(path: &Path) -> Result<Self, ParseError> {
        let mut recipe = Self::default();
        parser::parse_file(path, &mut recipe, translate)?;
        Ok(recipe)
    }

    /// Serialize as `KEY=VALUE` lines.
    ///
    /// Every set field is written, followed by all three flags whether or not
    /// they were ever set. Values containing a line break cannot be
    /// represented and are rejected.
    pub fn dump<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let mut entries = self.info.entries();
        if let Some(format) = self.package_format.as_deref() {
            entries.push((KEY_PACKAGE_FORMAT, format));
        }

        for (key, value) in entries {
            if value.contains(['\n', '\r']) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("value for {key} contains a line break"),
                ));
            }
            writeln!(writer, "{key}={value}")?;
        }

        writeln!(writer, "{KEY_ADD_TO_PATH}={}", self.add_to_path)?;
        writeln!(writer, "{KEY_ADD_TO_DESKTOP}={}", self.add_to_desktop)?;
        writeln!(writer, "{KEY_ADD_TO_TARMAN}={}", self.add_to_tarman)?;
        Ok(())
    }

    /// Serialize into a string
    pub fn to_config_string(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.dump(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Serialize to `path`, replacing any previous contents
    pub fn write_file(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_config_string()?)
    }
}

/// Recipe being assembled during an install or update.
///
/// Never persisted as such: only the inner [`Recipe`] is written out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeRecipe {
    pub recipe: Recipe,
    /// Local install directory name
    pub package_name: Option<String>,
    /// Resolved through a repository rather than a local path or direct URL
    pub is_remote: bool,
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Translator for the recipe key vocabulary
fn translate(key: &str, value: &str, recipe: &mut Recipe) -> Translation {
    match package::translate(key, value, &mut recipe.info) {
        Translation::UnknownKey => {}
        other => return other,
    }

    let flag = match key {
        KEY_PACKAGE_FORMAT => {
            recipe.package_format = Some(value.to_string());
            return Translation::Accepted;
        }
        KEY_ADD_TO_PATH => &mut recipe.add_to_path,
        KEY_ADD_TO_DESKTOP => &mut recipe.add_to_desktop,
        KEY_ADD_TO_TARMAN => &mut recipe.add_to_tarman,
        _ => return Translation::UnknownKey,
    };

    match parse_flag(value) {
        Some(parsed) => {
            *flag = parsed;
            Translation::Accepted
        }
        None => Translation::InvalidValue,
    }
}
