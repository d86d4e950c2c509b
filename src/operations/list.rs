//! List operation
//!
//! Enumerates installed packages and lays them out for the terminal.

use std::path::PathBuf;

use crate::common::fs::list_subdirs;
use crate::common::string_utils::truncate_left;
use crate::error::{Result, fs as fs_error};
use crate::settings::Settings;

/// Prefix of every table row
const ROW_PREFIX: &str = " --- ";
/// Gap between the name and path columns
const COLUMN_GAP: usize = 8;
/// Narrowest path column worth drawing a table for
const MIN_PATH_WIDTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    pub name: String,
    pub path: PathBuf,
}

pub struct ListOperation<'a> {
    settings: &'a Settings,
}

impl<'a> ListOperation<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Every package directory under the package root, sorted by name
    pub fn execute(&self) -> Result<Vec<InstalledPackage>> {
        self.settings.init()?;

        let names = list_subdirs(&self.settings.pkgs).map_err(|e| {
            fs_error::open_dir_failed(self.settings.pkgs.display().to_string(), e.to_string())
        })?;

        Ok(names
            .into_iter()
            .map(|name| InstalledPackage {
                path: self.settings.package_dir(&name),
                name,
            })
            .collect())
    }
}

/// Format `packages` for a terminal `width` columns wide.
///
/// Wide terminals get a `name  path` table with long paths cut from the
/// left. Narrow ones get the names alone.
pub fn render(packages: &[InstalledPackage], width: usize) -> Vec<String> {
    let name_width = packages
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);
    let fixed = ROW_PREFIX.len() + name_width + COLUMN_GAP + 1;

    if width < fixed + MIN_PATH_WIDTH {
        return packages.iter().map(|p| p.name.clone()).collect();
    }

    let path_width = width - fixed;
    packages
        .iter()
        .map(|p| {
            let path = truncate_left(&p.path.display().to_string(), path_width);
            format!(
                "{ROW_PREFIX}{:<name_width$}{:gap$}{path}",
                p.name,
                "",
                gap = COLUMN_GAP
            )
        })
        .collect()
}
