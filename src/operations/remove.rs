//! Remove operation
//!
//! Reverses the registrations recorded in the package's `recipe.tarman`,
//! then deletes the package directory.

use std::fs;
use std::path::Path;

use crate::common::string_utils::capitalize_word;
use crate::config::{RECIPE_FILE, Recipe};
use crate::error::{Result, fs as fs_error, package};
use crate::operations::{Context, Outcome, validate_name};
use crate::registration;
use crate::ui::output;

const REMOVE_FAILED_HELP: &str = "The package may now be fully or partially removed. You can attempt \
manual removal of the package by deleting the package directory and all PATH or Desktop \
references that may exist";

pub struct RemoveOperation<'a> {
    ctx: &'a Context<'a>,
}

impl<'a> RemoveOperation<'a> {
    pub fn new(ctx: &'a Context<'a>) -> Self {
        Self { ctx }
    }

    pub fn execute(&self, package_name: &str) -> Result<Outcome> {
        validate_name(package_name)?;

        output::progress("Initializing host file system");
        self.ctx.settings.init()?;

        let package_dir = self.ctx.settings.package_dir(package_name);
        if !package_dir.is_dir() {
            return Err(package::not_installed(package_name));
        }

        if !self.ctx.prompter.confirm("Proceed with removal?")? {
            return Ok(Outcome::Aborted);
        }

        match Recipe::parse_file(&package_dir.join(RECIPE_FILE)) {
            Ok(recipe) => self.deregister(package_name, &recipe, &package_dir),
            Err(e) => {
                tracing::debug!("No usable recipe artifact for {package_name}: {e}");
                output::warning(
                    "Removing package without metadata (recipe artifact), some files may persist",
                );
            }
        }

        output::progress(&format!(
            "Removing package directory '{}'",
            package_dir.display()
        ));
        fs::remove_dir_all(&package_dir).map_err(|e| {
            fs_error::remove_dir_failed(
                package_dir.display().to_string(),
                e.to_string(),
                REMOVE_FAILED_HELP,
            )
        })?;

        output::success(&format!("Package '{package_name}' removed successfully"));
        Ok(Outcome::Completed)
    }

    /// Undo every registration the recipe records, warning on failures
    fn deregister(&self, package_name: &str, recipe: &Recipe, package_dir: &Path) {
        let settings = self.ctx.settings;
        let executable = recipe
            .info
            .executable_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|relative| registration::package_path(package_dir, relative));

        if recipe.add_to_path {
            output::progress("Removing executable from PATH");
            let removed = executable
                .as_deref()
                .is_some_and(|exec| registration::path::remove(&settings.bin_dir, exec).is_ok());
            if !removed {
                output::warning("Could not remove executable from PATH");
            }
        }

        if recipe.add_to_desktop {
            output::progress("Removing app from system applications");
            let app_name = match recipe.info.application_name.as_deref() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => capitalize_word(package_name),
            };
            if let Err(e) = registration::desktop::remove(&settings.applications_dir, &app_name) {
                tracing::debug!("Failed to remove desktop entry {app_name}: {e}");
                output::warning("Could not remove app from system applications");
            }
        }

        if recipe.add_to_tarman {
            output::progress("Removing tarman plugin");
            if let Err(e) = registration::plugin::remove(&settings.plugins, package_name, package_dir) {
                tracing::debug!("Failed to remove plugin {package_name}: {e}");
                output::warning("Could not remove tarman plugin");
            }
        }
    }
}
