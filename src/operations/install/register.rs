//! Best-effort registration of a freshly installed package
//!
//! Nothing here fails the install: every problem becomes a warning and the
//! package stays installed.

use std::path::Path;

use crate::common::string_utils::{capitalize_word, is_unset};
use crate::config::Recipe;
use crate::registration::{self, desktop::DesktopEntry};
use crate::settings::Settings;
use crate::ui::output;

/// Whether `dir` is one of the entries of `$PATH`
fn on_search_path(dir: &Path) -> bool {
    std::env::var_os("PATH")
        .is_some_and(|paths| std::env::split_paths(&paths).any(|entry| entry == dir))
}

/// Apply every registration `recipe` asks for
pub fn register(settings: &Settings, package_name: &str, recipe: &Recipe, package_dir: &Path) {
    if !(recipe.add_to_path || recipe.add_to_desktop || recipe.add_to_tarman) {
        return;
    }

    let Some(relative) = recipe.info.executable_path.as_deref().filter(|p| !p.is_empty()) else {
        output::warning("No executable path is known, skipping registration");
        return;
    };
    let executable = registration::package_path(package_dir, relative);
    if !executable.is_file() {
        output::warning(&format!(
            "Executable '{}' does not exist",
            executable.display()
        ));
    }

    if recipe.add_to_path {
        output::progress("Adding executable to PATH");
        match registration::path::add(&settings.bin_dir, &executable) {
            Ok(link) => {
                tracing::debug!("Linked {} to {}", link.display(), executable.display());
                if !on_search_path(&settings.bin_dir) {
                    output::warning(&format!(
                        "'{}' is not in your PATH",
                        settings.bin_dir.display()
                    ));
                }
            }
            Err(e) => output::warning(&format!("Could not add executable to PATH: {e}")),
        }
    }

    if recipe.add_to_desktop {
        add_desktop_entry(settings, package_name, recipe, package_dir, &executable);
    }

    if recipe.add_to_tarman {
        output::progress("Adding package as a tarman plugin");
        if let Err(e) = registration::plugin::add(&settings.plugins, package_name, &executable) {
            output::warning(&format!("Could not add package as a tarman plugin: {e}"));
        }
    }
}

fn add_desktop_entry(
    settings: &Settings,
    package_name: &str,
    recipe: &Recipe,
    package_dir: &Path,
    executable: &Path,
) {
    output::progress("Adding app to system applications");

    let name = match recipe.info.application_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => capitalize_word(package_name),
    };

    let icon = if is_unset(recipe.info.icon_path.as_deref()) {
        output::warning("No icon path given, the app will use the default icon");
        None
    } else {
        recipe
            .info
            .icon_path
            .as_deref()
            .map(|icon| registration::package_path(package_dir, icon))
    };

    let working_directory = if is_unset(recipe.info.working_directory.as_deref()) {
        output::warning("No working directory given for the app");
        None
    } else {
        recipe
            .info
            .working_directory
            .as_deref()
            .map(|dir| registration::package_path(package_dir, dir))
    };

    let entry = DesktopEntry {
        name: &name,
        executable,
        icon: icon.as_deref(),
        working_directory: working_directory.as_deref(),
    };
    if let Err(e) = registration::desktop::add(&settings.applications_dir, &entry) {
        output::warning(&format!("Could not add app to system applications: {e}"));
    }
}
