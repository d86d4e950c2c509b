//! Filling in registration details that no configuration layer provided

use std::path::Path;

use crate::common::fs::{find_executables, list_subdirs};
use crate::common::string_utils::{capitalize_word, is_unset};
use crate::config::RuntimeRecipe;
use crate::error::{Result, package};
use crate::operations::Context;
use crate::ui::output;
use crate::ui::prompt::{self, Selection};

use super::options::CliOverrides;

/// Ask about every registration the user has not already requested.
///
/// Skipped for repository installs, where the recipe decides.
pub fn ask_registrations(ctx: &Context<'_>, runtime: &mut RuntimeRecipe, cli: &CliOverrides) -> Result<()> {
    if runtime.is_remote {
        return Ok(());
    }

    let recipe = &mut runtime.recipe;
    if !recipe.add_to_path && !cli.add_to_path {
        recipe.add_to_path = ctx
            .prompter
            .ask("Do you want to add this package to PATH?", false)?;
    }
    if !recipe.add_to_desktop && !cli.add_to_desktop {
        recipe.add_to_desktop = ctx
            .prompter
            .ask("Do you want to add this package as an app?", false)?;
    }
    if !recipe.add_to_tarman && !cli.add_to_tarman {
        recipe.add_to_tarman = ctx
            .prompter
            .ask("Do you want to add this package as a tarman plugin?", false)?;
    }
    Ok(())
}

/// Infer whatever the requested registrations still need
pub fn infer_missing(ctx: &Context<'_>, runtime: &mut RuntimeRecipe, package_dir: &Path) -> Result<()> {
    let recipe = &runtime.recipe;
    let needs_executable = recipe.add_to_path || recipe.add_to_desktop || recipe.add_to_tarman;

    if needs_executable && is_unset(recipe.info.executable_path.as_deref()) {
        let executable = infer_executable(ctx, package_dir)?;
        runtime.recipe.info.executable_path = Some(executable);
    }

    if runtime.recipe.add_to_desktop {
        if is_unset(runtime.recipe.info.application_name.as_deref()) {
            let package_name = runtime.package_name.as_deref().unwrap_or_default();
            let name = infer_application_name(ctx, package_name, package_dir)?;
            runtime.recipe.info.application_name = Some(name);
        }

        if is_unset(runtime.recipe.info.working_directory.as_deref()) {
            if let Some(executable) = runtime.recipe.info.executable_path.as_deref() {
                output::progress("Inferring working directory");
                runtime.recipe.info.working_directory = Some(parent_directory(executable));
            }
        }
    }

    Ok(())
}

/// Pick the executable among the files in `package_dir`
fn infer_executable(ctx: &Context<'_>, package_dir: &Path) -> Result<String> {
    output::progress("Inferring executable path");

    let candidates: Vec<String> = find_executables(package_dir)
        .map_err(|e| {
            package::inference_failed(
                "executable path",
                format!("unable to visit package directory '{}': {e}", package_dir.display()),
            )
        })?
        .iter()
        .filter_map(|path| path.to_str().map(str::to_string))
        .collect();

    let selection = match candidates.len() {
        0 => Selection::Custom,
        1 => Selection::Option(0),
        _ => ctx
            .prompter
            .choose("Choose the executable", &candidates, None, true)?,
    };

    match selection {
        Selection::Option(index) => Ok(candidates[index].clone()),
        Selection::Custom => {
            let entered = ctx
                .prompter
                .text("Enter executable path (relative to the package root)", None)?;
            if entered.trim().is_empty() {
                return Err(package::inference_failed(
                    "executable path",
                    "no executable was given",
                ));
            }
            Ok(entered.trim().to_string())
        }
    }
}

/// Offer the capitalized package name and the top-level directories
fn infer_application_name(ctx: &Context<'_>, package_name: &str, package_dir: &Path) -> Result<String> {
    output::progress("Inferring application name");

    let default_name = capitalize_word(package_name);
    let mut candidates = vec![default_name.clone()];
    let subdirs = list_subdirs(package_dir).map_err(|e| {
        package::inference_failed(
            "application name",
            format!("unable to visit package directory '{}': {e}", package_dir.display()),
        )
    })?;
    candidates.extend(subdirs.into_iter().filter(|name| *name != default_name));

    match prompt::choose(ctx.prompter, "Choose an application name", &candidates, Some(0), true)? {
        Selection::Option(index) => Ok(candidates[index].clone()),
        Selection::Custom => {
            let entered = ctx
                .prompter
                .text("Enter application name", Some(&default_name))?;
            Ok(entered.trim().to_string())
        }
    }
}

/// Parent of a relative executable path, `.` for the package root
pub(crate) fn parent_directory(executable: &str) -> String {
    match Path::new(executable).parent().and_then(Path::to_str) {
        Some(parent) if !parent.is_empty() => parent.to_string(),
        _ => ".".to_string(),
    }
}
