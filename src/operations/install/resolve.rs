//! Resolving a bare package name through local repositories

use crate::common::fs::list_subdirs;
use crate::config::{ParseError, Recipe, RuntimeRecipe};
use crate::error::{Result, TarmanError, recipe, repository};
use crate::operations::Context;
use crate::settings::Settings;
use crate::ui::output;
use crate::ui::prompt::{self, Selection};

use super::overrides;

/// Repositories offering a recipe for `package_name`, sorted by name
pub fn find_repositories(settings: &Settings, package_name: &str) -> Result<Vec<String>> {
    let repositories = list_subdirs(&settings.repos).map_err(|e| {
        repository::unreadable(settings.repos.display().to_string(), e.to_string())
    })?;

    Ok(repositories
        .into_iter()
        .filter(|repo| settings.repository_recipe(repo, package_name).is_file())
        .collect())
}

/// Select the repository for `package_name` and apply its recipe.
///
/// Returns the name of the selected repository.
pub fn resolve_repository(
    ctx: &Context<'_>,
    runtime: &mut RuntimeRecipe,
    package_name: &str,
) -> Result<String> {
    let mut matches = find_repositories(ctx.settings, package_name)?;
    if matches.is_empty() {
        return Err(repository::package_not_found(package_name));
    }

    let message =
        format!("Multiple repositories found for package '{package_name}', choose between");
    let index = match prompt::choose(ctx.prompter, &message, &matches, None, false)? {
        Selection::Option(index) if index < matches.len() => index,
        _ => {
            return Err(TarmanError::InferenceFailed {
                what: "repository".to_string(),
                reason: "no repository was selected".to_string(),
            });
        }
    };
    let selected = matches.swap_remove(index);
    tracing::debug!("Resolved '{package_name}' through repository '{selected}'");

    let path = ctx.settings.repository_recipe(&selected, package_name);
    let offered = Recipe::parse_file(&path).map_err(|e| match e {
        ParseError::Malformed { .. } | ParseError::InvalidValue { .. } => {
            recipe::malformed(package_name, &selected, e.to_string())
        }
        _ => recipe::read_failed(path.display().to_string(), e.to_string()),
    })?;
    output::progress(&format!("Using recipe file '{}'", path.display()));

    runtime.recipe.info.from_repository = Some(selected.clone());
    overrides::apply_repository_recipe(runtime, &offered);
    Ok(selected)
}
