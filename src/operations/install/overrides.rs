//! Configuration layering for installs
//!
//! Three sources are applied in priority order, each as a fill-if-unset pass:
//!
//! 1. command-line values ([`apply_cli`])
//! 2. the recipe offered by the selected repository ([`apply_repository_recipe`])
//! 3. the `package.tarman` embedded in the extracted archive ([`apply_package_info`])
//!
//! A field set by an earlier pass is never overwritten by a later one. `None`
//! and `Some("")` both count as unset.

use crate::common::string_utils::is_unset;
use crate::config::{PackageInfo, Recipe, RuntimeRecipe};

use super::options::CliOverrides;

/// Copy `source` into `target` when `target` is unset and `source` is not
pub fn fill_if_unset(target: &mut Option<String>, source: Option<&str>) {
    if is_unset(target.as_deref()) && !is_unset(source) {
        *target = source.map(str::to_string);
    }
}

fn fill_info(target: &mut PackageInfo, source: &PackageInfo) {
    fill_if_unset(&mut target.url, source.url.as_deref());
    fill_if_unset(&mut target.application_name, source.application_name.as_deref());
    fill_if_unset(&mut target.executable_path, source.executable_path.as_deref());
    fill_if_unset(&mut target.working_directory, source.working_directory.as_deref());
    fill_if_unset(&mut target.icon_path, source.icon_path.as_deref());
}

/// Pass 1: command-line values
pub fn apply_cli(runtime: &mut RuntimeRecipe, cli: &CliOverrides) {
    let recipe = &mut runtime.recipe;

    fill_if_unset(&mut runtime.package_name, cli.package_name.as_deref());
    fill_if_unset(&mut recipe.package_format, cli.package_format.as_deref());
    fill_if_unset(&mut recipe.info.application_name, cli.application_name.as_deref());
    fill_if_unset(&mut recipe.info.executable_path, cli.executable_path.as_deref());
    fill_if_unset(&mut recipe.info.working_directory, cli.working_directory.as_deref());
    fill_if_unset(&mut recipe.info.icon_path, cli.icon_path.as_deref());

    recipe.add_to_path |= cli.add_to_path;
    recipe.add_to_desktop |= cli.add_to_desktop;
    recipe.add_to_tarman |= cli.add_to_tarman;
}

/// Pass 2: repository recipe.
///
/// Registration flags requested by the recipe are added to those requested
/// on the command line; a recipe cannot turn a flag off.
pub fn apply_repository_recipe(runtime: &mut RuntimeRecipe, offered: &Recipe) {
    let recipe = &mut runtime.recipe;

    fill_info(&mut recipe.info, &offered.info);
    fill_if_unset(&mut recipe.package_format, offered.package_format.as_deref());

    recipe.add_to_path |= offered.add_to_path;
    recipe.add_to_desktop |= offered.add_to_desktop;
    recipe.add_to_tarman |= offered.add_to_tarman;
}

/// Pass 3: package file embedded in the archive
pub fn apply_package_info(runtime: &mut RuntimeRecipe, embedded: &PackageInfo) {
    fill_info(&mut runtime.recipe.info, embedded);
}
