//! Update operation
//!
//! Re-fetches a package from the URL recorded in its `recipe.tarman`. The
//! fresh archive is extracted into a staging directory under `tmp/` and only
//! swapped in once extraction succeeded, so a failed update leaves the
//! installed package as it was.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::archive;
use crate::common::fs::list_subdirs;
use crate::config::{RECIPE_FILE, Recipe};
use crate::error::{Result, fs as fs_error, package};
use crate::operations::{Context, create_dir, purge_cache, validate_name};
use crate::ui::{self, output};

pub struct UpdateOperation<'a> {
    ctx: &'a Context<'a>,
}

impl<'a> UpdateOperation<'a> {
    pub fn new(ctx: &'a Context<'a>) -> Self {
        Self { ctx }
    }

    /// Update a single installed package
    pub fn execute(&self, package_name: &str) -> Result<()> {
        validate_name(package_name)?;

        output::progress("Initializing host file system");
        self.ctx.settings.init()?;

        self.update_package(package_name)
    }

    /// Update every installed package, carrying on past failures
    pub fn execute_all(&self) -> Result<()> {
        output::progress("Initializing host file system");
        self.ctx.settings.init()?;

        let packages = list_subdirs(&self.ctx.settings.pkgs).map_err(|e| {
            fs_error::open_dir_failed(self.ctx.settings.pkgs.display().to_string(), e.to_string())
        })?;
        if packages.is_empty() {
            output::progress("No packages installed");
            return Ok(());
        }

        let mut failed = 0;
        for name in &packages {
            output::progress(&format!("Updating package '{name}'"));
            if let Err(e) = self.update_package(name) {
                output::error(&format!("{name}: {e}"));
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(package::update_all_failed(failed, packages.len()));
        }
        Ok(())
    }

    fn update_package(&self, package_name: &str) -> Result<()> {
        let settings = self.ctx.settings;
        let package_dir = settings.package_dir(package_name);
        if !package_dir.is_dir() {
            return Err(package::not_installed(package_name));
        }

        let recipe_path = package_dir.join(RECIPE_FILE);
        output::progress(&format!(
            "Using metadata (recipe artifact) file '{}'",
            recipe_path.display()
        ));
        let recipe = Recipe::parse_file(&recipe_path).map_err(|e| {
            package::missing_update_metadata(
                package_name,
                format!("Missing or corrupt metadata (recipe artifact) file: {e}"),
            )
        })?;

        let (Some(url), Some(format)) = (
            recipe.info.url.as_deref().filter(|u| !u.is_empty()),
            recipe.package_format.as_deref().filter(|f| !f.is_empty()),
        ) else {
            return Err(package::missing_update_metadata(
                package_name,
                "Some metadata properties are missing (URL and PACKAGE_FORMAT are required)",
            ));
        };

        let archive_path = settings.cached_archive(package_name, format);
        output::progress(&format!(
            "Downloading package from '{url}' to '{}'",
            archive_path.display()
        ));
        ui::with_progress("Downloading", || {
            self.ctx.downloader.download(url, &archive_path)
        })?;

        let result = self.replace_contents(package_name, &package_dir, &archive_path, format);
        purge_cache(&archive_path);
        result?;

        output::success(&format!("Package '{package_name}' updated successfully"));
        Ok(())
    }

    /// Extract into staging, carry the recipe over, then swap directories
    fn replace_contents(
        &self,
        package_name: &str,
        package_dir: &Path,
        archive_path: &Path,
        format: &str,
    ) -> Result<()> {
        let staging = self.scratch_dir(package_name, "update")?;
        let staged = staging.path().join(package_name);
        create_dir(&staged)?;

        output::progress(&format!(
            "Extracting archive '{}' to '{}'",
            archive_path.display(),
            staged.display()
        ));
        ui::with_progress("Extracting", || {
            archive::extract(self.ctx.plugins, &staged, archive_path, Some(format))
        })?;

        let staged_recipe = staged.join(RECIPE_FILE);
        fs::copy(package_dir.join(RECIPE_FILE), &staged_recipe).map_err(|e| {
            fs_error::write_failed(staged_recipe.display().to_string(), e.to_string())
        })?;

        output::progress(&format!(
            "Replacing package directory '{}'",
            package_dir.display()
        ));
        let backup = self.scratch_dir(package_name, "previous")?;
        let previous = backup.path().join(package_name);
        fs::rename(package_dir, &previous).map_err(|e| {
            fs_error::write_failed(package_dir.display().to_string(), e.to_string())
        })?;

        if let Err(e) = fs::rename(&staged, package_dir) {
            tracing::debug!("Swap failed, restoring {}", package_dir.display());
            if fs::rename(&previous, package_dir).is_err() {
                return Err(fs_error::write_failed(
                    package_dir.display().to_string(),
                    format!(
                        "{e}. The previous version was left in '{}'",
                        backup.keep().display()
                    ),
                ));
            }
            return Err(fs_error::write_failed(
                package_dir.display().to_string(),
                e.to_string(),
            ));
        }

        Ok(())
    }

    fn scratch_dir(&self, package_name: &str, purpose: &str) -> Result<TempDir> {
        let tmp = &self.ctx.settings.tmp;
        tempfile::Builder::new()
            .prefix(&format!("{package_name}-{purpose}-"))
            .tempdir_in(tmp)
            .map_err(|e| fs_error::create_dir_failed(tmp.display().to_string(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TarmanError;
    use crate::settings::Settings;
    use crate::test_fixtures::{
        FakeDownloader, FakePlugins, ScriptedPrompter, create_settings, create_temp_dir,
        make_package_archive,
    };

    const URL: &str = "https://example.com/foo.tar.gz";

    fn installed(settings: &Settings, name: &str, recipe: &str) {
        let dir = settings.package_dir(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("old.txt"), "old").unwrap();
        fs::write(dir.join(RECIPE_FILE), recipe).unwrap();
    }

    fn operation<'a>(ctx: &'a Context<'a>) -> UpdateOperation<'a> {
        UpdateOperation::new(ctx)
    }

    #[test]
    fn test_update_replaces_contents_and_keeps_recipe() {
        let (_temp, settings) = create_settings();
        let recipe = format!("URL={URL}\nPACKAGE_FORMAT=tar.gz\nADD_TO_PATH=false\n");
        installed(&settings, "foo", &recipe);

        let work = create_temp_dir();
        let archive = make_package_archive(work.path(), "foo", &[("README", "new")]);
        let downloader = FakeDownloader::new().serve(URL, &archive);
        let (prompter, plugins) = (ScriptedPrompter::silent(), FakePlugins::with(&[]));
        let ctx = Context::new(&settings, &prompter, &downloader, &plugins);

        operation(&ctx).execute("foo").unwrap();

        let dir = settings.package_dir("foo");
        assert!(dir.join("README").is_file());
        assert!(!dir.join("old.txt").exists());
        assert_eq!(fs::read_to_string(dir.join(RECIPE_FILE)).unwrap(), recipe);
        assert!(!settings.cached_archive("foo", "tar.gz").exists());
        assert_eq!(fs::read_dir(&settings.tmp).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_format_fails_fast() {
        let (_temp, settings) = create_settings();
        installed(&settings, "foo", &format!("URL={URL}\n"));

        let downloader = FakeDownloader::new();
        let (prompter, plugins) = (ScriptedPrompter::silent(), FakePlugins::with(&[]));
        let ctx = Context::new(&settings, &prompter, &downloader, &plugins);

        let err = operation(&ctx).execute("foo").unwrap_err();
        assert!(matches!(err, TarmanError::MissingUpdateMetadata { .. }));
        assert!(downloader.calls().is_empty());
        assert!(settings.package_dir("foo").join("old.txt").is_file());
    }

    #[test]
    fn test_missing_recipe_fails_fast() {
        let (_temp, settings) = create_settings();
        fs::create_dir_all(settings.package_dir("foo")).unwrap();

        let downloader = FakeDownloader::new();
        let (prompter, plugins) = (ScriptedPrompter::silent(), FakePlugins::with(&[]));
        let ctx = Context::new(&settings, &prompter, &downloader, &plugins);

        let err = operation(&ctx).execute("foo").unwrap_err();
        assert!(matches!(err, TarmanError::MissingUpdateMetadata { .. }));
    }

    #[test]
    fn test_failed_extraction_keeps_installed_package() {
        let (_temp, settings) = create_settings();
        installed(
            &settings,
            "foo",
            &format!("URL={URL}\nPACKAGE_FORMAT=zip\n"),
        );

        let work = create_temp_dir();
        let archive = work.path().join("foo.zip");
        fs::write(&archive, "zip bytes").unwrap();
        let downloader = FakeDownloader::new().serve(URL, &archive);
        let (prompter, plugins) = (ScriptedPrompter::silent(), FakePlugins::with(&[]));
        let ctx = Context::new(&settings, &prompter, &downloader, &plugins);

        let err = operation(&ctx).execute("foo").unwrap_err();
        assert!(matches!(err, TarmanError::ExtractionFailed { .. }));
        assert!(settings.package_dir("foo").join("old.txt").is_file());
        assert!(!settings.cached_archive("foo", "zip").exists());
    }

    #[test]
    fn test_update_unknown_package() {
        let (_temp, settings) = create_settings();
        let downloader = FakeDownloader::new();
        let (prompter, plugins) = (ScriptedPrompter::silent(), FakePlugins::with(&[]));
        let ctx = Context::new(&settings, &prompter, &downloader, &plugins);

        let err = operation(&ctx).execute("foo").unwrap_err();
        assert!(matches!(err, TarmanError::PackageNotInstalled { .. }));
    }

    #[test]
    fn test_update_all_continues_past_failures() {
        let (_temp, settings) = create_settings();
        installed(&settings, "broken", "ADD_TO_PATH=false\n");
        installed(
            &settings,
            "foo",
            &format!("URL={URL}\nPACKAGE_FORMAT=tar.gz\n"),
        );

        let work = create_temp_dir();
        let archive = make_package_archive(work.path(), "foo", &[("README", "new")]);
        let downloader = FakeDownloader::new().serve(URL, &archive);
        let (prompter, plugins) = (ScriptedPrompter::silent(), FakePlugins::with(&[]));
        let ctx = Context::new(&settings, &prompter, &downloader, &plugins);

        let err = operation(&ctx).execute_all().unwrap_err();
        assert!(matches!(
            err,
            TarmanError::UpdateAllFailed {
                failed: 1,
                total: 2
            }
        ));
        assert!(settings.package_dir("foo").join("README").is_file());
        assert!(settings.package_dir("broken").join("old.txt").is_file());
    }

    #[test]
    fn test_update_all_with_nothing_installed() {
        let (_temp, settings) = create_settings();
        let downloader = FakeDownloader::new();
        let (prompter, plugins) = (ScriptedPrompter::silent(), FakePlugins::with(&[]));
        let ctx = Context::new(&settings, &prompter, &downloader, &plugins);

        operation(&ctx).execute_all().unwrap();
    }
}
