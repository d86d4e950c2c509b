//! Install operation
//!
//! An install walks a fixed sequence of steps:
//!
//! ```text
//! init -> assemble recipe -> [resolve repository] -> [fetch] -> prepare directory
//!      -> extract -> load package file -> infer -> persist recipe -> register -> purge cache
//! ```
//!
//! Any failure before the package directory is prepared leaves the host
//! untouched. A failure after that removes the half-populated directory.

pub mod infer;
pub mod options;
pub mod overrides;
pub mod register;
pub mod resolve;

use std::fs;
use std::path::{Path, PathBuf};

pub use options::{CliOverrides, InstallRequest, InstallSource};

use crate::archive;
use crate::common::fs::remove_path;
use crate::common::string_utils::is_unset;
use crate::config::{PACKAGE_FILE, PackageInfo, ParseError, RECIPE_FILE, RuntimeRecipe};
use crate::error::{Result, archive as archive_error, fs as fs_error, recipe};
use crate::operations::{Context, Outcome, create_dir, purge_cache, validate_name};
use crate::ui::{self, output};

/// Archive format assumed for downloads that do not name one
pub const DEFAULT_FORMAT: &str = "tar.gz";

/// Archive an install extracts from
struct SourceArchive {
    path: PathBuf,
    /// Downloaded into the cache, to be purged once the install ends
    downloaded: bool,
}

impl SourceArchive {
    fn discard(&self) {
        if self.downloaded {
            purge_cache(&self.path);
        }
    }
}

/// Fill in the archive format of a download, warning when it is guessed
pub(crate) fn default_remote_format(format: &mut Option<String>, warning: &str) {
    if is_unset(format.as_deref()) {
        output::warning(warning);
        *format = Some(DEFAULT_FORMAT.to_string());
    }
}

pub struct InstallOperation<'a> {
    ctx: &'a Context<'a>,
}

impl<'a> InstallOperation<'a> {
    pub fn new(ctx: &'a Context<'a>) -> Self {
        Self { ctx }
    }

    /// Run the install described by `request`.
    ///
    /// Returns [`Outcome::Aborted`] when the user declines a clean reinstall.
    pub fn execute(&self, request: &InstallRequest) -> Result<Outcome> {
        output::progress("Initializing host file system");
        self.ctx.settings.init()?;

        output::progress("Initiating installation process");
        let mut runtime = RuntimeRecipe::default();
        overrides::apply_cli(&mut runtime, &request.overrides);

        let source = self.fetch_source(&mut runtime, &request.source)?;
        let package_name = runtime.package_name.clone().unwrap_or_default();
        let package_dir = self.ctx.settings.package_dir(&package_name);

        let prepared = match self.prepare_directory(&package_dir) {
            Ok(prepared) => prepared,
            Err(e) => {
                source.discard();
                return Err(e);
            }
        };
        if !prepared {
            source.discard();
            return Ok(Outcome::Aborted);
        }

        if let Err(e) = self.populate(&mut runtime, &request.overrides, &source.path, &package_dir) {
            source.discard();
            tracing::debug!("Install failed, removing {}", package_dir.display());
            if remove_path(&package_dir).is_err() {
                output::warning(&format!(
                    "Unable to clean up package directory '{}'",
                    package_dir.display()
                ));
            }
            return Err(e);
        }

        register::register(self.ctx.settings, &package_name, &runtime.recipe, &package_dir);
        source.discard();

        output::success(&format!("Package '{package_name}' installed successfully"));
        Ok(Outcome::Completed)
    }

    /// Resolve the package name and get the archive onto the local disk
    fn fetch_source(&self, runtime: &mut RuntimeRecipe, source: &InstallSource) -> Result<SourceArchive> {
        match source {
            InstallSource::Repository(name) => {
                runtime.is_remote = true;
                overrides::fill_if_unset(&mut runtime.package_name, Some(name.as_str()));
                validate_name(name)?;
                self.ensure_package_name(runtime, source)?;

                resolve::resolve_repository(self.ctx, runtime, name)?;
                let Some(url) = runtime
                    .recipe
                    .info
                    .url
                    .clone()
                    .filter(|url| !url.is_empty())
                else {
                    return Err(recipe::missing_url(name));
                };
                default_remote_format(
                    &mut runtime.recipe.package_format,
                    "Package format not specified in recipe, using 'tar.gz'",
                );
                self.download(runtime, &url)
            }
            InstallSource::Url(url) => {
                default_remote_format(
                    &mut runtime.recipe.package_format,
                    "Package format not specified for remote download, using 'tar.gz'",
                );
                self.ensure_package_name(runtime, source)?;
                runtime.recipe.info.url = Some(url.clone());
                self.download(runtime, url)
            }
            InstallSource::Local(path) => {
                self.ensure_package_name(runtime, source)?;
                let path = dunce::canonicalize(path)
                    .map_err(|e| archive_error::not_found(path.display().to_string(), e.to_string()))?;
                Ok(SourceArchive {
                    path,
                    downloaded: false,
                })
            }
        }
    }

    /// Ask for a package name when none was given, then validate it
    fn ensure_package_name(&self, runtime: &mut RuntimeRecipe, source: &InstallSource) -> Result<()> {
        if is_unset(runtime.package_name.as_deref()) {
            let suggested = source.suggested_name();
            let entered = self
                .ctx
                .prompter
                .text("Enter package name", suggested.as_deref())?;
            runtime.package_name = Some(entered.trim().to_string());
        }

        validate_name(runtime.package_name.as_deref().unwrap_or_default())
    }

    fn download(&self, runtime: &RuntimeRecipe, url: &str) -> Result<SourceArchive> {
        let name = runtime.package_name.as_deref().unwrap_or_default();
        let format = runtime
            .recipe
            .package_format
            .as_deref()
            .unwrap_or(DEFAULT_FORMAT);
        let path = self.ctx.settings.cached_archive(name, format);

        output::progress(&format!(
            "Downloading package from '{url}' to '{}'",
            path.display()
        ));
        ui::with_progress("Downloading", || self.ctx.downloader.download(url, &path))?;

        Ok(SourceArchive {
            path,
            downloaded: true,
        })
    }

    /// Create the package directory, clearing an old install on confirmation.
    ///
    /// Returns `false` when the user declines.
    fn prepare_directory(&self, package_dir: &Path) -> Result<bool> {
        output::progress(&format!("Creating package in '{}'", package_dir.display()));

        if package_dir.exists() {
            if !self
                .ctx
                .prompter
                .confirm("This package is already installed, proceed with clean install?")?
            {
                return Ok(false);
            }

            fs::remove_dir_all(package_dir).map_err(|e| {
                fs_error::remove_dir_failed(
                    package_dir.display().to_string(),
                    e.to_string(),
                    "Remove the old package directory by hand and install again",
                )
            })?;
        }

        create_dir(package_dir)?;
        Ok(true)
    }

    /// Everything between extraction and the persisted recipe
    fn populate(
        &self,
        runtime: &mut RuntimeRecipe,
        cli: &CliOverrides,
        archive_path: &Path,
        package_dir: &Path,
    ) -> Result<()> {
        output::progress(&format!(
            "Extracting archive '{}' to '{}'",
            archive_path.display(),
            package_dir.display()
        ));
        ui::with_progress("Extracting", || {
            archive::extract(
                self.ctx.plugins,
                package_dir,
                archive_path,
                runtime.recipe.package_format.as_deref(),
            )
        })?;

        if !runtime.is_remote {
            load_package_file(runtime, package_dir)?;
        }

        infer::ask_registrations(self.ctx, runtime, cli)?;
        infer::infer_missing(self.ctx, runtime, package_dir)?;

        let recipe_path = package_dir.join(RECIPE_FILE);
        tracing::debug!("Writing {}", recipe_path.display());
        runtime
            .recipe
            .write_file(&recipe_path)
            .map_err(|e| fs_error::write_failed(recipe_path.display().to_string(), e.to_string()))
    }
}

/// Apply the `package.tarman` shipped inside the archive, if any.
///
/// A missing or malformed file only produces a warning.
fn load_package_file(runtime: &mut RuntimeRecipe, package_dir: &Path) -> Result<()> {
    let path = package_dir.join(PACKAGE_FILE);

    match PackageInfo::parse_file(&path) {
        Ok(embedded) => {
            output::progress(&format!(
                "Using package configuration file at '{}'",
                path.display()
            ));
            overrides::apply_package_info(runtime, &embedded);
            Ok(())
        }
        Err(ParseError::NoFile) => {
            output::warning(&format!(
                "Package configuration file '{}' does not exist",
                path.display()
            ));
            Ok(())
        }
        Err(ParseError::Malformed { .. } | ParseError::InvalidValue { .. }) => {
            output::warning(&format!(
                "Ignoring malformed package configuration file at '{}'",
                path.display()
            ));
            Ok(())
        }
        Err(e) => Err(recipe::package_file_unreadable(
            path.display().to_string(),
            e.to_string(),
        )),
    }
}
