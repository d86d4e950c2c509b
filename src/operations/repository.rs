//! Repository operations
//!
//! A repository is a directory of `<pkg>.tarman` recipes under the repos
//! root. Adding one downloads an archive whose top-level directories are the
//! repositories it provides.

use std::fs;
use std::path::Path;

use crate::archive;
use crate::common::fs::{FileKind, list_dir, list_subdirs};
use crate::config::RECIPE_EXTENSION;
use crate::error::{Result, fs as fs_error, repository};
use crate::operations::install::default_remote_format;
use crate::operations::{Context, Outcome, purge_cache, validate_name};
use crate::ui::{self, output};

/// Cache file name (before the format suffix) of a downloaded repository
const DOWNLOADED_REPOSITORY: &str = "__downloaded_repo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub name: String,
    /// Number of recipes the repository offers
    pub recipes: usize,
}

pub struct RepositoryOperation<'a> {
    ctx: &'a Context<'a>,
}

impl<'a> RepositoryOperation<'a> {
    pub fn new(ctx: &'a Context<'a>) -> Self {
        Self { ctx }
    }

    /// Download the repository archive at `url` and extract it into the repos root
    pub fn add(&self, url: &str, format: Option<&str>) -> Result<()> {
        let settings = self.ctx.settings;
        output::progress("Initializing host file system");
        settings.init()?;

        let mut format = format.map(str::to_string);
        default_remote_format(&mut format, "Repository format not specified, using 'tar.gz'");
        let format = format.unwrap_or_default();

        let archive_path = settings.cached_archive(DOWNLOADED_REPOSITORY, &format);
        output::progress(&format!("Fetching repository from '{url}'"));
        ui::with_progress("Downloading", || {
            self.ctx.downloader.download(url, &archive_path)
        })?;

        output::progress("Extracting repository files");
        let extracted = ui::with_progress("Extracting", || {
            archive::extract(self.ctx.plugins, &settings.repos, &archive_path, Some(format.as_str()))
        });
        purge_cache(&archive_path);
        extracted?;

        output::success("Repository added successfully");
        Ok(())
    }

    /// Delete the repository called `name` after confirmation
    pub fn remove(&self, name: &str) -> Result<Outcome> {
        let settings = self.ctx.settings;
        output::progress("Initializing host file system");
        settings.init()?;

        let repository_dir = settings.repository_dir(name);
        if validate_name(name).is_err() || !repository_dir.is_dir() {
            return Err(repository::not_found(name));
        }

        if !self.ctx.prompter.confirm("Proceed with removal?")? {
            return Ok(Outcome::Aborted);
        }

        output::progress(&format!(
            "Removing repository directory '{}'",
            repository_dir.display()
        ));
        fs::remove_dir_all(&repository_dir).map_err(|e| {
            fs_error::remove_dir_failed(
                repository_dir.display().to_string(),
                e.to_string(),
                "Delete the repository directory by hand",
            )
        })?;

        output::success(&format!("Repository '{name}' removed successfully"));
        Ok(Outcome::Completed)
    }

    /// Every local repository with its recipe count, sorted by name
    pub fn list(&self) -> Result<Vec<RepositoryInfo>> {
        let settings = self.ctx.settings;
        settings.init()?;

        let names = list_subdirs(&settings.repos).map_err(|e| {
            repository::unreadable(settings.repos.display().to_string(), e.to_string())
        })?;

        names
            .into_iter()
            .map(|name| {
                let recipes = count_recipes(&settings.repository_dir(&name))?;
                Ok(RepositoryInfo { name, recipes })
            })
            .collect()
    }
}

fn count_recipes(dir: &Path) -> Result<usize> {
    let suffix = format!(".{RECIPE_EXTENSION}");
    let entries = list_dir(dir)
        .map_err(|e| fs_error::open_dir_failed(dir.display().to_string(), e.to_string()))?;

    Ok(entries
        .iter()
        .filter(|entry| matches!(entry.kind, FileKind::Regular | FileKind::Executable))
        .filter(|entry| entry.name.len() > suffix.len() && entry.name.ends_with(&suffix))
        .count())
}
