//! Error types and handling for tarman
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`package`]: Installed package errors
//! - [`recipe`]: Recipe and package file errors
//! - [`repository`]: Local repository errors
//! - [`archive`]: Download and extraction errors
//! - [`fs`]: File system errors

pub mod archive;
pub mod fs;
pub mod package;
pub mod recipe;
pub mod repository;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tarman operations
#[derive(Error, Diagnostic, Debug)]
pub enum TarmanError {
    // Host file system
    #[error("Failed to initialize host file system at '{path}': {reason}")]
    #[diagnostic(
        code(tarman::home::init_failed),
        help("Check that your home directory is writable, or point TARMAN_HOME somewhere else")
    )]
    HomeInitFailed { path: String, reason: String },

    #[error("Could not determine the user's home directory")]
    #[diagnostic(
        code(tarman::home::unknown),
        help("Set TARMAN_HOME to the directory tarman should use")
    )]
    HomeUnknown,

    // Package errors
    #[error("The package '{name}' is not installed on this system, at least not as a tarman package")]
    #[diagnostic(
        code(tarman::package::not_installed),
        help("Try with other package managers you may have on your system")
    )]
    PackageNotInstalled { name: String },

    #[error("Invalid package name: '{name}'")]
    #[diagnostic(
        code(tarman::package::invalid_name),
        help("Package names must be non-empty and cannot contain path separators")
    )]
    InvalidPackageName { name: String },

    #[error("Missing {what}")]
    #[diagnostic(code(tarman::package::missing_input), help("{usage}"))]
    MissingInput { what: String, usage: String },

    #[error("Cannot update package '{name}': {reason}")]
    #[diagnostic(
        code(tarman::package::missing_metadata),
        help("Reinstall the package with 'tarman install' so that its URL and format are recorded")
    )]
    MissingUpdateMetadata { name: String, reason: String },

    #[error("{failed} of {total} packages could not be updated")]
    #[diagnostic(
        code(tarman::package::update_all_failed),
        help("See the errors above for the packages that failed")
    )]
    UpdateAllFailed { failed: usize, total: usize },

    #[error("Unable to infer {what}: {reason}")]
    #[diagnostic(code(tarman::package::inference_failed))]
    InferenceFailed { what: String, reason: String },

    // Recipe errors
    #[error("Recipe file for package '{name}' in repository '{repository}' is malformed: {reason}")]
    #[diagnostic(code(tarman::recipe::malformed))]
    RecipeMalformed {
        name: String,
        repository: String,
        reason: String,
    },

    #[error("Unable to read recipe file '{path}': {reason}")]
    #[diagnostic(code(tarman::recipe::read_failed))]
    RecipeReadFailed { path: String, reason: String },

    #[error("Package URL not found in recipe for '{name}'")]
    #[diagnostic(
        code(tarman::recipe::missing_url),
        help("The repository recipe must define URL=<archive url>")
    )]
    RecipeMissingUrl { name: String },

    #[error("Unable to read contents of package configuration file at '{path}': {reason}")]
    #[diagnostic(code(tarman::recipe::package_file_unreadable))]
    PackageFileUnreadable { path: String, reason: String },

    // Repository errors
    #[error("Package '{name}' not found in local repositories")]
    #[diagnostic(
        code(tarman::repository::package_not_found),
        help("Add a repository offering it with 'tarman add-repo <url>'")
    )]
    PackageNotInRepositories { name: String },

    #[error("The repository '{name}' is not present on this system")]
    #[diagnostic(
        code(tarman::repository::not_found),
        help("Run 'tarman list-repos' to see the local repositories")
    )]
    RepositoryNotFound { name: String },

    #[error("Unable to open repositories directory '{path}': {reason}")]
    #[diagnostic(code(tarman::repository::unreadable))]
    RepositoriesUnreadable { path: String, reason: String },

    // Archive errors
    #[error("Unable to download '{url}': {reason}")]
    #[diagnostic(
        code(tarman::archive::download_failed),
        help("Check the URL and your network connection")
    )]
    DownloadFailed { url: String, reason: String },

    #[error("Unable to read archive '{archive}': {reason}")]
    #[diagnostic(
        code(tarman::archive::not_found),
        help("Check the path of the archive, or pass -u for a URL or -r for a repository package")
    )]
    ArchiveNotFound { archive: String, reason: String },

    #[error("Unable to extract archive '{archive}': {reason}")]
    #[diagnostic(
        code(tarman::archive::extraction_failed),
        help("You may be missing the plugin for this archive type")
    )]
    ExtractionFailed { archive: String, reason: String },

    // File system errors
    #[error("Unable to create directory '{path}': {reason}")]
    #[diagnostic(code(tarman::fs::create_dir_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Unable to remove directory '{path}': {reason}")]
    #[diagnostic(code(tarman::fs::remove_dir_failed), help("{help}"))]
    DirectoryRemoveFailed {
        path: String,
        reason: String,
        help: String,
    },

    #[error("Unable to open directory '{path}': {reason}")]
    #[diagnostic(code(tarman::fs::open_dir_failed))]
    DirectoryOpenFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(tarman::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(tarman::fs::io_error))]
    IoError { message: String },

    // Interaction errors
    #[error("Cannot answer '{message}' without an interactive terminal")]
    #[diagnostic(
        code(tarman::prompt::unavailable),
        help("Run the command interactively or pass the value through command-line options")
    )]
    PromptUnavailable { message: String },

    #[error("Failed to read input: {message}")]
    #[diagnostic(code(tarman::prompt::failed))]
    PromptFailed { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(tarman::completions::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for TarmanError {
    fn from(err: std::io::Error) -> Self {
        TarmanError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for TarmanError {
    fn from(err: inquire::InquireError) -> Self {
        TarmanError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TarmanError>;
