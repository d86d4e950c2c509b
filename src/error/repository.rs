//! Local repository errors

use super::TarmanError;

/// Creates a repository not found error
pub fn not_found(name: impl Into<String>) -> TarmanError {
    TarmanError::RepositoryNotFound { name: name.into() }
}

/// Creates an error for a package no local repository offers
pub fn package_not_found(name: impl Into<String>) -> TarmanError {
    TarmanError::PackageNotInRepositories { name: name.into() }
}

/// Creates an unreadable repositories root error
pub fn unreadable(path: impl Into<String>, reason: impl Into<String>) -> TarmanError {
    TarmanError::RepositoriesUnreadable {
        path: path.into(),
        reason: reason.into(),
    }
}
