//! Recipe and package file errors

use super::TarmanError;

/// Creates a malformed repository recipe error
pub fn malformed(
    name: impl Into<String>,
    repository: impl Into<String>,
    reason: impl Into<String>,
) -> TarmanError {
    TarmanError::RecipeMalformed {
        name: name.into(),
        repository: repository.into(),
        reason: reason.into(),
    }
}

/// Creates a recipe read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> TarmanError {
    TarmanError::RecipeReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a missing URL error
pub fn missing_url(name: impl Into<String>) -> TarmanError {
    TarmanError::RecipeMissingUrl { name: name.into() }
}

/// Creates an unreadable embedded package file error
pub fn package_file_unreadable(path: impl Into<String>, reason: impl Into<String>) -> TarmanError {
    TarmanError::PackageFileUnreadable {
        path: path.into(),
        reason: reason.into(),
    }
}
