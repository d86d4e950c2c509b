//! Installed package errors

use super::TarmanError;

/// Creates a package not installed error
pub fn not_installed(name: impl Into<String>) -> TarmanError {
    TarmanError::PackageNotInstalled { name: name.into() }
}

/// Creates an invalid package name error
pub fn invalid_name(name: impl Into<String>) -> TarmanError {
    TarmanError::InvalidPackageName { name: name.into() }
}

/// Creates a missing command input error
pub fn missing_input(what: impl Into<String>, usage: impl Into<String>) -> TarmanError {
    TarmanError::MissingInput {
        what: what.into(),
        usage: usage.into(),
    }
}

/// Creates an error for a recipe artifact that cannot drive an update
pub fn missing_update_metadata(name: impl Into<String>, reason: impl Into<String>) -> TarmanError {
    TarmanError::MissingUpdateMetadata {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates an inference failed error
pub fn inference_failed(what: impl Into<String>, reason: impl Into<String>) -> TarmanError {
    TarmanError::InferenceFailed {
        what: what.into(),
        reason: reason.into(),
    }
}

/// Creates the summary error for a batch update with failures
pub fn update_all_failed(failed: usize, total: usize) -> TarmanError {
    TarmanError::UpdateAllFailed { failed, total }
}
