//! File system errors

use super::TarmanError;

/// Creates a directory creation error
pub fn create_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> TarmanError {
    TarmanError::DirectoryCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory removal error with a remediation hint
pub fn remove_dir_failed(
    path: impl Into<String>,
    reason: impl Into<String>,
    help: impl Into<String>,
) -> TarmanError {
    TarmanError::DirectoryRemoveFailed {
        path: path.into(),
        reason: reason.into(),
        help: help.into(),
    }
}

/// Creates a directory open error
pub fn open_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> TarmanError {
    TarmanError::DirectoryOpenFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> TarmanError {
    TarmanError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> TarmanError {
    TarmanError::IoError {
        message: message.into(),
    }
}
