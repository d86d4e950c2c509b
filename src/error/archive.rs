//! Download and extraction errors

use super::TarmanError;

/// Creates a download failed error
pub fn download_failed(url: impl Into<String>, reason: impl Into<String>) -> TarmanError {
    TarmanError::DownloadFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a local archive that cannot be opened
pub fn not_found(archive: impl Into<String>, reason: impl Into<String>) -> TarmanError {
    TarmanError::ArchiveNotFound {
        archive: archive.into(),
        reason: reason.into(),
    }
}

/// Creates an extraction failed error
pub fn extraction_failed(archive: impl Into<String>, reason: impl Into<String>) -> TarmanError {
    TarmanError::ExtractionFailed {
        archive: archive.into(),
        reason: reason.into(),
    }
}
