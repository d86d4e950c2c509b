//! Fetching remote archives
//!
//! A `download-plugin` in the plugin directory takes over every download when
//! present. Otherwise `curl` is used.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::archive::PluginHost;
use crate::error::Result;
use crate::error::archive::download_failed;

/// Name of the plugin that replaces the default downloader
pub const DOWNLOAD_PLUGIN: &str = "download-plugin";

pub trait Downloader {
    /// Fetch `url` into the file at `destination`
    fn download(&self, url: &str, destination: &Path) -> Result<()>;
}

/// Downloads through the download plugin or `curl`
pub struct SystemDownloader<'a> {
    plugins: &'a dyn PluginHost,
}

impl<'a> SystemDownloader<'a> {
    pub fn new(plugins: &'a dyn PluginHost) -> Self {
        Self { plugins }
    }
}

impl Downloader for SystemDownloader<'_> {
    fn download(&self, url: &str, destination: &Path) -> Result<()> {
        let succeeded = if self.plugins.exists(DOWNLOAD_PLUGIN) {
            tracing::debug!("Downloading {url} with {DOWNLOAD_PLUGIN}");
            self.plugins
                .run(DOWNLOAD_PLUGIN, OsStr::new(url), destination.as_os_str())
                .map_err(|e| download_failed(url, e.to_string()))?
        } else {
            tracing::debug!("Downloading {url} with curl");
            Command::new("curl")
                .args(["-f", "-s", "-S", "-L"])
                .arg(url)
                .arg("-o")
                .arg(destination)
                .stdin(Stdio::null())
                .status()
                .map_err(|e| download_failed(url, format!("unable to run curl: {e}")))?
                .success()
        };

        if succeeded {
            Ok(())
        } else {
            Err(download_failed(url, "the downloader exited with a failure status"))
        }
    }
}
