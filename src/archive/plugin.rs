//! External plugin executables
//!
//! A plugin named `<name>` is an executable at `<plugins>/<name>`. It is run
//! with three arguments: the source (archive path or URL), the destination,
//! and the path of its optional config file `<plugins>/<name>.conf`. Exit
//! status 0 means success.

use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::common::fs::is_executable_file;

pub trait PluginHost {
    /// Whether an executable plugin named `name` is installed
    fn exists(&self, name: &str) -> bool;

    /// Run plugin `name`, returning whether it exited successfully
    fn run(&self, name: &str, source: &OsStr, destination: &OsStr) -> io::Result<bool>;
}

/// Plugins stored as executables in one directory
#[derive(Debug, Clone)]
pub struct PluginDirectory {
    root: PathBuf,
}

impl PluginDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn executable(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn config(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.conf"))
    }

    /// Names must stay inside the plugin directory
    fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
    }
}

impl PluginHost for PluginDirectory {
    fn exists(&self, name: &str) -> bool {
        Self::is_valid_name(name) && is_executable_file(&self.executable(name))
    }

    fn run(&self, name: &str, source: &OsStr, destination: &OsStr) -> io::Result<bool> {
        tracing::debug!("Running plugin '{name}'");

        let status = Command::new(self.executable(name))
            .arg(source)
            .arg(destination)
            .arg(self.config(name))
            .stdin(Stdio::null())
            .status()?;

        tracing::debug!("Plugin '{name}' exited with {status}");
        Ok(status.success())
    }
}
