//! Common test utilities for tarman integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated tarman home with its own bin and applications directories
#[allow(dead_code)]
pub struct TestHome {
    /// Temporary directory holding everything below
    pub temp: TempDir,
    /// Value of TARMAN_HOME
    pub home: PathBuf,
    pub bin_dir: PathBuf,
    pub applications_dir: PathBuf,
    /// Scratch space for archives built by the test
    pub work: PathBuf,
}

#[allow(dead_code)]
impl TestHome {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let work = temp.path().join("work");
        fs::create_dir_all(&work).expect("Failed to create work directory");
        Self {
            home: temp.path().join("tarman"),
            bin_dir: temp.path().join("bin"),
            applications_dir: temp.path().join("applications"),
            work,
            temp,
        }
    }

    /// `tarman` binary pointed at this home
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tarman").expect("tarman binary is built");
        cmd.env("TARMAN_HOME", &self.home);
        cmd.env("TARMAN_BIN_DIR", &self.bin_dir);
        cmd.env("TARMAN_APPLICATIONS_DIR", &self.applications_dir);
        cmd.env_remove("RUST_LOG");
        cmd.current_dir(&self.work);
        cmd
    }

    pub fn package_dir(&self, name: &str) -> PathBuf {
        self.home.join("pkgs").join(name)
    }

    /// Build `<work>/<name>.tar.gz` from `(relative path, contents)` pairs.
    ///
    /// Files under `bin/` are made executable.
    pub fn package_archive(&self, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let source = self.work.join(format!("{name}-src"));
        if source.exists() {
            fs::remove_dir_all(&source).expect("Failed to clear package source");
        }
        fs::create_dir_all(&source).expect("Failed to create package source");

        for (relative, contents) in files {
            let path = source.join(relative);
            fs::create_dir_all(path.parent().expect("relative path has a parent"))
                .expect("Failed to create parent directory");
            fs::write(&path, contents).expect("Failed to write package file");
            if relative.starts_with("bin/") {
                make_executable(&path);
            }
        }

        let archive = self.work.join(format!("{name}.tar.gz"));
        tar_directory(&source, &archive);
        archive
    }

    /// Install a `download-plugin` that copies its source path to the destination,
    /// so plain file paths can stand in for URLs.
    pub fn install_copy_download_plugin(&self) {
        let plugins = self.home.join("plugins");
        fs::create_dir_all(&plugins).expect("Failed to create plugins directory");
        let plugin = plugins.join("download-plugin");
        fs::write(&plugin, "#!/bin/sh\ncp \"$1\" \"$2\"\n").expect("Failed to write plugin");
        make_executable(&plugin);
    }
}

/// Pack the contents of `source` into a gzip tarball at `archive`
#[allow(dead_code)]
pub fn tar_directory(source: &Path, archive: &Path) {
    let status = StdCommand::new("tar")
        .arg("-C")
        .arg(source)
        .arg("-czf")
        .arg(archive)
        .arg(".")
        .status()
        .expect("Failed to run tar");
    assert!(status.success(), "tar exited with {status}");
}

#[allow(dead_code)]
pub fn make_executable(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make file executable");
    }
    #[cfg(not(unix))]
    let _ = path;
}
