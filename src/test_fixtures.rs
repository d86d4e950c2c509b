//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Provides temp host layouts, scripted collaborators (plugins, downloader,
//! prompter) and helpers for building packages on disk.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_settings, ScriptedPrompter, Answer};
//!
//! #[test]
//! fn my_test() {
//!     let (_temp, settings) = create_settings();
//!     let prompter = ScriptedPrompter::new([Answer::Yes]);
//! }
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use crate::archive::PluginHost;
use crate::download::Downloader;
use crate::error::{Result, archive::download_failed};
use crate::settings::Settings;
use crate::ui::prompt::{Prompter, Selection};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create an initialized tarman home inside a temp directory.
///
/// The bin and applications directories also live inside the temp
/// directory so registration never touches the real user environment.
#[must_use]
pub fn create_settings() -> (TempDir, Settings) {
    let temp = create_temp_dir();
    let settings = Settings::new(
        temp.path().join("tarman"),
        temp.path().join("bin"),
        temp.path().join("applications"),
    );
    settings.init().expect("Failed to initialize tarman home");
    (temp, settings)
}

/// Write a shell script with the given body and make it executable
pub fn write_script(path: &Path, body: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
    }
}

/// Write a trivial executable at `path`
pub fn write_executable(path: &Path) {
    write_script(path, "exit 0");
}

/// Pack the contents of `source` into `archive` with the system `tar`.
///
/// Compression follows the archive suffix (`.gz`, `.xz` or none).
pub fn make_tar_archive(source: &Path, archive: &Path) -> PathBuf {
    let name = archive.to_string_lossy();
    let mode = if name.ends_with(".gz") {
        "-czf"
    } else if name.ends_with(".xz") {
        "-cJf"
    } else {
        "-cf"
    };

    let status = Command::new("tar")
        .arg("-C")
        .arg(source)
        .arg(mode)
        .arg(archive)
        .arg(".")
        .status()
        .expect("Failed to run tar");
    assert!(status.success(), "tar exited with {status}");
    archive.to_path_buf()
}

/// Build a package tree under `root/<name>-src` and pack it as `<name>.tar.gz`.
///
/// `files` are `(relative path, contents)`; paths under `bin/` are made
/// executable.
pub fn make_package_archive(root: &Path, name: &str, files: &[(&str, &str)]) -> PathBuf {
    let source = root.join(format!("{name}-src"));
    for (relative, contents) in files {
        let path = source.join(relative);
        if relative.starts_with("bin/") {
            write_script(&path, contents);
        } else {
            fs::create_dir_all(path.parent().expect("relative path has a parent"))
                .expect("Failed to create parent directory");
            fs::write(&path, contents).expect("Failed to write package file");
        }
    }
    fs::create_dir_all(&source).expect("Failed to create package source");
    make_tar_archive(&source, &root.join(format!("{name}.tar.gz")))
}

/// Plugin host that knows a fixed set of plugin names and records runs
pub struct FakePlugins {
    names: HashSet<String>,
    succeed: bool,
    calls: RefCell<Vec<String>>,
}

impl FakePlugins {
    pub fn with(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            succeed: true,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Like [`FakePlugins::with`], but every run fails
    pub fn failing(names: &[&str]) -> Self {
        Self {
            succeed: false,
            ..Self::with(names)
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl PluginHost for FakePlugins {
    fn exists(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    fn run(&self, name: &str, _source: &OsStr, _destination: &OsStr) -> io::Result<bool> {
        self.calls.borrow_mut().push(name.to_string());
        Ok(self.succeed)
    }
}

/// Downloader that copies local files registered per URL
#[derive(Default)]
pub struct FakeDownloader {
    sources: HashMap<String, PathBuf>,
    calls: RefCell<Vec<String>>,
}

impl FakeDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `file` when `url` is requested
    #[must_use]
    pub fn serve(mut self, url: &str, file: &Path) -> Self {
        self.sources.insert(url.to_string(), file.to_path_buf());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Downloader for FakeDownloader {
    fn download(&self, url: &str, destination: &Path) -> Result<()> {
        self.calls.borrow_mut().push(url.to_string());
        let source = self
            .sources
            .get(url)
            .ok_or_else(|| download_failed(url, "404 Not Found"))?;
        fs::copy(source, destination).map_err(|e| download_failed(url, e.to_string()))?;
        Ok(())
    }
}

/// One scripted answer for [`ScriptedPrompter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Pick(usize),
    Custom,
    Text(String),
}

/// Prompter that replays answers in order and records every question.
///
/// Panics when asked more questions than were scripted, or when the next
/// answer does not fit the kind of question.
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Prompter that must never be consulted
    pub fn silent() -> Self {
        Self::new([])
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, message: &str) -> Answer {
        self.asked.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected prompt: {message}"))
    }

    fn yes_no(&self, message: &str) -> bool {
        match self.next(message) {
            Answer::Yes => true,
            Answer::No => false,
            other => panic!("Expected yes/no answer for '{message}', got {other:?}"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        Ok(self.yes_no(message))
    }

    fn ask(&self, message: &str, _default: bool) -> Result<bool> {
        Ok(self.yes_no(message))
    }

    fn choose(
        &self,
        message: &str,
        options: &[String],
        _default: Option<usize>,
        allow_custom: bool,
    ) -> Result<Selection> {
        match self.next(message) {
            Answer::Pick(index) if index < options.len() => Ok(Selection::Option(index)),
            Answer::Custom if allow_custom => Ok(Selection::Custom),
            other => panic!("Answer {other:?} does not fit choice '{message}' {options:?}"),
        }
    }

    fn text(&self, message: &str, _default: Option<&str>) -> Result<String> {
        match self.next(message) {
            Answer::Text(text) => Ok(text),
            other => panic!("Expected text answer for '{message}', got {other:?}"),
        }
    }
}
