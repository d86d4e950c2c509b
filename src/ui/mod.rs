//! UI/Progress presentation layer
//!
//! This module handles:
//! - Styled user-facing messages ([`output`])
//! - Interactive questions behind the [`prompt::Prompter`] trait
//! - Spinners for blocking subprocess steps (downloads, extraction)
//!
//! Progress reporting goes through the [`ProgressReporter`] trait so that a
//! spinner is only drawn when stderr is a terminal.

pub mod output;
pub mod prompt;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for one long-running step at a time
pub trait ProgressReporter {
    /// Announce the step that is about to block
    fn start(&mut self, message: &str);

    /// The step completed
    fn finish(&mut self);

    /// The step failed
    fn abandon(&mut self);
}

/// Spinner drawn on stderr while a step runs
#[derive(Default)]
pub struct SpinnerProgressReporter {
    spinner: Option<ProgressBar>,
}

impl ProgressReporter for SpinnerProgressReporter {
    fn start(&mut self, message: &str) {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon();
        }
    }
}

/// No-op reporter used when output is not a terminal
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _message: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Pick a reporter suited to the current stderr
pub fn reporter() -> Box<dyn ProgressReporter> {
    if console::Term::stderr().is_term() {
        Box::new(SpinnerProgressReporter::default())
    } else {
        Box::new(SilentProgressReporter)
    }
}

/// Run `step` with a progress reporter around it
pub fn with_progress<T, E>(message: &str, step: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
    let mut reporter = reporter();
    reporter.start(message);
    let result = step();
    match result {
        Ok(_) => reporter.finish(),
        Err(_) => reporter.abandon(),
    }
    result
}
