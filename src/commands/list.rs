//! List command
//!
//! Prints installed packages as a table sized to the terminal.

use console::Term;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::operations::list::{ListOperation, render};
use crate::settings::Settings;
use crate::ui::output;

/// Used when stdout is not a terminal
const FALLBACK_WIDTH: usize = 80;

pub fn run(settings: &Settings, _args: ListArgs) -> Result<()> {
    let packages = ListOperation::new(settings).execute()?;

    if packages.is_empty() {
        output::line("No packages installed.");
        return Ok(());
    }

    let term = Term::stdout();
    let width = if term.is_term() {
        term.size().1 as usize
    } else {
        FALLBACK_WIDTH
    };

    output::heading("Installed packages:");
    for row in render(&packages, width) {
        output::line(&row);
    }
    Ok(())
}
