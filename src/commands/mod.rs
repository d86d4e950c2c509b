//! Command implementations for the tarman CLI
//!
//! Each command turns its parsed arguments into a call on an operation and
//! reports how it ended. Decisions about what is fatal live in the
//! operations.

pub mod completions;
pub mod install;
pub mod list;
pub mod remove;
pub mod repo;
pub mod update;

use crate::operations::Outcome;
use crate::ui::output;

/// Tell the user when a confirmation was declined
pub(crate) fn report(outcome: Outcome) {
    if outcome == Outcome::Aborted {
        output::warning("Aborted, nothing was changed");
    }
}
