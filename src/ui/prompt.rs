//! Interactive questions
//!
//! Every question the orchestrator asks goes through [`Prompter`], so the
//! same flow can run against a terminal, in `--yes` mode, or from a script
//! in tests.

use inquire::{Confirm, Select, Text};

use crate::error::{Result, TarmanError};

const CUSTOM_ENTRY: &str = "Custom...";

/// Answer to [`Prompter::choose`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Index into the offered options
    Option(usize),
    /// The user wants to type their own value
    Custom,
}

pub trait Prompter {
    /// Destructive confirmation. Declining aborts the command.
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Optional yes/no question
    fn ask(&self, message: &str, default: bool) -> Result<bool>;

    /// Pick one of `options`, or a custom entry when `allow_custom` is set
    fn choose(
        &self,
        message: &str,
        options: &[String],
        default: Option<usize>,
        allow_custom: bool,
    ) -> Result<Selection>;

    /// Free-text line
    fn text(&self, message: &str, default: Option<&str>) -> Result<String>;
}

/// Ask `prompter` to choose, skipping the question when the answer is forced.
///
/// A single option without a custom entry is returned directly, and an
/// empty list with a custom entry goes straight to [`Selection::Custom`].
pub fn choose(
    prompter: &dyn Prompter,
    message: &str,
    options: &[String],
    default: Option<usize>,
    allow_custom: bool,
) -> Result<Selection> {
    match (options.len(), allow_custom) {
        (0, false) => Err(TarmanError::InferenceFailed {
            what: message.to_string(),
            reason: "there is nothing to choose from".to_string(),
        }),
        (0, true) => Ok(Selection::Custom),
        (1, false) => Ok(Selection::Option(0)),
        _ => prompter.choose(message, options, default, allow_custom),
    }
}

/// Terminal prompts backed by `inquire`
#[derive(Debug, Default)]
pub struct InteractivePrompter;

impl Prompter for InteractivePrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        let answer = Confirm::new(message)
            .with_default(true)
            .with_help_message("Press Enter to confirm, or 'n' to cancel")
            .prompt_skippable()?;
        Ok(answer.unwrap_or(false))
    }

    fn ask(&self, message: &str, default: bool) -> Result<bool> {
        let answer = Confirm::new(message)
            .with_default(default)
            .prompt_skippable()?;
        Ok(answer.unwrap_or(default))
    }

    fn choose(
        &self,
        message: &str,
        options: &[String],
        default: Option<usize>,
        allow_custom: bool,
    ) -> Result<Selection> {
        let mut items = options.to_vec();
        if allow_custom {
            items.push(CUSTOM_ENTRY.to_string());
        }

        let picked = Select::new(message, items)
            .with_starting_cursor(default.unwrap_or(0))
            .with_page_size(10)
            .without_filtering()
            .with_help_message("↑↓ to move, ENTER to select")
            .raw_prompt()?;

        if picked.index >= options.len() {
            Ok(Selection::Custom)
        } else {
            Ok(Selection::Option(picked.index))
        }
    }

    fn text(&self, message: &str, default: Option<&str>) -> Result<String> {
        let mut prompt = Text::new(message);
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        Ok(prompt.prompt()?)
    }
}

/// Non-interactive answers for `--yes`.
///
/// Confirmations are accepted, optional questions and choices take their
/// default, and anything without a default is an error.
#[derive(Debug, Default)]
pub struct AssumeYesPrompter;

impl Prompter for AssumeYesPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        tracing::debug!("Assuming yes: {message}");
        Ok(true)
    }

    fn ask(&self, message: &str, default: bool) -> Result<bool> {
        tracing::debug!("Assuming default ({default}): {message}");
        Ok(default)
    }

    fn choose(
        &self,
        message: &str,
        options: &[String],
        default: Option<usize>,
        _allow_custom: bool,
    ) -> Result<Selection> {
        match default {
            Some(index) if index < options.len() => Ok(Selection::Option(index)),
            _ => Err(TarmanError::PromptUnavailable {
                message: message.to_string(),
            }),
        }
    }

    fn text(&self, message: &str, default: Option<&str>) -> Result<String> {
        default
            .map(str::to_string)
            .ok_or_else(|| TarmanError::PromptUnavailable {
                message: message.to_string(),
            })
    }
}
