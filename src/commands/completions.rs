//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::{Result, TarmanError};

/// Generate shell completions on stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    write_completions(shell, &mut std::io::stdout().lock());
    Ok(())
}

fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "elvish" => Ok(Shell::Elvish),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "zsh" => Ok(Shell::Zsh),
        _ => Err(TarmanError::UnknownShell {
            shell: name.to_string(),
        }),
    }
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "tarman", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell_names() {
        assert_eq!(parse_shell("bash").unwrap(), Shell::Bash);
        assert_eq!(parse_shell("elvish").unwrap(), Shell::Elvish);
        assert_eq!(parse_shell("fish").unwrap(), Shell::Fish);
        assert_eq!(parse_shell("powershell").unwrap(), Shell::PowerShell);
        assert_eq!(parse_shell("pwsh").unwrap(), Shell::PowerShell);
        assert_eq!(parse_shell("zsh").unwrap(), Shell::Zsh);
    }

    #[test]
    fn test_parse_shell_ignores_case() {
        assert_eq!(parse_shell("BASH").unwrap(), Shell::Bash);
        assert_eq!(parse_shell("Zsh").unwrap(), Shell::Zsh);
    }

    #[test]
    fn test_parse_shell_unknown() {
        let err = parse_shell("tcsh").unwrap_err();
        assert!(matches!(err, TarmanError::UnknownShell { ref shell } if shell == "tcsh"));
    }

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let mut buffer = Vec::new();
        write_completions(Shell::Bash, &mut buffer);
        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("tarman"));
        assert!(script.contains("update-all"));
        assert!(script.contains("add-repo"));
    }

    #[test]
    fn test_run_unknown_shell_fails() {
        let args = CompletionsArgs {
            shell: "nushell".to_string(),
        };
        assert!(run(args).is_err());
    }
}
