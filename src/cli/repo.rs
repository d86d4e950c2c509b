use clap::Parser;

/// Arguments for the add-repo command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add the repositories shipped in an archive:\n    tarman add-repo https://x.org/tarman-repo.tar.gz\n\n\
                  Add repositories from a zip archive through a plugin:\n    tarman add-repo https://x.org/repo.zip -f zip")]
pub struct AddRepoArgs {
    /// URL of the repository archive
    pub url: String,

    /// Archive format (defaults to tar.gz)
    #[arg(long, short = 'f', value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the remove-repo command
#[derive(Parser, Debug)]
pub struct RemoveRepoArgs {
    /// Name of the local repository
    pub name: String,
}

/// Arguments for the list-repos command
#[derive(Parser, Debug)]
pub struct ListReposArgs {}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_add_repo() {
        let cli =
            Cli::try_parse_from(["tarman", "add-repo", "https://x.org/r.zip", "-f", "zip"]).unwrap();
        match cli.command {
            Commands::AddRepo(args) => {
                assert_eq!(args.url, "https://x.org/r.zip");
                assert_eq!(args.format.as_deref(), Some("zip"));
            }
            _ => panic!("Expected AddRepo command"),
        }
    }

    #[test]
    fn test_cli_parsing_remove_repo() {
        let cli = Cli::try_parse_from(["tarman", "remove-repo", "main"]).unwrap();
        match cli.command {
            Commands::RemoveRepo(args) => assert_eq!(args.name, "main"),
            _ => panic!("Expected RemoveRepo command"),
        }
    }
}
