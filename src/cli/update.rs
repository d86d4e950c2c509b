use clap::Parser;

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update a package from the URL it was installed from:\n    tarman update firefox")]
pub struct UpdateArgs {
    /// Name of the installed package
    pub name: String,
}

/// Arguments for the update-all command
#[derive(Parser, Debug)]
pub struct UpdateAllArgs {}
