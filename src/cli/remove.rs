use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a package:\n    tarman remove firefox\n\n\
                  Remove without confirmation:\n    tarman remove firefox -y")]
pub struct RemoveArgs {
    /// Name of the installed package
    pub name: String,
}
