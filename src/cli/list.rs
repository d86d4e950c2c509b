use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List installed packages:\n    tarman list")]
pub struct ListArgs {}
