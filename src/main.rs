//! tarman - package manager for software distributed as archives
//!
//! Installs tarballs (and any archive type a plugin can extract) into a
//! per-user directory, and optionally registers them in PATH, the desktop
//! menu or as tarman plugins.

use clap::Parser;
use miette::Diagnostic;

mod archive;
mod cli;
mod commands;
mod common;
mod config;
mod download;
mod error;
mod operations;
mod registration;
mod settings;
mod ui;

#[cfg(test)]
mod test_fixtures;

use archive::PluginDirectory;
use cli::{Cli, Commands};
use download::SystemDownloader;
use error::{Result, TarmanError};
use operations::Context;
use settings::Settings;
use ui::output;
use ui::prompt::{AssumeYesPrompter, InteractivePrompter, Prompter};

/// `RUST_LOG` wins; otherwise `--verbose` turns on debug output
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // Completions need no host layout
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::run(args),
        command => command,
    };

    let settings = Settings::from_env()?;
    tracing::debug!("Using tarman home {}", settings.home.display());

    let prompter: Box<dyn Prompter> = if cli.yes {
        Box::new(AssumeYesPrompter)
    } else {
        Box::new(InteractivePrompter)
    };
    let plugins = PluginDirectory::new(settings.plugins.clone());
    let downloader = SystemDownloader::new(&plugins);
    let ctx = Context::new(&settings, prompter.as_ref(), &downloader, &plugins);

    match command {
        Commands::Install(args) => commands::install::run(&ctx, args),
        Commands::List(args) => commands::list::run(&settings, args),
        Commands::Remove(args) => commands::remove::run(&ctx, args),
        Commands::Update(args) => commands::update::run(&ctx, args),
        Commands::UpdateAll(args) => commands::update::run_all(&ctx, args),
        Commands::AddRepo(args) => commands::repo::add(&ctx, args),
        Commands::RemoveRepo(args) => commands::repo::remove(&ctx, args),
        Commands::ListRepos(args) => commands::repo::list(&ctx, args),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn report_error(err: &TarmanError) {
    output::error(&err.to_string());
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        report_error(&e);
        std::process::exit(1);
    }
}
