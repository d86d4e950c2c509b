//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - remove: Remove command arguments
//! - update: Update and update-all command arguments
//! - repo: Repository command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod install;
pub mod list;
pub mod remove;
pub mod repo;
pub mod update;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use remove::RemoveArgs;
pub use repo::{AddRepoArgs, ListReposArgs, RemoveRepoArgs};
pub use update::{UpdateAllArgs, UpdateArgs};

/// tarman - package manager for software distributed as archives
///
/// Installs tarballs and other archives into a per-user directory, optionally
/// linking them into PATH and the desktop menu.
#[derive(Parser, Debug)]
#[command(
    name = "tarman",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Package manager for software distributed as archives",
    long_about = "tarman installs software shipped as tarballs (or any archive a plugin can extract) \
                  into ~/tarman/pkgs, and can register it in PATH, the desktop menu or as a tarman plugin.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  tarman install ./app.tar.gz -n app       \x1b[90m# Install a local archive\x1b[0m\n   \
                  tarman install -u https://x.org/app.tar.xz \x1b[90m# Install from a URL\x1b[0m\n   \
                  tarman install -r firefox                \x1b[90m# Install from local repositories\x1b[0m\n   \
                  tarman remove app                        \x1b[90m# Remove a package\x1b[0m\n   \
                  tarman update-all                        \x1b[90m# Update every package\x1b[0m\n   \
                  tarman add-repo https://x.org/repo.tar.gz \x1b[90m# Add a repository\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Answer every question with its default and confirm removals
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a package from an archive, a URL or a repository
    Install(InstallArgs),

    /// List installed packages
    List(ListArgs),

    /// Remove an installed package
    Remove(RemoveArgs),

    /// Update a package from its recorded URL
    Update(UpdateArgs),

    /// Update every installed package
    #[command(name = "update-all")]
    UpdateAll(UpdateAllArgs),

    /// Add repositories from a repository archive
    #[command(name = "add-repo")]
    AddRepo(AddRepoArgs),

    /// Remove a local repository
    #[command(name = "remove-repo")]
    RemoveRepo(RemoveRepoArgs),

    /// List local repositories
    #[command(name = "list-repos")]
    ListRepos(ListReposArgs),

    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}
