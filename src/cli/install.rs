use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install a local archive:\n    tarman install ./app-linux-x64.tar.gz -n app\n\n\
                   Install from a URL and add it to PATH:\n    tarman install -u https://x.org/app.tar.gz -p\n\n\
                   Install from local repositories:\n    tarman install -r firefox\n\n\
                   Install a zip archive through a plugin:\n    tarman install ./app.zip -f zip")]
pub struct InstallArgs {
    /// Archive path, URL (with --from-url) or package name (with --from-repo)
    pub input: Option<String>,

    /// Treat the input as a URL to download
    #[arg(long = "from-url", short = 'u', conflicts_with = "from_repo")]
    pub from_url: bool,

    /// Treat the input as a package name to look up in local repositories
    #[arg(long = "from-repo", short = 'r')]
    pub from_repo: bool,

    /// Name of the local package directory
    #[arg(long = "pkg-name", short = 'n', value_name = "NAME")]
    pub package_name: Option<String>,

    /// Application name for the desktop entry
    #[arg(long = "app-name", short = 'a', value_name = "NAME")]
    pub application_name: Option<String>,

    /// Executable path, relative to the package root
    #[arg(long = "exec", short = 'x', value_name = "PATH")]
    pub executable_path: Option<String>,

    /// Working directory, relative to the package root
    #[arg(long = "working-dir", short = 'w', value_name = "PATH")]
    pub working_directory: Option<String>,

    /// Icon path, relative to the package root
    #[arg(long = "icon", short = 'i', value_name = "PATH")]
    pub icon_path: Option<String>,

    /// Archive format (e.g. tar.gz, tar.xz, or the name of a plugin)
    #[arg(long, short = 'f', value_name = "FORMAT")]
    pub format: Option<String>,

    /// Link the executable into PATH
    #[arg(long = "add-path", short = 'p')]
    pub add_path: bool,

    /// Add a desktop menu entry
    #[arg(long = "add-desktop", short = 'd')]
    pub add_desktop: bool,

    /// Register the executable as a tarman plugin
    #[arg(long = "add-tarman", short = 't')]
    pub add_tarman: bool,
}
