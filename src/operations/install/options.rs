//! Parsed install intent

use std::path::{Path, PathBuf};

use crate::cli::InstallArgs;
use crate::error::{Result, package};

/// Where the archive of an install comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallSource {
    /// Archive already on disk
    Local(PathBuf),
    /// Archive downloaded from a direct URL
    Url(String),
    /// Package name resolved through local repositories
    Repository(String),
}

impl InstallSource {
    /// Package name suggested by the source, used as a prompt default
    pub fn suggested_name(&self) -> Option<String> {
        let file_name = match self {
            InstallSource::Repository(name) => return Some(name.clone()),
            InstallSource::Local(path) => path.file_name()?.to_str()?.to_string(),
            InstallSource::Url(url) => {
                let path = url.split(['?', '#']).next().unwrap_or(url);
                Path::new(path).file_name()?.to_str()?.to_string()
            }
        };

        let stem = file_name.split('.').next().unwrap_or_default();
        (!stem.is_empty()).then(|| stem.to_string())
    }
}

/// Values given on the command line, the highest-priority override layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub package_name: Option<String>,
    pub application_name: Option<String>,
    pub executable_path: Option<String>,
    pub working_directory: Option<String>,
    pub icon_path: Option<String>,
    pub package_format: Option<String>,
    pub add_to_path: bool,
    pub add_to_desktop: bool,
    pub add_to_tarman: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub source: InstallSource,
    pub overrides: CliOverrides,
}

impl TryFrom<&InstallArgs> for InstallRequest {
    type Error = crate::error::TarmanError;

    fn try_from(args: &InstallArgs) -> Result<Self> {
        let Some(input) = args.input.clone() else {
            return Err(package::missing_input(
                "package to install",
                "Use 'tarman install <archive>', 'tarman install -u <url>' or 'tarman install -r <package>'",
            ));
        };

        let source = if args.from_url {
            InstallSource::Url(input)
        } else if args.from_repo {
            InstallSource::Repository(input)
        } else {
            InstallSource::Local(PathBuf::from(input))
        };

        Ok(Self {
            source,
            overrides: CliOverrides {
                package_name: args.package_name.clone(),
                application_name: args.application_name.clone(),
                executable_path: args.executable_path.clone(),
                working_directory: args.working_directory.clone(),
                icon_path: args.icon_path.clone(),
                package_format: args.format.clone(),
                add_to_path: args.add_path,
                add_to_desktop: args.add_desktop,
                add_to_tarman: args.add_tarman,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<InstallRequest> {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Install(install) => InstallRequest::try_from(&install),
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_local_source() {
        let request = parse(&["tarman", "install", "./foo.tar.gz", "-n", "foo", "-p"]).unwrap();
        assert_eq!(
            request.source,
            InstallSource::Local(PathBuf::from("./foo.tar.gz"))
        );
        assert_eq!(request.overrides.package_name.as_deref(), Some("foo"));
        assert!(request.overrides.add_to_path);
        assert!(!request.overrides.add_to_desktop);
    }

    #[test]
    fn test_url_and_repository_sources() {
        let url = parse(&["tarman", "install", "-u", "https://x.org/a.tar.xz"]).unwrap();
        assert_eq!(
            url.source,
            InstallSource::Url("https://x.org/a.tar.xz".to_string())
        );

        let repo = parse(&["tarman", "install", "-r", "firefox"]).unwrap();
        assert_eq!(repo.source, InstallSource::Repository("firefox".to_string()));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let err = parse(&["tarman", "install"]).unwrap_err();
        assert!(matches!(
            err,
            crate::error::TarmanError::MissingInput { .. }
        ));
    }

    #[test]
    fn test_suggested_name() {
        assert_eq!(
            InstallSource::Local(PathBuf::from("/tmp/foo-linux.tar.gz")).suggested_name(),
            Some("foo-linux".to_string())
        );
        assert_eq!(
            InstallSource::Url("https://x.org/dl/bar.tar.xz?token=1".to_string())
                .suggested_name(),
            Some("bar".to_string())
        );
        assert_eq!(
            InstallSource::Repository("baz".to_string()).suggested_name(),
            Some("baz".to_string())
        );
        assert_eq!(
            InstallSource::Local(PathBuf::from(".hidden")).suggested_name(),
            None
        );
    }
}
