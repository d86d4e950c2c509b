//! Host file system layout
//!
//! [`Settings`] is computed once at startup and passed by reference to every
//! component that needs a path. Nothing here is global.
//!
//! ```text
//! <home>/
//!   repos/<repo>/<pkg>.tarman   recipes offered by a repository
//!   pkgs/<pkg>/                 one directory per installed package
//!   tmp/                        downloaded archives awaiting extraction
//!   plugins/<name>              extraction and download plugins
//! ```

use std::fs;
use std::path::PathBuf;

use crate::config::recipe::RECIPE_EXTENSION;
use crate::error::{Result, TarmanError};

/// Default directory name under the user's home directory
const HOME_DIR: &str = "tarman";

pub const REPOS_DIR: &str = "repos";
pub const PKGS_DIR: &str = "pkgs";
pub const TMP_DIR: &str = "tmp";
pub const PLUGINS_DIR: &str = "plugins";

pub const HOME_ENV: &str = "TARMAN_HOME";
pub const BIN_DIR_ENV: &str = "TARMAN_BIN_DIR";
pub const APPLICATIONS_DIR_ENV: &str = "TARMAN_APPLICATIONS_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub home: PathBuf,
    pub repos: PathBuf,
    pub pkgs: PathBuf,
    pub tmp: PathBuf,
    pub plugins: PathBuf,
    /// Directory that receives PATH symlinks
    pub bin_dir: PathBuf,
    /// Directory that receives desktop entries
    pub applications_dir: PathBuf,
}

impl Settings {
    /// Lay out every path under `home`
    pub fn new(home: PathBuf, bin_dir: PathBuf, applications_dir: PathBuf) -> Self {
        Self {
            repos: home.join(REPOS_DIR),
            pkgs: home.join(PKGS_DIR),
            tmp: home.join(TMP_DIR),
            plugins: home.join(PLUGINS_DIR),
            home,
            bin_dir,
            applications_dir,
        }
    }

    /// Resolve the layout from the environment.
    ///
    /// `TARMAN_HOME`, `TARMAN_BIN_DIR` and `TARMAN_APPLICATIONS_DIR` override
    /// the defaults (`~/tarman`, `~/.local/bin`, `$XDG_DATA_HOME/applications`).
    pub fn from_env() -> Result<Self> {
        let user_home = dirs::home_dir();

        let home = match std::env::var_os(HOME_ENV) {
            Some(path) => PathBuf::from(path),
            None => user_home
                .as_ref()
                .ok_or(TarmanError::HomeUnknown)?
                .join(HOME_DIR),
        };

        let bin_dir = match std::env::var_os(BIN_DIR_ENV) {
            Some(path) => PathBuf::from(path),
            None => user_home
                .as_ref()
                .ok_or(TarmanError::HomeUnknown)?
                .join(".local")
                .join("bin"),
        };

        let applications_dir = match std::env::var_os(APPLICATIONS_DIR_ENV) {
            Some(path) => PathBuf::from(path),
            None => dirs::data_dir()
                .ok_or(TarmanError::HomeUnknown)?
                .join("applications"),
        };

        Ok(Self::new(home, bin_dir, applications_dir))
    }

    /// Make sure the home, repository, package and scratch directories exist
    pub fn init(&self) -> Result<()> {
        for dir in [&self.home, &self.repos, &self.pkgs, &self.tmp] {
            fs::create_dir_all(dir).map_err(|e| TarmanError::HomeInitFailed {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    pub fn package_dir(&self, package_name: &str) -> PathBuf {
        self.pkgs.join(package_name)
    }

    pub fn repository_dir(&self, repository: &str) -> PathBuf {
        self.repos.join(repository)
    }

    /// `repos/<repository>/<package_name>.tarman`
    pub fn repository_recipe(&self, repository: &str, package_name: &str) -> PathBuf {
        self.repository_dir(repository)
            .join(format!("{package_name}.{RECIPE_EXTENSION}"))
    }

    /// `tmp/<name>.<format>`
    pub fn cached_archive(&self, name: &str, format: &str) -> PathBuf {
        self.tmp.join(format!("{name}.{format}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn sample() -> Settings {
        Settings::new(
            PathBuf::from("/home/user/tarman"),
            PathBuf::from("/home/user/.local/bin"),
            PathBuf::from("/home/user/.local/share/applications"),
        )
    }

    #[test]
    fn test_layout() {
        let settings = sample();
        assert_eq!(settings.repos, PathBuf::from("/home/user/tarman/repos"));
        assert_eq!(settings.pkgs, PathBuf::from("/home/user/tarman/pkgs"));
        assert_eq!(settings.tmp, PathBuf::from("/home/user/tarman/tmp"));
        assert_eq!(settings.plugins, PathBuf::from("/home/user/tarman/plugins"));
    }

    #[test]
    fn test_derived_paths() {
        let settings = sample();
        assert_eq!(
            settings.repository_recipe("main", "firefox"),
            PathBuf::from("/home/user/tarman/repos/main/firefox.tarman")
        );
        assert_eq!(
            settings.cached_archive("firefox", "tar.xz"),
            PathBuf::from("/home/user/tarman/tmp/firefox.tar.xz")
        );
        assert_eq!(
            settings.package_dir("firefox"),
            PathBuf::from("/home/user/tarman/pkgs/firefox")
        );
    }

    #[test]
    fn test_init_creates_directories() {
        let temp = crate::test_fixtures::create_temp_dir();
        let settings = Settings::new(
            temp.path().join("tarman"),
            temp.path().join("bin"),
            temp.path().join("applications"),
        );

        settings.init().unwrap();
        assert!(settings.repos.is_dir());
        assert!(settings.pkgs.is_dir());
        assert!(settings.tmp.is_dir());

        // Running it again over an existing tree is fine
        settings.init().unwrap();
    }

    #[test]
    fn test_init_fails_when_home_is_a_file() {
        let temp = crate::test_fixtures::create_temp_dir();
        let home = temp.path().join("tarman");
        fs::write(&home, "not a directory").unwrap();

        let settings = Settings::new(home, temp.path().join("bin"), temp.path().join("apps"));
        assert!(matches!(
            settings.init(),
            Err(TarmanError::HomeInitFailed { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: serialized with other environment-mutating tests
        unsafe {
            std::env::set_var(HOME_ENV, "/opt/tarman");
            std::env::set_var(BIN_DIR_ENV, "/opt/bin");
            std::env::set_var(APPLICATIONS_DIR_ENV, "/opt/apps");
        }

        let settings = Settings::from_env().unwrap();

        unsafe {
            std::env::remove_var(HOME_ENV);
            std::env::remove_var(BIN_DIR_ENV);
            std::env::remove_var(APPLICATIONS_DIR_ENV);
        }

        assert_eq!(settings.home, PathBuf::from("/opt/tarman"));
        assert_eq!(settings.pkgs, PathBuf::from("/opt/tarman/pkgs"));
        assert_eq!(settings.bin_dir, PathBuf::from("/opt/bin"));
        assert_eq!(settings.applications_dir, PathBuf::from("/opt/apps"));
    }
}
