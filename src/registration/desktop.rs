//! Desktop menu entries (`<applications>/<app>.desktop`)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Everything written into a desktop entry. Paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry<'a> {
    pub name: &'a str,
    pub executable: &'a Path,
    pub icon: Option<&'a Path>,
    pub working_directory: Option<&'a Path>,
}

impl DesktopEntry<'_> {
    pub fn render(&self) -> String {
        let mut lines = vec![
            "[Desktop Entry]".to_string(),
            "Comment=Installed with tarman".to_string(),
            format!("Exec={}", self.executable.display()),
        ];
        if let Some(icon) = self.icon {
            lines.push(format!("Icon={}", icon.display()));
        }
        lines.push(format!("Name={}", self.name));
        lines.push("NoDisplay=false".to_string());
        if let Some(dir) = self.working_directory {
            lines.push(format!("Path={}", dir.display()));
        }
        lines.extend(
            [
                "StartupNotify=true",
                "Terminal=false",
                "TerminalOptions=",
                "Type=Application",
            ]
            .map(String::from),
        );

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

pub fn entry_path(applications_dir: &Path, app_name: &str) -> PathBuf {
    applications_dir.join(format!("{app_name}.desktop"))
}

/// Write the entry, replacing an existing one with the same name
pub fn add(applications_dir: &Path, entry: &DesktopEntry<'_>) -> io::Result<PathBuf> {
    if entry.name.contains(['/', '\n']) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' cannot be used as an application name", entry.name),
        ));
    }

    fs::create_dir_all(applications_dir)?;
    let path = entry_path(applications_dir, entry.name);
    fs::write(&path, entry.render())?;
    Ok(path)
}

pub fn remove(applications_dir: &Path, app_name: &str) -> io::Result<()> {
    match fs::remove_file(entry_path(applications_dir, app_name)) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
