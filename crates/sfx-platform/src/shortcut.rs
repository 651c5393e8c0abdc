//! Desktop shortcut for the installed application.
//!
//! Windows gets a `.lnk` written through `WScript.Shell`; Linux and macOS get
//! a freedesktop `.desktop` entry. An existing shortcut of the same name is
//! never touched.

#[cfg(not(windows))]
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::dir::user_desktop;
use crate::error::{Error, Result};

#[cfg(windows)]
const EXTENSION: &str = "lnk";
#[cfg(not(windows))]
const EXTENSION: &str = "desktop";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShortcutOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

#[derive(Clone, Debug)]
pub struct Shortcut {
    name: String,
    target: PathBuf,
    dir: Option<PathBuf>,
}

impl Shortcut {
    /// `target` should be the absolute path of the installed executable.
    pub fn new(name: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            dir: None,
        }
    }

    /// Place the shortcut in `dir` instead of the user's desktop.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn path(&self) -> Result<PathBuf> {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => user_desktop().ok_or(Error::DesktopNotFound)?,
        };
        Ok(dir.join(format!("{}.{EXTENSION}", self.name)))
    }

    fn working_dir(&self) -> &Path {
        self.target.parent().unwrap_or(Path::new("."))
    }

    pub fn create(&self) -> Result<ShortcutOutcome> {
        let path = self.path()?;
        if path.exists() {
            debug!(shortcut = %path.display(), "shortcut already present");
            return Ok(ShortcutOutcome::AlreadyExists(path));
        }

        self.write(&path).map_err(|source| Error::ShortcutFailed {
            path: path.clone(),
            source,
        })?;
        debug!(shortcut = %path.display(), "shortcut created");
        Ok(ShortcutOutcome::Created(path))
    }

    #[cfg(windows)]
    fn write(&self, path: &Path) -> std::io::Result<()> {
        use std::process::{Command, Stdio};

        let status = Command::new("powershell")
            .args(["-NoProfile", "-NonInteractive", "-Command"])
            .arg(self.powershell_script(path))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if !status.success() {
            return Err(std::io::Error::other(format!("powershell exited with {status}")));
        }
        Ok(())
    }

    #[cfg(not(windows))]
    fn write(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.desktop_entry())?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
        }
        Ok(())
    }

    #[cfg_attr(not(windows), allow(dead_code))]
    fn powershell_script(&self, path: &Path) -> String {
        let quote = |p: &Path| format!("'{}'", p.display().to_string().replace('\'', "''"));
        format!(
            "$WshShell = New-Object -ComObject WScript.Shell; \
             $Shortcut = $WshShell.CreateShortcut({}); \
             $Shortcut.TargetPath = {}; \
             $Shortcut.WorkingDirectory = {}; \
             $Shortcut.Save()",
            quote(path),
            quote(self.target.as_path()),
            quote(self.working_dir()),
        )
    }

    #[cfg_attr(windows, allow(dead_code))]
    fn desktop_entry(&self) -> String {
        format!(
            "[Desktop Entry]\n\
             Name={}\n\
             Exec=\"{}\"\n\
             Path={}\n\
             Type=Application\n\
             Terminal=false\n",
            self.name,
            self.target.display(),
            self.working_dir().display(),
        )
    }
}
