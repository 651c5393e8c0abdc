use crate::error::{Error, Result};
use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};
use std::process::{Child, Command as StdCommand, Stdio};

/// `<app_base>` with the host executable suffix (`.exe` on Windows).
pub fn executable_name(app_base: &str) -> String {
    format!("{app_base}{EXE_SUFFIX}")
}

/// Absolute path of the installed executable inside `install_dir`.
pub fn executable_path(install_dir: &Path, app_base: &str) -> Result<PathBuf> {
    Ok(std::path::absolute(install_dir.join(executable_name(app_base)))?)
}

/// Starts the installed application and lets it outlive the installer.
#[derive(Debug)]
pub struct Launch {
    inner: StdCommand,
    program: String,
}

impl Launch {
    pub fn new(program: impl AsRef<Path>) -> Self {
        let program = program.as_ref();
        let mut inner = StdCommand::new(program);
        inner
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        Self {
            inner,
            program: program.display().to_string(),
        }
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.inner.current_dir(dir);
        self
    }

    /// Share the installer's stdin/stdout/stderr with the application.
    pub fn console(mut self, attach: bool) -> Self {
        if attach {
            self.inner
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        }
        self
    }

    pub fn spawn(&mut self) -> Result<Child> {
        self.inner.spawn().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_name() {
        #[cfg(windows)]
        assert_eq!(executable_name("MyApp"), "MyApp.exe");
        #[cfg(not(windows))]
        assert_eq!(executable_name("MyApp"), "MyApp");
    }

    #[test]
    fn test_executable_path_is_absolute() {
        let path = executable_path(Path::new("MyApp"), "MyApp").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with(Path::new("MyApp").join(executable_name("MyApp"))));
    }

    #[test]
    fn test_launch_sets_working_dir() {
        let launch = Launch::new("/opt/MyApp/MyApp").current_dir("/opt/MyApp");
        assert_eq!(launch.inner.get_current_dir(), Some(Path::new("/opt/MyApp")));
        assert_eq!(launch.program, Path::new("/opt/MyApp/MyApp").display().to_string());
    }

    #[test]
    fn test_launch_missing_program_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut launch = Launch::new(dir.path().join("nonexistent_binary_12345"));
        let result = launch.spawn();
        assert!(matches!(result, Err(Error::CommandFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_spawns_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut child = Launch::new("/bin/sh")
            .current_dir(dir.path())
            .console(false)
            .spawn()
            .unwrap();
        assert!(child.wait().unwrap().success());
    }
}
