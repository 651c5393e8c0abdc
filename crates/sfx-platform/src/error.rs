use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot determine the user's desktop directory")]
    DesktopNotFound,

    #[error("failed to create shortcut '{path}': {source}")]
    ShortcutFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("command failed: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: std::io::Error },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
