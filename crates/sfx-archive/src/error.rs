use std::io;
use std::path::PathBuf;

use zip::result::ZipError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no '*{suffix}' payload found among embedded resources")]
    PayloadNotFound { suffix: &'static str },

    #[error("failed to open payload '{name}': {source}")]
    ArchiveOpenFailed { name: String, source: ZipError },

    #[error("payload is corrupted at entry #{index}: {source}")]
    ArchiveCorrupt { index: usize, source: ZipError },

    #[error("zip-slip attack detected: entry '{entry}' resolves to '{resolved}'")]
    ZipSlip { entry: String, resolved: PathBuf },

    #[error("failed to create directory: {path}: {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error("failed to extract '{path}': {source}")]
    ExtractionFailed { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this is a filesystem failure during extraction rather than a
    /// problem with the payload itself.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::DirectoryCreationFailed { .. } | Self::ExtractionFailed { .. } | Self::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
