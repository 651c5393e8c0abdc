//! Discovery of the archive bundled with the installer.

use std::io::Cursor;

use zip::ZipArchive;

use crate::error::{Error, Result};

/// Suffix identifying the payload among embedded resources.
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// One entry of the embedded resource directory.
#[derive(Clone, Copy, Debug)]
pub struct Resource<'a> {
    pub name: &'a str,
    pub is_dir: bool,
    pub data: &'a [u8],
}

impl<'a> Resource<'a> {
    pub const fn file(name: &'a str, data: &'a [u8]) -> Self {
        Self {
            name,
            is_dir: false,
            data,
        }
    }

    pub const fn dir(name: &'a str) -> Self {
        Self {
            name,
            is_dir: true,
            data: &[],
        }
    }
}

/// The located archive together with the application name derived from it.
#[derive(Clone, Copy, Debug)]
pub struct Payload<'a> {
    file_name: &'a str,
    app_base: &'a str,
    data: &'a [u8],
}

impl<'a> Payload<'a> {
    /// Pick the first non-directory resource whose name ends in
    /// [`ARCHIVE_SUFFIX`]. The match is case-sensitive.
    pub fn locate(resources: &[Resource<'a>]) -> Result<Self> {
        resources
            .iter()
            .filter(|r| !r.is_dir)
            .find_map(|r| {
                r.name.strip_suffix(ARCHIVE_SUFFIX).map(|app_base| Self {
                    file_name: r.name,
                    app_base,
                    data: r.data,
                })
            })
            .ok_or(Error::PayloadNotFound {
                suffix: ARCHIVE_SUFFIX,
            })
    }

    pub fn file_name(&self) -> &'a str {
        self.file_name
    }

    /// Name of the application: the payload file name without its suffix.
    /// Doubles as the default install directory and executable name.
    pub fn app_base(&self) -> &'a str {
        self.app_base
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn open(&self) -> Result<ZipArchive<Cursor<&'a [u8]>>> {
        ZipArchive::new(Cursor::new(self.data)).map_err(|source| Error::ArchiveOpenFailed {
            name: self.file_name.to_owned(),
            source,
        })
    }
}
