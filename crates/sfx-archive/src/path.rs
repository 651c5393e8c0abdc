//! Mapping of archive entry names onto the installation target.
//!
//! Entry names are always `/`-separated and begin with the archive root
//! (`MyApp/assets/logo.png`). The destination drops that root and uses the
//! host separator (`assets/logo.png`, `assets\logo.png` on Windows).

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Remove the archive root segment from an entry name.
///
/// `.` segments are dropped and `..` segments are folded the way a lexical
/// path clean would. A volume/drive prefix is kept and only the first
/// segment after it is removed; a leading root separator is dropped.
///
/// Names with fewer than two segments are returned unchanged.
pub fn strip_archive_root(entry: &str) -> PathBuf {
    let mut prefix = PathBuf::new();
    let mut rooted = false;
    let mut segments: Vec<&OsStr> = Vec::new();

    for component in Path::new(entry).components() {
        match component {
            Component::Prefix(p) => prefix.push(p.as_os_str()),
            Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => match segments.last() {
                Some(&last) if last != OsStr::new("..") => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(component.as_os_str()),
            },
            Component::Normal(part) => segments.push(part),
        }
    }

    if segments.len() < 2 {
        return PathBuf::from(entry);
    }

    let mut stripped = prefix;
    stripped.extend(&segments[1..]);
    stripped
}

/// Resolve an entry name to its destination below `target`.
///
/// Fails with [`Error::ZipSlip`] if the stripped name is absolute, carries a
/// drive prefix, or climbs out of the target with `..`.
pub fn resolve_destination(target: &Path, entry: &str) -> Result<PathBuf> {
    let relative = strip_archive_root(entry);

    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(Error::ZipSlip {
            entry: entry.to_owned(),
            resolved: target.join(&relative),
        });
    }

    Ok(target.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native(parts: &[&str]) -> PathBuf {
        parts.iter().collect()
    }

    #[test]
    fn strips_root_segment() {
        assert_eq!(
            strip_archive_root("MyApp/assets/logo.png"),
            native(&["assets", "logo.png"])
        );
        assert_eq!(
            strip_archive_root("MyApp/a/b/c"),
            native(&["a", "b", "c"])
        );
    }

    #[test]
    fn directory_entries_lose_trailing_separator() {
        assert_eq!(strip_archive_root("MyApp/_internal/"), native(&["_internal"]));
    }

    #[test]
    fn short_names_are_returned_unchanged() {
        assert_eq!(strip_archive_root("MyApp"), PathBuf::from("MyApp"));
        assert_eq!(strip_archive_root("MyApp/"), PathBuf::from("MyApp/"));
        assert_eq!(strip_archive_root(""), PathBuf::from(""));
    }

    #[test]
    fn stripping_is_idempotent_on_single_segment() {
        let once = strip_archive_root("MyApp/README.txt");
        assert_eq!(once, PathBuf::from("README.txt"));
        let twice = strip_archive_root(once.to_str().unwrap());
        assert_eq!(twice, once);
    }

    #[test]
    fn dot_segments_are_cleaned() {
        assert_eq!(
            strip_archive_root("MyApp/./x/../y/z"),
            native(&["y", "z"])
        );
    }

    #[cfg(unix)]
    #[test]
    fn leading_root_is_dropped() {
        assert_eq!(strip_archive_root("/MyApp/a/b"), native(&["a", "b"]));
    }

    #[cfg(windows)]
    #[test]
    fn drive_prefix_is_preserved() {
        let stripped = strip_archive_root("C:/MyApp/a/b");
        assert!(matches!(
            stripped.components().next(),
            Some(Component::Prefix(_))
        ));
        assert_eq!(stripped, PathBuf::from(r"C:a\b"));
    }

    #[test]
    fn resolves_below_target() {
        let target = Path::new("install");
        let dest = resolve_destination(target, "MyApp/data/save.dat").unwrap();
        assert_eq!(dest, target.join("data").join("save.dat"));
    }

    #[test]
    fn parent_traversal_is_rejected() {
        let result = resolve_destination(Path::new("install"), "MyApp/../../../etc/passwd");
        assert!(matches!(result, Err(Error::ZipSlip { .. })));
    }

    #[test]
    fn folded_traversal_stays_inside_target() {
        // Cleans to `../etc/passwd`; dropping the root segment leaves `etc/passwd`.
        let target = Path::new("install");
        let dest = resolve_destination(target, "MyApp/../../etc/passwd").unwrap();
        assert_eq!(dest, target.join("etc").join("passwd"));
    }
}
