//! Overwrite policy for existing destination files.
//!
//! Entries below a managed segment (the first directory under the archive
//! root) are always refreshed. Everything else is created when absent and
//! left alone when present, so user state such as save files or local
//! configuration survives a reinstall.

use std::collections::BTreeSet;

/// Top-level segments managed by the installer, fixed for a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagedSegments(BTreeSet<String>);

impl ManagedSegments {
    pub const INTERNAL: &'static str = "_internal";
    pub const ASSETS: &'static str = "assets";

    /// `{"_internal", "assets", <app_base>}`
    pub fn for_app(app_base: &str) -> Self {
        Self(
            [Self::INTERNAL, Self::ASSETS, app_base]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        )
    }

    pub fn contains(&self, segment: &str) -> bool {
        self.0.contains(segment)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[derive(Clone, Debug)]
pub struct OverwritePolicy {
    managed: ManagedSegments,
}

impl OverwritePolicy {
    pub fn new(managed: ManagedSegments) -> Self {
        Self { managed }
    }

    pub fn for_app(app_base: &str) -> Self {
        Self::new(ManagedSegments::for_app(app_base))
    }

    pub fn managed(&self) -> &ManagedSegments {
        &self.managed
    }

    /// Whether an existing destination for `entry` must be replaced.
    ///
    /// `entry` is the raw `/`-separated archive name. Only the segment right
    /// after the archive root is inspected, so `MyApp/MyApp` (a file directly
    /// under the root whose name matches a managed segment) is refreshed
    /// while `MyApp/README.txt` is not.
    pub fn should_overwrite(&self, entry: &str) -> bool {
        let mut segments = entry.split('/');
        let _root = segments.next();
        match segments.next() {
            Some(top) => self.managed.contains(top),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> OverwritePolicy {
        OverwritePolicy::for_app("MyApp")
    }

    #[test]
    fn managed_set_for_app() {
        let managed = ManagedSegments::for_app("MyApp");
        let mut names: Vec<_> = managed.iter().collect();
        names.sort_unstable();
        assert_eq!(names, ["MyApp", "_internal", "assets"]);
    }

    #[test]
    fn managed_segments_are_refreshed() {
        let policy = policy();
        assert!(policy.should_overwrite("MyApp/assets/logo.png"));
        assert!(policy.should_overwrite("MyApp/_internal/python311.dll"));
        assert!(policy.should_overwrite("MyApp/_internal/"));
        assert!(policy.should_overwrite("MyApp/MyApp"));
    }

    #[test]
    fn unmanaged_segments_are_preserved() {
        let policy = policy();
        assert!(!policy.should_overwrite("MyApp/data/save.dat"));
        assert!(!policy.should_overwrite("MyApp/config.ini"));
        assert!(!policy.should_overwrite("MyApp/README.txt"));
    }

    #[test]
    fn root_alone_is_never_refreshed() {
        let policy = policy();
        assert!(!policy.should_overwrite("MyApp"));
        assert!(!policy.should_overwrite(""));
        assert!(!policy.should_overwrite("MyApp/"));
    }

    #[test]
    fn comparison_is_exact() {
        let policy = policy();
        assert!(!policy.should_overwrite("MyApp/Assets/logo.png"));
        assert!(!policy.should_overwrite("MyApp/assets2/logo.png"));
        assert!(!policy.should_overwrite("MyApp/MyApp.exe"));
    }

    #[test]
    fn decision_depends_only_on_second_segment() {
        let policy = policy();
        let shallow = policy.should_overwrite("MyApp/assets/a");
        let deep = policy.should_overwrite("MyApp/assets/x/y/z/very/deep.bin");
        assert_eq!(shallow, deep);

        let shallow = policy.should_overwrite("MyApp/saves/a");
        let deep = policy.should_overwrite("MyApp/saves/x/y/z.sav");
        assert_eq!(shallow, deep);
    }

    #[test]
    fn host_separators_are_not_segment_boundaries() {
        assert!(!policy().should_overwrite("MyApp\\assets\\logo.png"));
    }
}
