use std::path::PathBuf;

/// What happened to one archive entry's destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Destination was absent and has been created.
    Written,
    /// Destination existed and was replaced from the payload.
    Refreshed,
    /// Destination existed and was left untouched.
    Preserved,
}

#[derive(Clone, Debug)]
pub struct ExtractedEntry {
    pub original_path: String,
    pub target_path: PathBuf,
    pub size: u64,
    pub is_directory: bool,
    pub outcome: EntryOutcome,
}

#[derive(Clone, Debug)]
pub struct ExtractReport {
    pub app_base: String,
    pub target: PathBuf,
    pub total_bytes: u64,
    pub entries: Vec<ExtractedEntry>,
}

impl ExtractReport {
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self, outcome: EntryOutcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    pub fn entry(&self, original_path: &str) -> Option<&ExtractedEntry> {
        self.entries.iter().find(|e| e.original_path == original_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, outcome: EntryOutcome) -> ExtractedEntry {
        ExtractedEntry {
            original_path: path.to_string(),
            target_path: PathBuf::from(path),
            size: 1,
            is_directory: false,
            outcome,
        }
    }

    #[test]
    fn counts_by_outcome() {
        let report = ExtractReport {
            app_base: "MyApp".to_string(),
            target: PathBuf::from("MyApp"),
            total_bytes: 3,
            entries: vec![
                entry("MyApp/assets/a", EntryOutcome::Refreshed),
                entry("MyApp/data/b", EntryOutcome::Preserved),
                entry("MyApp/data/c", EntryOutcome::Written),
            ],
        };
        assert_eq!(report.entry_count(), 3);
        assert_eq!(report.count(EntryOutcome::Preserved), 1);
        assert_eq!(report.count(EntryOutcome::Refreshed), 1);
        assert!(report.entry("MyApp/data/c").is_some());
        assert!(report.entry("MyApp/data/missing").is_none());
    }
}
