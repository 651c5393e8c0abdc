//! Payload extraction engine for self-extracting installers.
//!
//! # Architecture
//!
//! - `payload.rs` - Locating the embedded archive, deriving the app base
//! - `path.rs` - Archive root stripping and zip-slip checks
//! - `policy.rs` - Managed segments and the overwrite decision
//! - `progress.rs` - Shared counters and the polling renderer loop
//! - `extract.rs` - Sequential extraction pass
//! - `context.rs` - Per-run configuration handed to the extractor
//!
//! Managed entries (`_internal/`, `assets/`, `<app>`) are made identical to
//! the payload on every run; all other entries are only created when absent.

pub use context::InstallContext;
pub use error::{Error, Result};
pub use extract::{ArchiveExtractor, install};
pub use options::ExtractOptions;
pub use path::{resolve_destination, strip_archive_root};
pub use payload::{ARCHIVE_SUFFIX, Payload, Resource};
pub use policy::{ManagedSegments, OverwritePolicy};
pub use progress::{ProgressReporter, ProgressState, SilentTracker, Snapshot, Tracker};
pub use report::{EntryOutcome, ExtractReport, ExtractedEntry};

pub mod options;
pub mod progress;
mod context;
mod error;
mod extract;
mod path;
mod payload;
mod policy;
mod report;
