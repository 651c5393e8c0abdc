use std::fs::{self, File};
use std::io::{self, Read, Seek, Write};
use std::path::{Path, PathBuf};
use std::thread;

use tracing::{debug, info};
use zip::ZipArchive;

use crate::context::InstallContext;
use crate::error::{Error, Result};
use crate::options::ExtractOptions;
use crate::path::resolve_destination;
use crate::payload::{Payload, Resource};
use crate::progress::{ProgressReporter, ProgressState, Tracker};
use crate::report::{EntryOutcome, ExtractReport, ExtractedEntry};

/// Locate the payload among `resources` and extract it.
///
/// `target` falls back to the payload's app base when `None`.
pub fn install<T: Tracker>(
    resources: &[Resource<'_>],
    target: Option<PathBuf>,
    options: ExtractOptions,
    tracker: &T,
) -> Result<ExtractReport> {
    let payload = Payload::locate(resources)?;
    let ctx = InstallContext::new(payload, target, options);
    ArchiveExtractor::new(&ctx).extract(tracker)
}

pub struct ArchiveExtractor<'c, 'a> {
    ctx: &'c InstallContext<'a>,
}

impl<'c, 'a> ArchiveExtractor<'c, 'a> {
    pub fn new(ctx: &'c InstallContext<'a>) -> Self {
        Self { ctx }
    }

    /// Run one full pass over the payload, in archive order.
    ///
    /// The first failure aborts the pass. Files written before it stay on
    /// disk; a later run reconciles them through the same overwrite policy.
    pub fn extract<T: Tracker>(&self, tracker: &T) -> Result<ExtractReport> {
        let payload = self.ctx.payload();
        let mut archive = payload.open()?;
        let total_bytes = total_size(&mut archive)?;

        info!(
            payload = payload.file_name(),
            dest = %self.ctx.target().display(),
            entries = archive.len(),
            total_bytes,
            "extracting payload"
        );

        let state = ProgressState::new(total_bytes);
        let result = thread::scope(|scope| {
            // Nothing to measure against, nothing to draw.
            let renderer = (total_bytes > 0).then(|| {
                let reporter =
                    ProgressReporter::new(&state, tracker, self.ctx.options().poll_interval);
                scope.spawn(move || reporter.run())
            });

            let result = self.extract_entries(&mut archive, &state);
            state.finish();
            if let Some(handle) = renderer {
                let _ = handle.join();
            }
            result
        });

        if total_bytes > 0 {
            tracker.finish(state.snapshot());
        }

        let entries = result?;
        info!(
            written = entries.iter().filter(|e| e.outcome == EntryOutcome::Written).count(),
            refreshed = entries.iter().filter(|e| e.outcome == EntryOutcome::Refreshed).count(),
            preserved = entries.iter().filter(|e| e.outcome == EntryOutcome::Preserved).count(),
            "payload extracted"
        );

        Ok(ExtractReport {
            app_base: payload.app_base().to_owned(),
            target: self.ctx.target().to_path_buf(),
            total_bytes,
            entries,
        })
    }

    fn extract_entries<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        state: &ProgressState,
    ) -> Result<Vec<ExtractedEntry>> {
        let target = self.ctx.target();
        let policy = self.ctx.policy();
        let options = self.ctx.options();
        let mut entries = Vec::with_capacity(archive.len());

        for index in 0..archive.len() {
            let mut file = archive
                .by_index(index)
                .map_err(|source| Error::ArchiveCorrupt { index, source })?;

            let name = file.name().to_owned();
            let size = file.size();
            let is_directory = file.is_dir();
            let destination = resolve_destination(target, &name)?;
            let overwrite = policy.should_overwrite(&name);
            let exists = destination.exists();
            let outcome = outcome_of(exists, overwrite);

            if is_directory {
                if outcome != EntryOutcome::Preserved {
                    create_dir_all(&destination)?;
                }
                state.advance(size);
            } else {
                if let Some(parent) = destination.parent() {
                    create_dir_all(parent)?;
                }

                if outcome == EntryOutcome::Preserved {
                    debug!(entry = %name, "keeping existing file");
                    state.advance(size);
                } else {
                    if outcome == EntryOutcome::Refreshed {
                        debug!(entry = %name, "refreshing managed file");
                    }
                    let mode = file.unix_mode();
                    write_entry(&mut file, &destination, state, options.chunk_size)?;
                    apply_mode(&destination, mode)?;
                    if let Some(delay) = options.file_delay {
                        thread::sleep(delay);
                    }
                }
            }

            entries.push(ExtractedEntry {
                original_path: name,
                target_path: destination,
                size,
                is_directory,
                outcome,
            });
        }

        Ok(entries)
    }
}

fn outcome_of(exists: bool, overwrite: bool) -> EntryOutcome {
    match (exists, overwrite) {
        (false, _) => EntryOutcome::Written,
        (true, true) => EntryOutcome::Refreshed,
        (true, false) => EntryOutcome::Preserved,
    }
}

/// Sum of the uncompressed sizes recorded in the central directory.
fn total_size<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<u64> {
    (0..archive.len()).try_fold(0u64, |total, index| {
        let file = archive
            .by_index_raw(index)
            .map_err(|source| Error::ArchiveCorrupt { index, source })?;
        Ok(total.saturating_add(file.size()))
    })
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source,
    })
}

fn write_entry<R: Read>(
    reader: &mut R,
    destination: &Path,
    state: &ProgressState,
    chunk_size: usize,
) -> Result<()> {
    let failed = |source| Error::ExtractionFailed {
        path: destination.to_path_buf(),
        source,
    };

    let mut out = File::create(destination).map_err(failed)?;
    let mut buffer = vec![0u8; chunk_size];
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(failed(e)),
        };
        out.write_all(&buffer[..n]).map_err(failed)?;
        state.advance(n as u64);
    }
    out.flush().map_err(failed)
}

/// Keep executable bits recorded in the archive; everything else ends up at
/// least owner read/write so a later refresh can replace it.
#[cfg(unix)]
fn apply_mode(path: &Path, mode: Option<u32>) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let Some(mode) = mode else {
        return Ok(());
    };
    let mode = mode & 0o777;
    let mode = if mode & 0o111 != 0 {
        mode | 0o600
    } else {
        mode | 0o644
    };

    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|source| {
        Error::ExtractionFailed {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: Option<u32>) -> Result<()> {
    Ok(())
}
