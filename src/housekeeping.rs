//! Small project utilities: emptying output directories and counting source
//! lines. Neither touches the persisted settings.

use crate::error::{Result, WizardError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub removed: usize,
    pub failed: usize,
}

impl CleanReport {
    fn merge(self, other: CleanReport) -> CleanReport {
        CleanReport {
            removed: self.removed + other.removed,
            failed: self.failed + other.failed,
        }
    }
}

/// Deletes every entry inside `dir`, keeping `dir` itself.
///
/// A missing directory is not an error. Entries that cannot be removed are
/// logged and counted, and the sweep carries on.
pub fn empty_directory(dir: &Path) -> Result<CleanReport> {
    let mut report = CleanReport::default();
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "Nothing to clean");
        return Ok(report);
    }

    let entries = fs::read_dir(dir).map_err(|source| WizardError::CleanupFailed {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Couldn't read directory entry");
                report.failed += 1;
                continue;
            }
        };

        let removal = match fs::symlink_metadata(&path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&path),
            Ok(_) => fs::remove_file(&path),
            Err(e) => Err(e),
        };

        match removal {
            Ok(()) => report.removed += 1,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Couldn't delete entry");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

/// Empties each directory in turn and sums the results.
pub fn clean_directories(dirs: &[&Path]) -> Result<CleanReport> {
    dirs.iter().try_fold(CleanReport::default(), |acc, dir| {
        Ok(acc.merge(empty_directory(dir)?))
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCount {
    pub files: Vec<(PathBuf, usize)>,
    pub total: usize,
}

/// Counts lines in every file under `root` whose extension is in
/// `extensions` (compared case-insensitively, without the dot).
///
/// Unreadable files are warned about and count as zero lines. Directories
/// that cannot be walked are warned about and skipped.
pub fn count_source_lines(root: &Path, extensions: &[String]) -> Result<LineCount> {
    if !root.is_dir() {
        return Err(WizardError::SourceScanFailed {
            path: root.to_path_buf(),
        });
    }

    let mut count = LineCount::default();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() || !has_source_extension(entry.path(), extensions) {
            continue;
        }

        let lines = match fs::read(entry.path()) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).lines().count(),
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "Error reading file");
                0
            }
        };

        count.total += lines;
        count.files.push((entry.into_path(), lines));
    }

    Ok(count)
}

fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_lowercase();
            extensions.iter().any(|allowed| *allowed == e)
        })
        .unwrap_or(false)
}
