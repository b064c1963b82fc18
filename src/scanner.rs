use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::candidate::{Candidate, CandidateSet};
use crate::config::Cutoff;
use crate::error::CleanupError;

/// Select the direct entries of `directory` last modified before `cutoff`.
///
/// Subdirectories are neither candidates nor descended into. Symlinks are not
/// followed and are judged by their own timestamp. Read-only.
pub fn scan(directory: &Path, cutoff: Cutoff) -> Result<CandidateSet, CleanupError> {
    if !directory.is_dir() {
        return Err(CleanupError::DirectoryNotFound(directory.to_path_buf()));
    }

    let mut candidates = CandidateSet::new();

    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Failing to open the directory itself is fatal.
            Err(err) if err.depth() == 0 => {
                return Err(CleanupError::Scan {
                    path: directory.to_path_buf(),
                    source: io::Error::from(err),
                });
            }
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        // Single metadata call per entry; the set is a snapshot from here on.
        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(err) => {
                tracing::debug!(path = %entry.path().display(), error = %err, "entry vanished during scan");
                continue;
            }
        };

        let modified = match meta.modified() {
            Ok(modified) => modified,
            Err(err) => {
                tracing::debug!(path = %entry.path().display(), error = %err, "no modification time");
                continue;
            }
        };

        if !cutoff.is_expired(modified) {
            continue;
        }

        candidates.insert(Candidate {
            path: entry.into_path(),
            size_bytes: meta.len(),
            modified,
        });
    }

    tracing::debug!(
        directory = %directory.display(),
        candidates = candidates.len(),
        "scan complete"
    );

    Ok(candidates)
}
