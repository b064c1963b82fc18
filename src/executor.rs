use std::path::Path;

use crate::candidate::CandidateSet;
use crate::error::DeleteError;
use crate::logging::LogSink;

/// The deletion primitive.
pub trait Remover {
    fn remove(&mut self, path: &Path) -> Result<(), DeleteError>;
}

/// Deletes files from the local filesystem. Permanent, no trash.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRemover;

impl Remover for FsRemover {
    fn remove(&mut self, path: &Path) -> Result<(), DeleteError> {
        std::fs::remove_file(path).map_err(DeleteError::from)
    }
}

/// What to do after a candidate fails to delete.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Keep going and report once at the end.
    #[default]
    ContinueAndAggregate,
    /// Stop at the first failure and leave the rest in place.
    AbortOnFirstFailure,
}

/// Aggregate result of the deletion stage.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Set on the first failed deletion and never cleared.
    pub failed: bool,
    pub deleted: usize,
    pub failures: usize,
    /// Candidates already gone by the time we got to them.
    pub vanished: usize,
    /// Candidates never attempted because the run aborted.
    pub skipped: usize,
    pub freed_bytes: u64,
}

impl RunOutcome {
    fn record_failure(&mut self) {
        self.failed = true;
        self.failures += 1;
    }
}

/// Try to delete every candidate once.
///
/// Per-file failures go to `sink` and into the outcome; they never surface
/// as an error.
pub fn execute(
    candidates: CandidateSet,
    remover: &mut impl Remover,
    sink: &mut impl LogSink,
    policy: FailurePolicy,
) -> RunOutcome {
    let mut outcome = RunOutcome::default();
    let total = candidates.len();

    for (attempted, candidate) in candidates.into_iter().enumerate() {
        match remover.remove(&candidate.path) {
            Ok(()) => {
                outcome.deleted += 1;
                outcome.freed_bytes += candidate.size_bytes;
                tracing::debug!(path = %candidate.path.display(), "deleted");
            }
            Err(err) if err.is_not_found() => {
                outcome.vanished += 1;
                tracing::debug!(path = %candidate.path.display(), "already removed");
            }
            Err(err) => {
                outcome.record_failure();
                let kind = match &err {
                    DeleteError::PermissionDenied(_) => "permission denied",
                    DeleteError::Io(_) => "I/O failure",
                    DeleteError::Unknown(_) => "unknown failure",
                };
                tracing::debug!(path = %candidate.path.display(), kind, "delete failed");
                sink.warn(&format!(
                    "Failed to delete file: {} - {err}",
                    candidate.path.display()
                ));

                if policy == FailurePolicy::AbortOnFirstFailure {
                    outcome.skipped = total - attempted - 1;
                    break;
                }
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::io;
    use std::path::PathBuf;
    use std::time::SystemTime;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::candidate::Candidate;

    /// Fails on chosen paths, delegates the rest to the real filesystem.
    #[derive(Default)]
    struct FlakyRemover {
        failures: HashMap<PathBuf, fn() -> DeleteError>,
        attempts: Vec<PathBuf>,
    }

    impl FlakyRemover {
        fn fail(mut self, path: &Path, err: fn() -> DeleteError) -> Self {
            self.failures.insert(path.to_path_buf(), err);
            self
        }
    }

    impl Remover for FlakyRemover {
        fn remove(&mut self, path: &Path) -> Result<(), DeleteError> {
            self.attempts.push(path.to_path_buf());
            match self.failures.get(path) {
                Some(err) => Err(err()),
                None => FsRemover.remove(path),
            }
        }
    }

    fn denied() -> DeleteError {
        DeleteError::PermissionDenied(io::Error::from(io::ErrorKind::PermissionDenied))
    }

    fn locked() -> DeleteError {
        DeleteError::Io(io::Error::new(io::ErrorKind::WouldBlock, "file in use"))
    }

    fn unknown() -> DeleteError {
        DeleteError::Unknown("remote share went away".to_string())
    }

    fn touch(dir: &Path, name: &str, content: &str) -> Candidate {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        Candidate {
            path,
            size_bytes: content.len() as u64,
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn deletes_every_candidate() {
        let tmp = TempDir::new().unwrap();
        let set: CandidateSet = (0..3)
            .map(|i| touch(tmp.path(), &format!("{i}.log"), "abcd"))
            .collect();

        let mut sink: Vec<String> = Vec::new();
        let outcome = execute(set, &mut FsRemover, &mut sink, FailurePolicy::default());

        assert!(!outcome.failed);
        assert_eq!(outcome.deleted, 3);
        assert_eq!(outcome.freed_bytes, 12);
        assert!(sink.is_empty());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[rstest]
    #[case::permission(denied, "permission denied")]
    #[case::locked(locked, "file in use")]
    #[case::unknown(unknown, "remote share went away")]
    fn failure_is_isolated_and_logged(#[case] err: fn() -> DeleteError, #[case] detail: &str) {
        let tmp = TempDir::new().unwrap();
        let ok = touch(tmp.path(), "deletable.log", "a");
        let stuck = touch(tmp.path(), "locked.log", "b");
        let stuck_path = stuck.path.clone();
        let ok_path = ok.path.clone();

        let mut remover = FlakyRemover::default().fail(&stuck_path, err);
        let mut sink: Vec<String> = Vec::new();
        let outcome = execute(
            [ok, stuck].into_iter().collect(),
            &mut remover,
            &mut sink,
            FailurePolicy::ContinueAndAggregate,
        );

        assert!(outcome.failed);
        assert_eq!(outcome.deleted, 1);
        assert_eq!(outcome.failures, 1);
        assert_eq!(remover.attempts.len(), 2);
        assert!(!ok_path.exists());
        assert!(stuck_path.exists());

        assert_eq!(sink.len(), 1);
        assert!(sink[0].contains("locked.log"));
        assert!(sink[0].contains(detail));
    }

    #[test]
    fn abort_policy_stops_after_first_failure() {
        let tmp = TempDir::new().unwrap();
        // Candidates iterate in path order, so "a" is attempted first.
        let first = touch(tmp.path(), "a.log", "1");
        let rest = [touch(tmp.path(), "b.log", "2"), touch(tmp.path(), "c.log", "3")];
        let first_path = first.path.clone();

        let mut remover = FlakyRemover::default().fail(&first_path, denied);
        let mut sink: Vec<String> = Vec::new();
        let set: CandidateSet = std::iter::once(first).chain(rest).collect();
        let outcome = execute(set, &mut remover, &mut sink, FailurePolicy::AbortOnFirstFailure);

        assert!(outcome.failed);
        assert_eq!(outcome.deleted, 0);
        assert_eq!(outcome.skipped, 2);
        assert_eq!(remover.attempts, vec![first_path]);
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 3);
    }

    #[test]
    fn vanished_candidate_is_not_a_failure() {
        let tmp = TempDir::new().unwrap();
        let gone = touch(tmp.path(), "gone.log", "x");
        fs::remove_file(&gone.path).unwrap();

        let mut sink: Vec<String> = Vec::new();
        let outcome = execute(
            std::iter::once(gone).collect(),
            &mut FsRemover,
            &mut sink,
            FailurePolicy::default(),
        );

        assert!(!outcome.failed);
        assert_eq!(outcome.vanished, 1);
        assert_eq!(outcome.deleted, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn candidate_replaced_by_directory_fails_softly() {
        let tmp = TempDir::new().unwrap();
        let swapped = touch(tmp.path(), "swapped", "x");
        fs::remove_file(&swapped.path).unwrap();
        fs::create_dir(&swapped.path).unwrap();
        let other = touch(tmp.path(), "other.log", "y");
        let other_path = other.path.clone();

        let mut sink: Vec<String> = Vec::new();
        let outcome = execute(
            [swapped, other].into_iter().collect(),
            &mut FsRemover,
            &mut sink,
            FailurePolicy::default(),
        );

        assert!(outcome.failed);
        assert_eq!(outcome.deleted, 1);
        assert!(!other_path.exists());
        assert!(tmp.path().join("swapped").is_dir());
        assert_eq!(sink.len(), 1);
    }
}
