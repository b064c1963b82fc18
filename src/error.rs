use std::io;
use std::path::PathBuf;

/// Errors that stop a run before any file is deleted.
#[derive(Debug, thiserror::Error)]
pub enum CleanupError {
    #[error("{0}")]
    InvalidConfiguration(String),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Cannot read {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single candidate could not be deleted.
///
/// Never fatal to the run. The executor logs these and folds them into the
/// aggregate outcome.
#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    #[error("permission denied: {0}")]
    PermissionDenied(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[source] io::Error),

    #[error("unknown failure: {0}")]
    Unknown(String),
}

impl DeleteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DeleteError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

impl From<io::Error> for DeleteError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => DeleteError::PermissionDenied(err),
            // Errors without an OS category carry no I/O classification.
            io::ErrorKind::Other => DeleteError::Unknown(err.to_string()),
            _ => DeleteError::Io(err),
        }
    }
}
