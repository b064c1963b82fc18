use crate::error::CleanupError;
use crate::executor::RunOutcome;

/// Message for a run where at least one deletion failed. Per-file detail is
/// only in the log.
pub const DELETIONS_FAILED: &str = "Failed to delete some files. Check the log output for details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidConfiguration,
    DirectoryNotFound,
    Unexpected,
    DeletionsFailed,
}

/// Final signal handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitSignal {
    Succeeded,
    Failed { kind: FailureKind, message: String },
}

impl ExitSignal {
    pub fn is_success(&self) -> bool {
        matches!(self, ExitSignal::Succeeded)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ExitSignal::Succeeded => None,
            ExitSignal::Failed { message, .. } => Some(message),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ExitSignal::Succeeded => 0,
            ExitSignal::Failed { kind, .. } => match kind {
                FailureKind::DeletionsFailed => 1,
                FailureKind::InvalidConfiguration => 2,
                FailureKind::DirectoryNotFound => 3,
                FailureKind::Unexpected => 4,
            },
        }
    }
}

/// Turn the result of a run into its exit signal.
pub fn report(result: Result<RunOutcome, CleanupError>) -> ExitSignal {
    match result {
        Ok(outcome) if outcome.failed => ExitSignal::Failed {
            kind: FailureKind::DeletionsFailed,
            message: DELETIONS_FAILED.to_string(),
        },
        Ok(_) => ExitSignal::Succeeded,
        Err(err) => {
            let kind = match &err {
                CleanupError::InvalidConfiguration(_) => FailureKind::InvalidConfiguration,
                CleanupError::DirectoryNotFound(_) => FailureKind::DirectoryNotFound,
                CleanupError::Scan { .. } => FailureKind::Unexpected,
            };
            ExitSignal::Failed {
                kind,
                message: format!("Something went wrong: {err}"),
            }
        }
    }
}
