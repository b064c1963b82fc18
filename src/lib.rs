//! Retention-based cleanup: delete the files in a directory whose last
//! modification is older than a threshold, isolating per-file failures.

pub mod candidate;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod output;
pub mod params;
pub mod report;
pub mod run;
pub mod scanner;
pub mod utils;

pub use candidate::{Candidate, CandidateSet};
pub use config::{resolve, resolve_from, CleanupConfig, Cutoff};
pub use error::{CleanupError, DeleteError};
pub use executor::{execute, FailurePolicy, FsRemover, Remover, RunOutcome};
pub use logging::{LogSink, TracingSink};
pub use params::ParameterSource;
pub use report::{report, ExitSignal, FailureKind};
pub use run::{Run, RunPhase, RunReport};
pub use scanner::scan;
