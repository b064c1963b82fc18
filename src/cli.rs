use clap::Parser;

use crate::executor::FailurePolicy;
use crate::logging::LogFormat;
use crate::params::{self, ParameterSource};

#[derive(Debug, Parser)]
#[command(
    name = "retention-sweep",
    about = "Delete files older than a retention threshold from a directory",
    version
)]
pub struct Cli {
    /// Delete files last modified more than this many days ago
    #[arg(long, env = "RETENTION_MAX_AGE_DAYS", allow_hyphen_values = true)]
    pub max_age_days: Option<String>,

    /// Directory to clean (direct children only)
    #[arg(long, env = "RETENTION_DIRECTORY")]
    pub directory: Option<String>,

    /// List what would be deleted without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Stop at the first file that cannot be deleted
    #[arg(long)]
    pub fail_fast: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.fail_fast {
            FailurePolicy::AbortOnFirstFailure
        } else {
            FailurePolicy::ContinueAndAggregate
        }
    }
}

// Flags stay raw strings so the resolver owns validation and its messages.
impl ParameterSource for Cli {
    fn parameter(&self, name: &str) -> Option<String> {
        match name {
            params::MAX_AGE_DAYS => self.max_age_days.clone(),
            params::DIRECTORY => self.directory.clone(),
            _ => None,
        }
    }
}
