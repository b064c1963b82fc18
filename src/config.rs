use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use crate::error::CleanupError;
use crate::params::{self, ParameterSource};

const SECS_PER_DAY: u64 = 86_400;

/// Validated inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupConfig {
    pub max_age_days: i64,
    pub directory: PathBuf,
}

/// The single instant every entry of a run is judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cutoff {
    At(SystemTime),
    /// Threshold reaches before the start of the clock: nothing is old enough.
    BeforeAll,
    /// Threshold reaches past the end of the clock: everything is old enough.
    AfterAll,
}

impl Cutoff {
    /// True when an entry last modified at `modified` is due for deletion.
    /// Entries modified exactly at the cutoff are kept.
    pub fn is_expired(&self, modified: SystemTime) -> bool {
        match self {
            Cutoff::At(cutoff) => modified < *cutoff,
            Cutoff::BeforeAll => false,
            Cutoff::AfterAll => true,
        }
    }
}

impl CleanupConfig {
    pub fn cutoff(&self) -> Cutoff {
        self.cutoff_at(SystemTime::now())
    }

    /// `now` minus the threshold. Zero yields `now`, negative values land in
    /// the future.
    pub fn cutoff_at(&self, now: SystemTime) -> Cutoff {
        let span = Duration::from_secs(self.max_age_days.unsigned_abs().saturating_mul(SECS_PER_DAY));
        if self.max_age_days >= 0 {
            now.checked_sub(span).map_or(Cutoff::BeforeAll, Cutoff::At)
        } else {
            now.checked_add(span).map_or(Cutoff::AfterAll, Cutoff::At)
        }
    }
}

/// Validate the two raw inputs of a run.
pub fn resolve(
    age_days_input: Option<&str>,
    directory_input: Option<&str>,
) -> Result<CleanupConfig, CleanupError> {
    let max_age_days = age_days_input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| {
            CleanupError::InvalidConfiguration(
                "invalid or missing age threshold, must be a valid integer".to_string(),
            )
        })?;

    let directory = directory_input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            CleanupError::InvalidConfiguration("missing target directory path".to_string())
        })?;

    Ok(CleanupConfig {
        max_age_days,
        directory,
    })
}

/// Look both inputs up by name and validate them.
pub fn resolve_from(source: &impl ParameterSource) -> Result<CleanupConfig, CleanupError> {
    let age = source.parameter(params::MAX_AGE_DAYS);
    let directory = source.parameter(params::DIRECTORY);
    resolve(age.as_deref(), directory.as_deref())
}
