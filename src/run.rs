//! One run of the pipeline: resolve, scan, delete, report.

use crate::candidate::CandidateSet;
use crate::config::{self, CleanupConfig};
use crate::error::CleanupError;
use crate::executor::{self, FailurePolicy, Remover, RunOutcome};
use crate::logging::LogSink;
use crate::params::ParameterSource;
use crate::report::{self, ExitSignal};
use crate::scanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Configuring,
    Scanning,
    Executing,
    Reporting,
}

/// Everything a host needs to present the result of a run.
#[derive(Debug)]
pub struct RunReport {
    pub signal: ExitSignal,
    /// Last stage entered before reporting.
    pub last_phase: RunPhase,
    pub config: Option<CleanupConfig>,
    pub candidates: usize,
    /// Set once the executor has run.
    pub outcome: Option<RunOutcome>,
    /// Dry runs only: what would have been deleted.
    pub pending: Option<CandidateSet>,
}

/// A single stateless run. Built, executed once, then dropped.
pub struct Run<P, R, S> {
    params: P,
    remover: R,
    sink: S,
    policy: FailurePolicy,
    dry_run: bool,
    phase: RunPhase,
}

impl<P, R, S> Run<P, R, S>
where
    P: ParameterSource,
    R: Remover,
    S: LogSink,
{
    pub fn new(params: P, remover: R, sink: S) -> Self {
        Self {
            params,
            remover,
            sink,
            policy: FailurePolicy::default(),
            dry_run: false,
            phase: RunPhase::Configuring,
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Scan and list candidates without deleting anything.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub fn execute(mut self) -> RunReport {
        let mut report = RunReport {
            signal: ExitSignal::Succeeded,
            last_phase: RunPhase::Configuring,
            config: None,
            candidates: 0,
            outcome: None,
            pending: None,
        };

        let result = self.drive(&mut report);
        report.last_phase = self.phase;

        self.enter(RunPhase::Reporting);
        report.signal = report::report(result);

        match &report.signal {
            ExitSignal::Succeeded => tracing::info!("cleanup finished"),
            ExitSignal::Failed { kind, message } => {
                tracing::error!(?kind, "{message}");
            }
        }

        report
    }

    fn drive(&mut self, report: &mut RunReport) -> Result<RunOutcome, CleanupError> {
        self.enter(RunPhase::Configuring);
        let config = config::resolve_from(&self.params)?;
        // One instant for the whole scan.
        let cutoff = config.cutoff();
        tracing::info!(
            directory = %config.directory.display(),
            max_age_days = config.max_age_days,
            dry_run = self.dry_run,
            "starting cleanup"
        );
        report.config = Some(config.clone());

        self.enter(RunPhase::Scanning);
        let candidates = scanner::scan(&config.directory, cutoff)?;
        report.candidates = candidates.len();

        if candidates.is_empty() {
            self.sink.log("No files to delete");
        } else {
            let names: Vec<String> = candidates
                .paths()
                .map(|p| p.display().to_string())
                .collect();
            self.sink.log(&format!("Files to delete: {}", names.join(", ")));
        }

        if self.dry_run {
            report.pending = Some(candidates);
            return Ok(RunOutcome::default());
        }

        self.enter(RunPhase::Executing);
        let outcome = executor::execute(candidates, &mut self.remover, &mut self.sink, self.policy);
        tracing::info!(
            deleted = outcome.deleted,
            failures = outcome.failures,
            vanished = outcome.vanished,
            skipped = outcome.skipped,
            freed_bytes = outcome.freed_bytes,
            "deletion complete"
        );
        report.outcome = Some(outcome.clone());

        Ok(outcome)
    }

    fn enter(&mut self, phase: RunPhase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "run phase");
        self.phase = phase;
    }
}
