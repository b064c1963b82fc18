use colored::Colorize;

use crate::run::RunReport;
use crate::utils;

pub fn print_scan_header(label: &str) {
    eprintln!("{}", format!("=== {label} ===").bold().white());
}

pub fn print_candidate(path: &str, size: &str) {
    eprintln!("  {}  {}", path.dimmed(), size.yellow());
}

pub fn print_dry_run_footer(count: usize, total: &str) {
    eprintln!(
        "{}",
        format!("Dry run: {count} file(s), {total} would be deleted. Run without --dry-run to delete.")
            .yellow()
            .bold()
    );
}

pub fn print_clean_complete(deleted: usize, freed: &str) {
    eprintln!(
        "{} {}",
        "Cleaned!".green().bold(),
        format!("{deleted} file(s) deleted, {freed} freed.").green()
    );
}

pub fn print_failure(message: &str) {
    eprintln!("{} {}", "Failed:".red().bold(), message.red());
}

/// Human-readable summary of a finished run, on stderr.
pub fn print_report(report: &RunReport) {
    if let Some(pending) = &report.pending {
        let label = report
            .config
            .as_ref()
            .map(|c| utils::display_path(&c.directory))
            .unwrap_or_default();
        print_scan_header(&label);
        for candidate in pending.iter() {
            print_candidate(
                &utils::display_path(&candidate.path),
                &utils::format_size(candidate.size_bytes),
            );
        }
        print_dry_run_footer(pending.len(), &utils::format_size(pending.total_bytes()));
    }

    if let Some(outcome) = &report.outcome {
        if outcome.deleted > 0 {
            print_clean_complete(outcome.deleted, &utils::format_size(outcome.freed_bytes));
        }
    }

    if let Some(message) = report.signal.message() {
        print_failure(message);
    }
}
