use clap::Parser;

use retention_sweep::cli::Cli;
use retention_sweep::{logging, output, FsRemover, Run, TracingSink};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init_tracing(&cli.log_level, cli.log_format) {
        eprintln!("failed to initialise logging: {err}");
    }

    let report = Run::new(&cli, FsRemover, TracingSink)
        .with_policy(cli.failure_policy())
        .dry_run(cli.dry_run)
        .execute();

    output::print_report(&report);
    std::process::exit(report.signal.exit_code());
}
