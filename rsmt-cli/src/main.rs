//! CLI entry point for building a rectilinear Steiner tree from a benchmark.
//!
//! Parses the two positional arguments, runs the read -> solve -> write
//! pipeline, and maps failures to process exit codes. Logging is initialized
//! eagerly so subsequent operations can emit structured diagnostics via
//! `tracing`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use rsmt_cli::{
    cli::{Cli, ExecutionSummary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, info};

/// Exit code for a malformed command line (wrong number of arguments).
const EXIT_WRONG_ARGS: u8 = 1;
/// Exit code for a malformed benchmark, or any pipeline failure past parsing.
const EXIT_PIPELINE_FAILED: u8 = 2;

/// Runs the read -> solve -> write pipeline, wrapping failures with the
/// stage that produced them so the logged error carries a full cause chain.
fn try_main(cli: Cli) -> Result<ExecutionSummary> {
    run_cli(cli).context("failed to build a solution for the benchmark")
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::from(EXIT_PIPELINE_FAILED);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(EXIT_WRONG_ARGS);
        }
    };

    match try_main(cli) {
        Ok(summary) => {
            info!(
                pin_count = summary.pin_count,
                point_count = summary.point_count,
                edge_count = summary.edge_count,
                tree_length = summary.tree_length,
                "solved benchmark"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "failed to build solution");
            ExitCode::from(EXIT_PIPELINE_FAILED)
        }
    }
}

/// Emit a fallback diagnostic to stderr when tracing initialization fails.
#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
