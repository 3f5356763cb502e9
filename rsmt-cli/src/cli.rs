//! Command-line interface orchestration for the rsmt router.
//!
//! The CLI takes exactly two positional arguments, a benchmark XML path and a
//! solution XML path, and runs the full read -> solve -> write pipeline
//! between them.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rsmt_core::{Smt, SmtError};
use rsmt_xml::{XmlError, read_benchmark, write_solution};
use thiserror::Error;

/// Positional arguments accepted by the `rsmt` binary.
#[derive(Debug, Parser, Clone)]
#[command(name = "rsmt", about = "Build a rectilinear Steiner tree from a benchmark XML file.")]
pub struct Cli {
    /// Path to the input benchmark XML document.
    pub input: PathBuf,
    /// Path to write the solution XML document to.
    pub output: PathBuf,
}

/// Errors surfaced while executing the `rsmt` pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be read.
    #[error("failed to read `{path}`: {source}")]
    ReadInput {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: std::io::Error,
    },
    /// The benchmark document was malformed.
    #[error(transparent)]
    Benchmark(#[from] XmlError),
    /// The solver rejected a pin or failed to connect the tree.
    #[error(transparent)]
    Solve(#[from] SmtError),
    /// The solution document could not be written.
    #[error("failed to write `{path}`: {source}")]
    WriteOutput {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: std::io::Error,
    },
}

/// Summarises the outcome of running the pipeline, for diagnostic logging.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Number of pins read from the benchmark.
    pub pin_count: usize,
    /// Number of points in the finalized solution.
    pub point_count: usize,
    /// Number of routed segments in the finalized solution.
    pub edge_count: usize,
    /// Total Manhattan length of the committed tree, before finalization.
    pub tree_length: usize,
}

/// Executes the CLI command represented by `cli`: reads the benchmark, builds
/// the tree, and writes the solution.
///
/// # Errors
/// Returns [`CliError`] when reading, solving, or writing fails.
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let raw = fs::read_to_string(&cli.input).map_err(|source| CliError::ReadInput {
        path: cli.input.clone(),
        source,
    })?;
    let benchmark = read_benchmark(&raw)?;

    let mut smt = Smt::new(benchmark.grid_size(), benchmark.pins().len());
    for &(x, y) in benchmark.pins() {
        smt.add_pin(x, y)?;
    }
    let tree_length = smt.build()?;

    let xml = write_solution(
        benchmark.grid_size(),
        benchmark.pins().len(),
        smt.points(),
        smt.edges(),
    )?;
    fs::write(&cli.output, &xml).map_err(|source| CliError::WriteOutput {
        path: cli.output.clone(),
        source,
    })?;

    Ok(ExecutionSummary {
        pin_count: benchmark.pins().len(),
        point_count: smt.points().len(),
        edge_count: smt.edges().len(),
        tree_length,
    })
}
