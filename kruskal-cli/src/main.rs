//! Entry point for the `kruskal` binary.
//!
//! Logging comes up before argument parsing so every failure after that point
//! is reported as a `tracing` event tagged with its stable error code. The
//! rendered forest is the only thing written to stdout.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use kruskal_cli::{
    cli::{Cli, CliError, ExecutionSummary, render_summary, run_cli},
    logging::{LoggingError, init_logging},
};
use kruskal_core::KruskalErrorCode;
use tracing::{error, field};

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(
                error = %format_args!("{err:#}"),
                code = error_code(&err).map(|code| field::display(code.as_str())),
                "command execution failed"
            );
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let summary = run_cli(Cli::parse()).context("failed to compute spanning forest")?;
    write_summary(&summary)
}

fn write_summary(summary: &ExecutionSummary) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    render_summary(summary, &mut out).context("failed to render spanning forest")?;
    out.flush().context("failed to flush stdout")
}

/// Finds the stable code of the core failure behind `err`, if any.
fn error_code(err: &anyhow::Error) -> Option<KruskalErrorCode> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CliError>())
        .map(|cli_error| match cli_error {
            CliError::Core(core) => core.code(),
        })
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is unavailable when its own setup fails"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("kruskal: logging setup failed: {err}");
}
