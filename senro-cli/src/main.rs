//! CLI entry point for running senro walks over a mesh file.
//!
//! Parses arguments with clap, drives the walk engine for the requested frames,
//! renders the collected paths to stdout, and maps failures to a non-zero exit
//! code after logging them with their stable error code.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use senro_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use senro_core::GraphErrorCode;
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, graph_code) = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Core(core) => Some((
                    Some(core.code().as_str()),
                    core.graph_code().map(GraphErrorCode::as_str),
                )),
                CliError::Graph(graph) => Some((Some(graph.code().as_str()), None)),
                _ => None,
            })
            .unwrap_or((None, None));

        error!(
            error = %err,
            code = code.map(field::display),
            graph_code = graph_code.map(field::display),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
