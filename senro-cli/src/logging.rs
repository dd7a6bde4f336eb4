//! Structured logging for the senro CLI.
//!
//! Diagnostics go to stderr through a global `tracing` subscriber so the
//! rendered paths on stdout stay machine-readable. `RUST_LOG` selects the
//! level (default `info`) and `SENRO_LOG_FORMAT` picks `human` or `json`
//! output. Crates still logging through the `log` facade are bridged in.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "SENRO_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Output format of the diagnostic stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, including the active span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" | "" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

impl LogFormat {
    /// Reads the format from [`LOG_FORMAT_ENV`], defaulting to human output.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when the variable is not valid Unicode or
    /// names an unknown format.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

/// Errors raised while setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// An environment variable held non-Unicode data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Offending variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `SENRO_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Value supplied by the user.
        provided: String,
    },
    /// Another global subscriber was installed first.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Installs the global subscriber once per process.
///
/// Repeated calls are no-ops. When another subscriber already owns the global
/// slot it is left in place and the conflict is reported on stderr.
///
/// # Errors
/// Returns [`LoggingError`] when [`LOG_FORMAT_ENV`] is invalid.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let format = LogFormat::from_env()?;
    match install(format) {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            eprintln!("structured logging already configured elsewhere: {source}");
        }
        Err(err) => return Err(err),
    }
    let _ = INSTALLED.set(format);
    Ok(())
}

fn install(format: LogFormat) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let output = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let output = match format {
        LogFormat::Human => output.boxed(),
        LogFormat::Json => output
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // A `log` logger installed by the embedding host keeps precedence.
    let _ = LogTracer::init();
    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
