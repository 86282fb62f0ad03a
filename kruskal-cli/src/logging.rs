//! Logging initialisation for the kruskal CLI.
//!
//! Diagnostics go to `stderr` through a global `tracing` subscriber, leaving
//! `stdout` for the rendered spanning forest. Records emitted through the
//! `log` facade are forwarded via `tracing-log`.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    registry::LookupSpan,
    util::{SubscriberInitExt, TryInitError},
};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "KRUSKAL_LOG_FORMAT";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Output format for diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, including the active span list.
    Json,
}

/// A `KRUSKAL_LOG_FORMAT` value naming no known format.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported log format `{0}`; expected `human` or `json`")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = raw.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(UnknownLogFormat(normalised)),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A logging variable could not be read as Unicode.
    #[error("cannot read `{variable}`: {source}")]
    Environment {
        /// Variable that failed to decode.
        variable: &'static str,
        /// Lookup failure reported by the standard library.
        #[source]
        source: env::VarError,
    },
    /// `KRUSKAL_LOG_FORMAT` named an unknown format.
    #[error(transparent)]
    Format(#[from] UnknownLogFormat),
    /// The subscriber could not be registered.
    #[error("cannot register tracing subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Settings for the global subscriber.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// `RUST_LOG`-style filter directives; empty selects `info`.
    pub directives: String,
}

impl LoggingConfig {
    /// Reads `KRUSKAL_LOG_FORMAT` and `RUST_LOG`.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when `KRUSKAL_LOG_FORMAT` is not Unicode or
    /// names an unknown format.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookups(
            env::var(LOG_FORMAT_ENV),
            env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        )
    }

    fn from_lookups(
        format: Result<String, env::VarError>,
        directives: String,
    ) -> Result<Self, LoggingError> {
        let format = match format {
            Ok(raw) => raw.parse::<LogFormat>()?,
            Err(env::VarError::NotPresent) => LogFormat::default(),
            Err(source) => {
                return Err(LoggingError::Environment {
                    variable: LOG_FORMAT_ENV,
                    source,
                });
            }
        };
        Ok(Self { format, directives })
    }

    /// Builds the level filter. Unparsable directives are skipped.
    #[must_use]
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .parse_lossy(&self.directives)
    }

    /// Registers the subscriber described by `self` as the global default.
    ///
    /// # Errors
    /// Returns [`LoggingError::Subscriber`] when a global subscriber is
    /// already set.
    pub fn install(&self) -> Result<(), LoggingError> {
        // A `log` logger installed elsewhere keeps priority.
        let _ = LogTracer::init();
        tracing_subscriber::registry()
            .with(self.filter())
            .with(output_layer(self.format))
            .try_init()?;
        Ok(())
    }
}

fn output_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);
    match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    }
}

/// Configures logging from the environment once per process.
///
/// Later calls return immediately. When another subscriber already owns the
/// global slot it is kept and events flow to it instead.
///
/// # Errors
/// Returns [`LoggingError`] when the environment is invalid.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let config = LoggingConfig::from_env()?;
    if let Err(LoggingError::Subscriber(source)) = config.install() {
        tracing::debug!(%source, "keeping existing tracing subscriber");
    }
    let _ = INSTALLED.set(config.format);
    Ok(())
}

/// Returns the format chosen by [`init_logging`], if it has run.
#[must_use]
pub fn installed_format() -> Option<LogFormat> {
    INSTALLED.get().copied()
}
