//! Log setup for heaverctl. Everything the driver reports goes through `tracing`.
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::{anyhow, bail, Context, Result};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Layer, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[cfg(debug_assertions)]
const DEFAULT_LOG_LEVEL: Level = Level::DEBUG;

#[cfg(not(debug_assertions))]
const DEFAULT_LOG_LEVEL: Level = Level::ERROR;

fn log_format(name: Option<&str>) -> Result<LogFormat> {
    match name {
        None | Some("text") => Ok(LogFormat::Text),
        Some("json") => Ok(LogFormat::Json),
        Some(unknown) => bail!("unknown log format: {unknown}"),
    }
}

/// `--log-level` beats `--debug`, which beats the build default
fn log_level(name: Option<&str>, debug: bool) -> Result<Level> {
    match name {
        Some(name) => Level::from_str(name).with_context(|| format!("invalid log level {name}")),
        None if debug => Ok(Level::DEBUG),
        None => Ok(DEFAULT_LOG_LEVEL),
    }
}

#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    pub debug: bool,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub log_format: Option<String>,
    pub systemd_log: bool,
}

impl From<&crate::Opts> for ObservabilityConfig {
    fn from(opts: &crate::Opts) -> Self {
        let global = &opts.global;
        Self {
            debug: global.debug,
            log_level: global.log_level.clone(),
            log_file: global.log.clone(),
            log_format: global.log_format.clone(),
            systemd_log: global.systemd_log,
        }
    }
}

fn writer(log_file: Option<&PathBuf>) -> Result<BoxMakeWriter> {
    match log_file {
        None => Ok(BoxMakeWriter::new(std::io::stderr)),
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
    }
}

fn fmt_layer(
    format: LogFormat,
    writer: BoxMakeWriter,
) -> Box<dyn Layer<Registry> + Send + Sync + 'static> {
    let layer = tracing_subscriber::fmt::layer().with_writer(writer);
    match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer
            .json()
            .flatten_event(true)
            .with_span_list(false)
            .boxed(),
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init<T>(config: T) -> Result<()>
where
    T: Into<ObservabilityConfig>,
{
    let config = config.into();
    let level = log_level(config.log_level.as_deref(), config.debug)?;
    let format = log_format(config.log_format.as_deref())?;
    let writer = writer(config.log_file.as_ref())?;

    let journald = if config.systemd_log {
        tracing_journald::layer()
            .map(|layer| layer.with_syslog_identifier("heaverctl".to_owned()))
            .map_err(|err| eprintln!("journald logging unavailable: {err}"))
            .ok()
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(fmt_layer(format, writer))
        .with(LevelFilter::from_level(level))
        .with(journald)
        .try_init()
        .map_err(|err| anyhow!("failed to init logger: {err}"))
}
