//! Logger setup
//!
//! Built on `tracing-subscriber`:
//! - Console output with color control
//! - A single log file in full, compact or JSON format
//! - A reloadable level filter so verbosity can change at runtime

pub mod config;
pub mod error;


pub use config::*;
pub use error::LoggerError;

use std::fs::{self, File, OpenOptions};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, registry::LookupSpan, reload,
    util::SubscriberInitExt,
};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Changes the active filter of an installed logger
#[derive(Clone)]
pub struct LogLevelHandle {
    inner: Arc<reload::Handle<EnvFilter, Registry>>,
}

impl LogLevelHandle {
    pub(crate) fn new(handle: reload::Handle<EnvFilter, Registry>) -> Self {
        Self {
            inner: Arc::new(handle),
        }
    }

    /// Swaps in a new filter. Accepts `EnvFilter` directives such as `info,pushover_rs=debug`.
    pub fn set_level(&self, level: &str) -> Result<(), LoggerError> {
        if level.trim().is_empty() {
            return Err(LoggerError::filter("log level cannot be empty"));
        }
        let filter = EnvFilter::try_new(level.trim())
            .map_err(|e| LoggerError::filter(format!("invalid directive '{}': {}", level, e)))?;
        self.inner
            .reload(filter)
            .map_err(|e| LoggerError::filter(e.to_string()))
    }

    /// The active filter rendered as directives, `None` once the subscriber is gone
    pub fn current_level(&self) -> Option<String> {
        self.inner.with_current(|filter| filter.to_string()).ok()
    }
}

impl std::fmt::Debug for LogLevelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogLevelHandle")
            .field("level", &self.current_level())
            .finish()
    }
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<LogLevelHandle> {
    config.validate()?;

    let filter = EnvFilter::try_new(config.level.trim()).unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(build_layers(&config)?)
        .try_init()?;

    Ok(LogLevelHandle::new(handle))
}

/// Output layers for the enabled sinks.
///
/// The file layer comes first so the console's ANSI setting does not leak
/// into file output (tokio-rs/tracing#1817).
pub(crate) fn build_layers<S>(config: &LoggerConfig) -> anyhow::Result<Vec<BoxedLayer<S>>>
where
    S: Subscriber + for<'a> LookupSpan<'a> + Send + Sync + 'static,
{
    let mut layers = Vec::with_capacity(2);

    if config.file.enabled {
        layers.push(file_layer(&config.file)?);
    }
    if config.console.enabled {
        layers.push(console_layer(&config.console));
    }

    Ok(layers)
}

fn console_layer<S>(config: &ConsoleConfig) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + Send + Sync + 'static,
{
    let use_ansi = config.colored && std::io::stdout().is_terminal();

    fmt::layer()
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true)
        .boxed()
}

fn file_layer<S>(config: &FileConfig) -> anyhow::Result<BoxedLayer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a> + Send + Sync + 'static,
{
    let writer = Arc::new(open_log_file(&config.path, config.append)?);

    let layer = match config.format {
        LogFormat::Full => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .compact()
            .with_writer(writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_ansi(false)
            .json()
            .with_writer(writer)
            .boxed(),
    };

    Ok(layer)
}

/// Opens the log file, creating missing parent directories
pub(crate) fn open_log_file(path: &Path, append: bool) -> Result<File, LoggerError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    Ok(options.open(path)?)
}
