use std::fs::{create_dir_all, File};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable holding the console log filter directives.
pub const CONSOLE_LOG_ENV: &str = "CONSOLE_LOG";
/// Environment variable holding the file log filter directives.
pub const FILE_LOG_ENV: &str = "FILE_LOG";

/// Builds and installs the global tracing subscriber of an application: a console layer writing to stderr and,
/// optionally, a layer writing to a log file.
#[derive(Default, Debug)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  log_file_path: Option<PathBuf>,
  file_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Some(log_file_path.into());
    self
  }
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }

  /// Installs the subscriber. Filters that were not set are read from [`CONSOLE_LOG_ENV`] and [`FILE_LOG_ENV`],
  /// falling back to the default filter when unset or invalid.
  pub fn build(self) -> Result<AppTracing, AppTracingError> {
    let console_filter = self.console_filter.unwrap_or_else(|| filter_from_env(CONSOLE_LOG_ENV));
    let file = self.log_file_path.map(|p| (p, self.file_filter.unwrap_or_else(|| filter_from_env(FILE_LOG_ENV))));
    AppTracing::new(console_filter, file)
  }
}

fn filter_from_env(env: &str) -> EnvFilter {
  EnvFilter::try_from_env(env).unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum AppTracingError {
  #[error("Failed to install global tracing subscriber: {0}")]
  Init(#[from] TryInitError),
}

/// Installed tracing. Keep alive for the duration of the application; dropping it flushes the log file.
pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(Option<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  fn new(console_filter: EnvFilter, file: Option<(PathBuf, EnvFilter)>) -> Result<Self, AppTracingError> {
    let layered = tracing_subscriber::registry();
    let layered = layered.with(
      tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(console_filter)
    );

    let Some((file_path, file_filter)) = file else {
      layered.try_init()?;
      return Ok(Self { _file_tracing: FileTracing::default() });
    };

    match create_log_file(&file_path) {
      Err(e) => {
        layered.try_init()?;
        tracing::warn!("Cannot log to file; could not truncate/create and open log file '{}' for writing: {}", file_path.display(), e);
        Ok(Self { _file_tracing: FileTracing::default() })
      }
      #[cfg(feature = "app_tracing_file")]
      Ok(log_file) => {
        let (non_blocking, guard) = tracing_appender::non_blocking(io::BufWriter::new(log_file));
        let layered = layered.with(
          tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(file_filter)
        );
        layered.try_init()?;
        Ok(Self { _file_tracing: FileTracing(Some(guard)) })
      }
      #[cfg(not(feature = "app_tracing_file"))]
      Ok(log_file) => {
        let layered = layered.with(
          tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(log_file))
            .with_ansi(false)
            .with_filter(file_filter)
        );
        layered.try_init()?;
        Ok(Self { _file_tracing: FileTracing })
      }
    }
  }
}

fn create_log_file(file_path: &Path) -> Result<File, io::Error> {
  if let Some(parent) = file_path.parent() {
    create_dir_all(parent)?;
  }
  File::create(file_path)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_builder_keeps_log_file_path() {
    let builder = AppTracingBuilder::default()
      .with_log_file_path_opt(Some("logs/log.txt"))
      .with_console_filter(EnvFilter::new("debug"));
    assert_eq!(builder.log_file_path.as_deref(), Some(Path::new("logs/log.txt")));
    assert!(builder.console_filter.is_some());
    assert!(builder.file_filter.is_none());

    let builder = builder.with_log_file_path_opt(None::<PathBuf>);
    assert!(builder.log_file_path.is_none());
  }
}
