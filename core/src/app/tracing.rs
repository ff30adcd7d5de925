use std::fs::{create_dir_all, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable with the console filter directives, e.g. `oxide_core=trace`.
pub const CONSOLE_FILTER_VAR: &str = "OXIDE_CONSOLE_LOG";
/// Environment variable with the log file filter directives.
pub const FILE_FILTER_VAR: &str = "OXIDE_FILE_LOG";

#[derive(Default)]
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

  pub fn with_log_file_path_opt(mut self, log_file_path: Option<PathBuf>) -> Self {
    self.log_file_path = log_file_path;
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }

  /// Installs the global subscriber: a console layer writing to stderr, and, when a log file path was given and the
  /// `app_tracing_file` feature is enabled, a non-blocking file layer. Keep the returned value alive until exit so
  /// buffered file output is flushed.
  pub fn build(self) -> AppTracing {
    let console_filter = self.console_filter.unwrap_or_else(|| filter_from_env(CONSOLE_FILTER_VAR));
    let layered = tracing_subscriber::registry()
      .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_filter(console_filter));

    let Some(log_file_path) = self.log_file_path else {
      layered.init();
      return AppTracing::default();
    };
    match open_log_file(&log_file_path) {
      None => {
        drop(self.file_filter);
        layered.init();
        tracing::warn!(path = %log_file_path.display(), "cannot log to file; the `app_tracing_file` feature is disabled");
        AppTracing::default()
      }
      Some(Err(cause)) => {
        layered.init();
        tracing::warn!(path = %log_file_path.display(), %cause, "cannot log to file; could not create log file");
        AppTracing::default()
      }
      Some(Ok(log_file)) => {
        #[cfg(feature = "app_tracing_file")] {
          let file_filter = self.file_filter.unwrap_or_else(|| filter_from_env(FILE_FILTER_VAR));
          let (non_blocking, guard) = tracing_appender::non_blocking(io::BufWriter::new(log_file));
          layered
            .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false).with_filter(file_filter))
            .init();
          AppTracing { _file_guard: Some(guard) }
        }
        #[cfg(not(feature = "app_tracing_file"))] {
          drop((log_file, self.file_filter));
          layered.init();
          AppTracing::default()
        }
      }
    }
  }
}

/// Keeps file logging alive; dropping it flushes and stops the background writer.
#[derive(Default)]
pub struct AppTracing {
  #[cfg(feature = "app_tracing_file")]
  _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

fn filter_from_env(var: &str) -> EnvFilter {
  EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Creates (truncating) the log file at `path` and its parent directories, or returns `None` without touching the
/// file system when file logging is compiled out.
fn open_log_file(path: &Path) -> Option<io::Result<File>> {
  if cfg!(feature = "app_tracing_file") {
    Some(create_log_file(path))
  } else {
    None
  }
}

fn create_log_file(path: &Path) -> io::Result<File> {
  if let Some(parent) = path.parent() {
    create_dir_all(parent)?;
  }
  File::create(path)
}
