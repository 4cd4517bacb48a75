use crate::error::{Result as ServerErrorResult, ServerError};

use pb_config::LogLevel;

use std::fmt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Append plain lines to a file
    File(PathBuf),
    ColoredStdout,
    /// For non-TTY stdout (systemd, docker logs)
    PlainStdout,
}

impl LogSink {
    /// A configured file takes precedence; colors only apply to stdout.
    pub fn select(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if colored => Self::ColoredStdout,
            None => Self::PlainStdout,
        }
    }
}

impl fmt::Display for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::ColoredStdout => f.write_str("stdout (colored)"),
            Self::PlainStdout => f.write_str("stdout"),
        }
    }
}

/// Install the global `log` backend.
///
/// sqlx is capped at warn so per-statement logging stays out of the
/// request log.
pub fn initialize(log_level: LogLevel, sink: LogSink) -> ServerErrorResult<()> {
    let base = Dispatch::new()
        .level(*log_level)
        .level_for("sqlx", LevelFilter::Warn);

    let dispatch = match &sink {
        LogSink::File(path) => base.format(plain_line).chain(open_log_file(path)?),
        LogSink::ColoredStdout => {
            let colors = level_colors();
            base.format(move |out, message, record| {
                out.finish(format_args!(
                    "{} {:<5} {}: {}",
                    humantime::format_rfc3339_seconds(SystemTime::now()),
                    colors.color(record.level()),
                    record.target(),
                    message
                ))
            })
            .chain(std::io::stdout())
        }
        LogSink::PlainStdout => base.format(plain_line).chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to install logger: {e}"),
    })?;

    // Ignored when a `log` backend is already installed
    tracing_log::LogTracer::init().ok();

    info!("Logging at {} to {}", *log_level, sink);

    Ok(())
}

fn plain_line(out: FormatCallback, message: &fmt::Arguments, record: &Record) {
    out.finish(format_args!(
        "{} {:<5} {}: {} [{}:{}]",
        humantime::format_rfc3339_millis(SystemTime::now()),
        record.level(),
        record.target(),
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn open_log_file(path: &Path) -> ServerErrorResult<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}
