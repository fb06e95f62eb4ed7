//! Logger setup for the command-line binary.
//!
//! Library code only emits through the `log` macros; [`init_logger`] wires
//! them to `env_logger` with the options chosen on the command line.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::ValueEnum;
use env_logger::{Builder, Target, WriteStyle};
use log::{Level, LevelFilter};

use crate::{Error, Result};

/// Minimum severity that gets logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// `compact` prints `LEVEL message`; `pretty` adds the module target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

impl LogFormat {
    /// Renders one record body (without timestamp) in this layout.
    pub fn line(self, level: Level, target: &str, message: &fmt::Arguments<'_>) -> String {
        let tag = level.as_str();
        match self {
            LogFormat::Compact => format!("{tag} {message}"),
            LogFormat::Pretty => format!("{tag} [{target}] {message}"),
        }
    }
}

/// Logger configuration collected from the command line.
///
/// A set `RUST_LOG` variable refines the filter on top of `level`.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Prefix each line with a millisecond timestamp.
    pub timestamp: bool,
    /// Write log lines here instead of stderr.
    pub file: Option<PathBuf>,
}

impl LogOptions {
    fn builder(&self) -> Result<Builder> {
        let LogOptions {
            level,
            format,
            timestamp,
            ref file,
        } = *self;

        let mut builder = Builder::new();
        builder
            .filter_level(level.into())
            .parse_default_env()
            .write_style(WriteStyle::Never)
            .format(move |buf, record| {
                let body = format.line(record.level(), record.target(), record.args());
                if timestamp {
                    writeln!(buf, "{} {body}", buf.timestamp_millis())
                } else {
                    writeln!(buf, "{body}")
                }
            });

        let target = match file {
            Some(path) => {
                let sink = File::create(path).map_err(|e| Error::open(path, e))?;
                Target::Pipe(Box::new(sink))
            }
            None => Target::Stderr,
        };
        builder.target(target);
        Ok(builder)
    }
}

/// Installs the global logger.
///
/// # Errors
///
/// [`Error::Open`] if the log file cannot be created, [`Error::Logger`] if
/// a logger is already installed.
pub fn init_logger(options: &LogOptions) -> Result<()> {
    options
        .builder()?
        .try_init()
        .map_err(|e| Error::Logger(e.to_string()))
}
