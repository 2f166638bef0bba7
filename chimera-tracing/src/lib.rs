//! Utility items shared between chimera crates.

use ansi_term::Colour;
use std::{env, io};
use tracing::{Level, Metadata};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::MakeWriter,
};

pub fn println_green(txt: &str) {
    println_std_out(txt, Colour::Green);
}

pub fn println_red_err(txt: &str) {
    println_std_err(txt, Colour::Red);
}

pub fn println_yellow_err(txt: &str) {
    println_std_err(txt, Colour::Yellow);
}

fn println_std_out(txt: &str, color: Colour) {
    tracing::info!("{}", color.paint(txt));
}

fn println_std_err(txt: &str, color: Colour) {
    tracing::error!("{}", color.paint(txt));
}

const LOG_FILTER: &str = "RUST_LOG";

// ERROR and WARN go to stderr, everything else to stdout.
struct StdioTracingWriter {
    writer_mode: TracingWriterMode,
}

impl<'a> MakeWriter<'a> for StdioTracingWriter {
    type Writer = Box<dyn io::Write>;

    fn make_writer(&'a self) -> Self::Writer {
        if self.writer_mode == TracingWriterMode::Stderr {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if writes_to_stderr(&self.writer_mode, meta.level()) {
            return Box::new(io::stderr());
        }
        Box::new(io::stdout())
    }
}

fn writes_to_stderr(mode: &TracingWriterMode, level: &Level) -> bool {
    *mode == TracingWriterMode::Stderr
        || (*mode == TracingWriterMode::Stdio && level <= &Level::WARN)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TracingWriterMode {
    /// Write ERROR and WARN to stderr and everything else to stdout.
    Stdio,
    /// Write everything to stdout.
    Stdout,
    /// Write everything to stderr.
    Stderr,
}

#[derive(Debug, Default)]
pub struct TracingSubscriberOptions {
    pub verbosity: Option<u8>,
    pub silent: Option<bool>,
    pub log_level: Option<LevelFilter>,
    pub writer_mode: Option<TracingWriterMode>,
}

impl TracingSubscriberOptions {
    /// The level that overrides `RUST_LOG`, if any.
    ///
    /// An explicit log level wins over verbosity, which wins over silent mode.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level
            .or_else(|| {
                self.verbosity.and_then(|verbosity| match verbosity {
                    0 => None,
                    1 => Some(LevelFilter::DEBUG), // -v
                    _ => Some(LevelFilter::TRACE), // -vv
                })
            })
            .or_else(|| self.silent.filter(|silent| *silent).map(|_| LevelFilter::OFF))
    }
}

/// A subscriber that prints events bare, so that `info!` reads like `println!`.
///
/// `RUST_LOG` sets the minimum level, `info` when unset or invalid.
pub fn init_tracing_subscriber(options: TracingSubscriberOptions) {
    let env_filter = match env::var_os(LOG_FILTER) {
        Some(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::new("info"),
    };
    let level_filter = options.level_filter();

    let builder = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_level(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .with_target(false)
        .with_writer(StdioTracingWriter {
            writer_mode: options.writer_mode.unwrap_or(TracingWriterMode::Stdio),
        });

    // An explicit level, verbosity or silent mode overrides RUST_LOG.
    if let Some(level_filter) = level_filter {
        builder.with_max_level(level_filter).init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filter_precedence() {
        let options = TracingSubscriberOptions {
            verbosity: Some(2),
            silent: Some(true),
            log_level: Some(LevelFilter::WARN),
            ..Default::default()
        };
        assert_eq!(options.level_filter(), Some(LevelFilter::WARN));

        let options = TracingSubscriberOptions {
            verbosity: Some(1),
            silent: Some(true),
            ..Default::default()
        };
        assert_eq!(options.level_filter(), Some(LevelFilter::DEBUG));

        let options = TracingSubscriberOptions {
            verbosity: Some(0),
            silent: Some(true),
            ..Default::default()
        };
        assert_eq!(options.level_filter(), Some(LevelFilter::OFF));

        assert_eq!(TracingSubscriberOptions::default().level_filter(), None);
    }

    #[test]
    fn stdio_mode_splits_by_level() {
        assert!(writes_to_stderr(&TracingWriterMode::Stdio, &Level::ERROR));
        assert!(writes_to_stderr(&TracingWriterMode::Stdio, &Level::WARN));
        assert!(!writes_to_stderr(&TracingWriterMode::Stdio, &Level::INFO));
        assert!(!writes_to_stderr(&TracingWriterMode::Stdout, &Level::ERROR));
        assert!(writes_to_stderr(&TracingWriterMode::Stderr, &Level::TRACE));
    }
}
