//! src/logging.rs
//! ============================================================================
//! # Logging: rolling file subscriber
//!
//! The terminal belongs to the TUI, so all output goes to a daily rolling file
//! through a non-blocking writer. Lines look like
//! `000042 INFO  [src/model/library.rs:171 galleria_core::model::library] Moved to recycle bin file_id=2`.

use std::{
    fs,
    sync::{
        OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use anyhow::{Context, Result};
use tracing::Metadata;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    prelude::*,
};

use crate::config::LogConfig;

static SEQ: OnceLock<AtomicUsize> = OnceLock::new();

pub struct LoggerBuilder {
    config: LogConfig,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: &str) -> Self {
        self.config.level = level.to_string();
        self
    }

    /// Install the global subscriber. Call **once** near the start of `main`
    /// and keep the guard alive until exit so buffered lines are flushed.
    pub fn build(self) -> Result<WorkerGuard> {
        let filter = make_filter(&self.config.level)?;

        fs::create_dir_all(&self.config.dir).with_context(|| {
            format!(
                "Failed to create log directory: {}",
                self.config.dir.display()
            )
        })?;

        SEQ.get_or_init(|| AtomicUsize::new(1));

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(self.config.file_prefix.as_str())
            .filename_suffix("log")
            .build(&self.config.dir)
            .context("Failed to create file appender")?;

        let (writer, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = fmt::layer()
            .event_format(SeqFileMod)
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(file_layer)
            .try_init()
            .context("Failed to install global tracing subscriber")?;

        Ok(guard)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `RUST_LOG` directives layered over the configured default level.
fn make_filter(level: &str) -> Result<EnvFilter> {
    let directive = level
        .parse()
        .with_context(|| format!("Invalid log level in config: {level}"))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Custom formatter: `[SEQ] LEVEL [file:line mod::path] message`
struct SeqFileMod;

impl<S, N> FormatEvent<S, N> for SeqFileMod
where
    S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut w: Writer<'_>,
        ev: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        // monotonically increasing sequence number
        let seq = SEQ
            .get()
            .map_or(0, |counter| counter.fetch_add(1, Ordering::Relaxed));

        let meta: &'static Metadata<'static> = ev.metadata();
        write!(
            w,
            "{seq:06} {:5} [{}:{} {}] ",
            meta.level(),
            meta.file().unwrap_or("??"),
            meta.line().unwrap_or(0),
            meta.module_path().unwrap_or("???"),
        )?;

        ctx.field_format().format_fields(w.by_ref(), ev)?;
        writeln!(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_levels_and_directives() {
        assert!(make_filter("info").is_ok());
        assert!(make_filter("galleria_core=debug").is_ok());
    }

    #[test]
    fn test_filter_rejects_garbage() {
        assert!(make_filter("galleria_core=loud").is_err());
    }

    #[test]
    fn test_builder_overrides_level() {
        let builder = LoggerBuilder::new().with_level("trace");
        assert_eq!(builder.config.level, "trace");
        assert_eq!(builder.config.file_prefix, "galleria");
    }
}
