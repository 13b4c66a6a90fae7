//! Diagnostic logging for the binaries.
//!
//! Demonstration output goes to stdout through a [`Transcript`](crate::Transcript);
//! `tracing` events go to stderr so the two never interleave in captured
//! output. `RUST_LOG` overrides the verbosity chosen on the command line.

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormattedFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

const CRATE_PREFIX: &str = "design_patterns::";

/// One line per event: level symbol, the pattern being run (when inside a
/// catalog run), the module path without the crate name, then the fields.
///
/// `[?] {name="mediator"} behavioral::mediator platform free -> occupied train="P"`
pub struct CatalogFormatter;

impl<S, N> FormatEvent<S, N> for CatalogFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };
        write!(writer, "{} ", color_func(symbol.into()))?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                let extensions = span.extensions();
                let Some(fields) = extensions.get::<FormattedFields<N>>() else {
                    continue;
                };
                if !fields.fields.is_empty() {
                    write!(writer, "{} ", format!("{{{}}}", fields.fields).magenta())?;
                }
            }
        }

        write!(writer, "{} ", short_target(meta.target()).dimmed())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// `design_patterns::behavioral::mediator` becomes `behavioral::mediator`.
pub fn short_target(target: &str) -> &str {
    target.strip_prefix(CRATE_PREFIX).unwrap_or(target)
}

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr subscriber. Safe to call more than once; later calls
/// keep the subscriber that is already installed.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(CatalogFormatter)
        .try_init();
}
