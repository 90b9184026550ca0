//! Diagnostic sink capability.
//!
//! The shim narrates each invocation (inbound event, canonical request,
//! capture, outbound envelope) through a [`Log`]. The sink is injected at
//! construction time; absence is the no-op implementation, so call sites
//! carry no conditionals.

use std::fmt;

/// A pluggable sink for diagnostic lines.
///
/// Implementations must be safe for concurrent use: the hosting
/// environment may run independent invocations in parallel, and the sink
/// is the only state they share.
pub trait Log: Send + Sync {
    /// Format and emit one line.
    fn emit(&self, line: fmt::Arguments<'_>);
}

/// Discards every line. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn emit(&self, _line: fmt::Arguments<'_>) {}
}

/// Forwards lines to [`tracing`] at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl Log for TracingLog {
    fn emit(&self, line: fmt::Arguments<'_>) {
        tracing::debug!("{line}");
    }
}
