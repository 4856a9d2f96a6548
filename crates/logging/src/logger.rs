//! crates/logging/src/logger.rs
//! The capability trait shared by every logger variant.

use std::fmt;

use crate::levels::Severity;

/// Capability surface shared by all logger variants.
///
/// Callers depend only on this trait; which variant is behind it (immediate
/// stream output or deferred buffering) is fixed once at construction and
/// invisible afterwards. Implementors provide [`enabled`](Self::enabled) and
/// [`log`](Self::log); the per-severity methods are derived from those.
///
/// Logging calls never return errors and never panic: sink failures are
/// absorbed by the implementation, and format/argument mismatches cannot
/// occur because [`format_args!`](::core::format_args) is checked at compile
/// time.
///
/// The `*f` variants take pre-built [`fmt::Arguments`]; the
/// [`debugf!`](crate::debugf) family of macros wraps the `format_args!` call:
///
/// ```
/// use logging::{Logger, Severity, StreamLogger, infof};
///
/// let logger = StreamLogger::without_timestamp(Vec::new(), Severity::Info);
/// logger.info("connecting");
/// infof!(logger, "retry {} of {}", 2, 5);
/// ```
pub trait Logger: Send + Sync {
    /// Returns true when an event at `severity` would be recorded.
    ///
    /// Use this to skip building expensive arguments for calls that would be
    /// dropped anyway.
    fn enabled(&self, severity: Severity) -> bool;

    /// Records one event. Below-threshold events are dropped.
    fn log(&self, severity: Severity, args: fmt::Arguments<'_>);

    /// Logs a message at the debug severity.
    fn debug(&self, message: &str) {
        self.log(Severity::Debug, format_args!("{message}"));
    }

    /// Logs pre-formatted arguments at the debug severity.
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    /// Logs a message at the info severity.
    fn info(&self, message: &str) {
        self.log(Severity::Info, format_args!("{message}"));
    }

    /// Logs pre-formatted arguments at the info severity.
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    /// Logs a message at the notice severity.
    fn notice(&self, message: &str) {
        self.log(Severity::Notice, format_args!("{message}"));
    }

    /// Logs pre-formatted arguments at the notice severity.
    fn noticef(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Notice, args);
    }

    /// Logs a message at the warning severity.
    fn warning(&self, message: &str) {
        self.log(Severity::Warning, format_args!("{message}"));
    }

    /// Logs pre-formatted arguments at the warning severity.
    fn warningf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args);
    }

    /// Logs a message at the error severity.
    fn error(&self, message: &str) {
        self.log(Severity::Error, format_args!("{message}"));
    }

    /// Logs pre-formatted arguments at the error severity.
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    /// Logs a message at the critical severity.
    fn critical(&self, message: &str) {
        self.log(Severity::Critical, format_args!("{message}"));
    }

    /// Logs pre-formatted arguments at the critical severity.
    fn criticalf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Critical, args);
    }

    /// Logs a message at the alert severity.
    fn alert(&self, message: &str) {
        self.log(Severity::Alert, format_args!("{message}"));
    }

    /// Logs pre-formatted arguments at the alert severity.
    fn alertf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Alert, args);
    }

    /// Logs a message at the emergency severity.
    fn emergency(&self, message: &str) {
        self.log(Severity::Emergency, format_args!("{message}"));
    }

    /// Logs pre-formatted arguments at the emergency severity.
    fn emergencyf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Emergency, args);
    }
}
