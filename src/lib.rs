#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cronlog` wires the workspace's logging primitives to a small
//! command-line surface and is optimized for programs launched via a shell
//! or cron. Logging to a file works by redirecting standard output. All
//! logger variants are thread-safe.
//!
//! ```no_run
//! use cronlog::Logger;
//!
//! let logger = cronlog::from_flags();
//! logger.info("connecting to the server...");
//! cronlog::errorf!(logger, "connection failed: {:?}", "unavailable");
//! ```
//!
//! Will output:
//!
//! ```text
//! 2026-04-02 18:09:15.862 INFO connecting to the server...
//! 2026-04-02 18:10:14.347 ERROR connection failed: "unavailable"
//! ```
//!
//! [`Logger::enabled`] avoids evaluating arguments when it is expensive and
//! unnecessary:
//!
//! ```no_run
//! # fn memory_usage() -> String { String::new() }
//! # let logger = cronlog::from_flags();
//! use cronlog::{Logger, Severity};
//!
//! if logger.enabled(Severity::Debug) {
//!     cronlog::debugf!(logger, "memory usage: {}", memory_usage());
//! }
//! ```
//!
//! Recognised command-line options:
//!
//! - `--log <LEVEL>` (default `info`) -- log events at or above this level
//!   are recorded.
//! - `--stderr` -- write to standard error instead of standard output.
//! - `--flushlog <LEVEL>` (default `none`) -- hold recorded events in
//!   memory until one reaches this level, then output the whole history
//!   followed by every later event. Not meant for long-running processes.
//!
//! The available levels are the eight RFC 5424 severities (`debug`, `info`,
//! `notice`, `warning`, `error`, `critical`, `alert`, `emergency`) and
//! `none`.
//!
//! Some use cases:
//!
//! - By default all events except debug ones stream to stdout, which suits
//!   following a program launched from a shell.
//! - A crontab entry with `MAILTO` set and `--log debug --flushlog error`
//!   mails the complete event history only for runs where an error
//!   happened; quiet runs send nothing.
//! - `my_program > /var/log/my_program/$(date +%Y-%m-%d).log` captures a
//!   per-run log file.

use std::io::{self, Write};
use std::sync::OnceLock;

use clap::{Arg, ArgAction, ArgMatches, Command};

pub use logging::{
    LevelParseError, LineRenderer, LineWriter, Logger, Severity, StreamLogger, TimestampMode,
    alertf, criticalf, debugf, emergencyf, errorf, infof, noticef, warningf,
};
pub use logging_buffer::BufferedLogger;

/// Resolved logging configuration.
///
/// Collects the three options consumed before logger construction: the
/// recording threshold, the flush threshold, and the output stream choice.
/// [`build`](Self::build) turns an `Options` into the matching logger
/// variant: a flush threshold of [`Severity::None`] selects the immediate
/// [`StreamLogger`], anything else the deferred [`BufferedLogger`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Options {
    threshold: Severity,
    flush_threshold: Severity,
    stderr: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threshold: Severity::Info,
            flush_threshold: Severity::None,
            stderr: false,
        }
    }
}

impl Options {
    /// Creates options from already-resolved severities.
    pub fn new(threshold: Severity, flush_threshold: Severity) -> Self {
        Self {
            threshold,
            flush_threshold,
            stderr: false,
        }
    }

    /// Creates options from severity names.
    ///
    /// Fails with [`LevelParseError`] on an unrecognised name so a
    /// misconfiguration surfaces before a logger exists, rather than being
    /// silently defaulted.
    pub fn from_names(log: &str, flushlog: &str) -> Result<Self, LevelParseError> {
        Ok(Self::new(
            Severity::from_name(log)?,
            Severity::from_name(flushlog)?,
        ))
    }

    /// Selects standard error instead of standard output.
    pub fn stderr(mut self, stderr: bool) -> Self {
        self.stderr = stderr;
        self
    }

    /// Returns the recording threshold.
    pub const fn threshold(self) -> Severity {
        self.threshold
    }

    /// Returns the flush threshold.
    pub const fn flush_threshold(self) -> Severity {
        self.flush_threshold
    }

    /// Returns true when standard error is the selected stream.
    pub const fn use_stderr(self) -> bool {
        self.stderr
    }

    /// Adds the logging arguments to an existing `clap` command.
    ///
    /// Hosts with their own argument surface call this on their command and
    /// later resolve the logging part with
    /// [`from_matches`](Self::from_matches).
    pub fn augment_command(command: Command) -> Command {
        command
            .arg(
                Arg::new("log")
                    .long("log")
                    .value_name("LEVEL")
                    .default_value("info")
                    .value_parser(parse_level)
                    .help("Log events at or above this level are recorded."),
            )
            .arg(
                Arg::new("stderr")
                    .long("stderr")
                    .action(ArgAction::SetTrue)
                    .help("Write to standard error (stderr) instead of standard output."),
            )
            .arg(
                Arg::new("flushlog")
                    .long("flushlog")
                    .value_name("LEVEL")
                    .default_value("none")
                    .value_parser(parse_level)
                    .help(
                        "Hold recorded events in memory until one reaches this level, \
                         then output the whole history and every later event.",
                    ),
            )
    }

    /// Resolves options from matches produced by an
    /// [`augment_command`](Self::augment_command)-extended command.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            threshold: matches
                .get_one::<Severity>("log")
                .copied()
                .unwrap_or(Severity::Info),
            flush_threshold: matches
                .get_one::<Severity>("flushlog")
                .copied()
                .unwrap_or(Severity::None),
            stderr: matches.get_flag("stderr"),
        }
    }

    /// Parses options from an argument iterator.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::augment_command(clap_command()).try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    /// Parses options from the process arguments, exiting with a usage
    /// error on unrecognised input.
    pub fn parse() -> Self {
        Self::try_parse_from(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }

    /// Builds the configured logger variant over `writer`.
    pub fn build<W: Write + Send + 'static>(self, writer: W) -> Box<dyn Logger> {
        if self.flush_threshold == Severity::None {
            Box::new(StreamLogger::new(writer, self.threshold))
        } else {
            Box::new(BufferedLogger::new(
                writer,
                self.threshold,
                self.flush_threshold,
            ))
        }
    }

    /// Builds the configured variant with `LEVEL message` lines and no
    /// timestamp.
    pub fn build_without_timestamp<W: Write + Send + 'static>(self, writer: W) -> Box<dyn Logger> {
        if self.flush_threshold == Severity::None {
            Box::new(StreamLogger::without_timestamp(writer, self.threshold))
        } else {
            Box::new(BufferedLogger::without_timestamp(
                writer,
                self.threshold,
                self.flush_threshold,
            ))
        }
    }

    /// Builds the configured variant with an injected [`LineWriter`].
    pub fn build_with_line_writer<W: Write + Send + 'static>(
        self,
        writer: W,
        line_writer: LineWriter,
    ) -> Box<dyn Logger> {
        if self.flush_threshold == Severity::None {
            Box::new(StreamLogger::with_line_writer(
                writer,
                self.threshold,
                line_writer,
            ))
        } else {
            Box::new(BufferedLogger::with_line_writer(
                writer,
                self.threshold,
                self.flush_threshold,
                line_writer,
            ))
        }
    }
}

/// Bare command carrying only the logging arguments.
fn clap_command() -> Command {
    Command::new("cronlog")
        .disable_help_flag(true)
        .disable_version_flag(true)
}

/// `clap` value parser for severity names.
fn parse_level(value: &str) -> Result<Severity, LevelParseError> {
    Severity::from_name(value)
}

/// Stream selected by the `--stderr` option.
fn process_stream(use_stderr: bool) -> Box<dyn Write + Send> {
    if use_stderr {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    }
}

/// The process-wide logger, constructed once.
static PROCESS_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();

/// Returns the process-wide logger defined by the command-line flags.
///
/// The first call parses the process arguments and constructs the logger;
/// every later call (from any of the `from_*` functions) returns the same
/// instance without re-parsing. Unrecognised level names terminate the
/// process with a usage error, matching command-line convention.
pub fn from_flags() -> &'static dyn Logger {
    if let Some(logger) = PROCESS_LOGGER.get() {
        return logger.as_ref();
    }
    from_options(Options::parse())
}

/// Like [`from_flags`] but renders `LEVEL message` lines without a
/// timestamp.
pub fn from_flags_without_timestamp() -> &'static dyn Logger {
    if let Some(logger) = PROCESS_LOGGER.get() {
        return logger.as_ref();
    }
    let options = Options::parse();
    PROCESS_LOGGER
        .get_or_init(|| options.build_without_timestamp(process_stream(options.use_stderr())))
        .as_ref()
}

/// Like [`from_flags`] but with an injected [`LineWriter`] controlling the
/// line layout.
///
/// The strategy is dropped unused when another caller already constructed
/// the process-wide logger.
pub fn from_flags_with_line_writer(line_writer: LineWriter) -> &'static dyn Logger {
    if let Some(logger) = PROCESS_LOGGER.get() {
        return logger.as_ref();
    }
    let options = Options::parse();
    PROCESS_LOGGER
        .get_or_init(|| options.build_with_line_writer(process_stream(options.use_stderr()), line_writer))
        .as_ref()
}

/// Returns the process-wide logger, constructing it from `options` if no
/// earlier call has done so.
///
/// The configured stream (stdout or stderr) is selected here; use
/// [`Options::build`] directly for a custom sink.
pub fn from_options(options: Options) -> &'static dyn Logger {
    PROCESS_LOGGER
        .get_or_init(|| options.build(process_stream(options.use_stderr())))
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- option resolution tests ---

    #[test]
    fn defaults_match_the_documented_flag_defaults() {
        let options = Options::default();
        assert_eq!(options.threshold(), Severity::Info);
        assert_eq!(options.flush_threshold(), Severity::None);
        assert!(!options.use_stderr());
    }

    #[test]
    fn from_names_resolves_both_levels() {
        let options = Options::from_names("debug", "error").expect("valid names");
        assert_eq!(options.threshold(), Severity::Debug);
        assert_eq!(options.flush_threshold(), Severity::Error);
    }

    #[test]
    fn from_names_surfaces_unknown_levels() {
        let err = Options::from_names("verbose", "none").expect_err("must not resolve");
        assert_eq!(err.name(), "verbose");

        let err = Options::from_names("info", "loud").expect_err("must not resolve");
        assert_eq!(err.name(), "loud");
    }

    // --- flag parsing tests ---

    #[test]
    fn parsing_no_flags_yields_the_defaults() {
        let options = Options::try_parse_from(["prog"]).expect("parse succeeds");
        assert_eq!(options, Options::default());
    }

    #[test]
    fn parsing_resolves_explicit_flags() {
        let options =
            Options::try_parse_from(["prog", "--log", "debug", "--flushlog", "error", "--stderr"])
                .expect("parse succeeds");
        assert_eq!(options.threshold(), Severity::Debug);
        assert_eq!(options.flush_threshold(), Severity::Error);
        assert!(options.use_stderr());
    }

    #[test]
    fn parsing_rejects_unknown_level_names() {
        let err = Options::try_parse_from(["prog", "--log", "verbose"])
            .expect_err("unknown level must fail");
        assert!(
            err.to_string().contains("verbose"),
            "error should name the bad level: {err}"
        );
    }

    #[test]
    fn host_commands_can_embed_the_logging_arguments() {
        let command = Options::augment_command(
            clap::Command::new("host").arg(
                Arg::new("job")
                    .long("job")
                    .value_name("NAME")
                    .required(false),
            ),
        );
        let matches = command
            .try_get_matches_from(["host", "--job", "sync", "--flushlog", "warning"])
            .expect("parse succeeds");

        let options = Options::from_matches(&matches);
        assert_eq!(options.flush_threshold(), Severity::Warning);
        assert_eq!(
            matches.get_one::<String>("job").map(String::as_str),
            Some("sync")
        );
    }

    // --- variant selection tests ---

    #[test]
    fn none_flush_threshold_selects_immediate_output() {
        let sink = test_support::SharedSink::new();
        let logger = Options::from_names("info", "none")
            .expect("valid names")
            .build_without_timestamp(sink.clone());

        logger.info("straight through");
        assert_eq!(sink.lines(), vec!["INFO straight through".to_owned()]);
    }

    #[test]
    fn real_flush_threshold_selects_deferred_output() {
        let sink = test_support::SharedSink::new();
        let logger = Options::from_names("info", "error")
            .expect("valid names")
            .build_without_timestamp(sink.clone());

        logger.info("held back");
        assert!(sink.is_empty());

        logger.error("released");
        assert_eq!(
            sink.lines(),
            vec!["INFO held back".to_owned(), "ERROR released".to_owned()]
        );
    }

    #[test]
    fn injected_line_writer_reaches_both_variants() {
        for flushlog in ["none", "error"] {
            let sink = test_support::SharedSink::new();
            let logger = Options::from_names("debug", flushlog)
                .expect("valid names")
                .build_with_line_writer(
                    sink.clone(),
                    Box::new(|out, message, severity| {
                        out.write_all(severity.as_str().as_bytes())?;
                        out.write_all(b"> ")?;
                        out.write_all(message)?;
                        out.write_all(b"\n")
                    }),
                );

            logger.error("custom");
            assert_eq!(
                sink.lines(),
                vec!["error> custom".to_owned()],
                "layout mismatch for flushlog={flushlog}"
            );
        }
    }
}
