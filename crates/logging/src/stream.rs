//! crates/logging/src/stream.rs
//! Immediate-output logger writing one rendered line per qualifying event.

use std::fmt;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::levels::Severity;
use crate::line::{LineRenderer, LineWriter, TimestampMode};
use crate::logger::Logger;

/// Logger that writes each qualifying event straight to its sink.
///
/// Events below the threshold are dropped before any rendering. Qualifying
/// events are rendered into a reused scratch buffer and written as a single
/// `write_all` while holding the logger's internal lock, so concurrent
/// callers never interleave partial lines. Sink failures are swallowed:
/// logging is best-effort and must not fail the host program.
///
/// # Examples
///
/// ```
/// use logging::{Logger, Severity, StreamLogger};
///
/// let logger = StreamLogger::without_timestamp(Vec::new(), Severity::Warning);
/// logger.debug("dropped");
/// logger.warning("kept");
///
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert_eq!(output, "WARNING kept\n");
/// ```
pub struct StreamLogger<W> {
    threshold: Severity,
    renderer: LineRenderer,
    state: Mutex<StreamState<W>>,
}

/// Sink plus its reused render scratch, guarded together.
struct StreamState<W> {
    writer: W,
    scratch: Vec<u8>,
}

impl<W: Write> StreamLogger<W> {
    /// Creates a logger that prefixes each line with a millisecond
    /// timestamp.
    pub fn new(writer: W, threshold: Severity) -> Self {
        Self::with_renderer(writer, threshold, LineRenderer::new(TimestampMode::WithTimestamp))
    }

    /// Creates a logger that emits `LEVEL message` lines without a
    /// timestamp.
    pub fn without_timestamp(writer: W, threshold: Severity) -> Self {
        Self::with_renderer(
            writer,
            threshold,
            LineRenderer::new(TimestampMode::WithoutTimestamp),
        )
    }

    /// Creates a logger that delegates line layout to `line_writer`.
    pub fn with_line_writer(writer: W, threshold: Severity, line_writer: LineWriter) -> Self {
        Self::with_renderer(writer, threshold, LineRenderer::with_line_writer(line_writer))
    }

    /// Creates a logger from an explicit [`LineRenderer`].
    pub fn with_renderer(writer: W, threshold: Severity, renderer: LineRenderer) -> Self {
        Self {
            threshold,
            renderer,
            state: Mutex::new(StreamState {
                writer,
                scratch: Vec::new(),
            }),
        }
    }

    /// Returns the configured threshold.
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Consumes the logger and returns the wrapped sink.
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }
}

impl<W: Write + Send> Logger for StreamLogger<W> {
    fn enabled(&self, severity: Severity) -> bool {
        severity != Severity::None && severity >= self.threshold
    }

    fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        // `None` is a threshold value, not an event severity; calls carrying
        // it are dropped along with everything below the threshold.
        if severity == Severity::None || severity < self.threshold {
            return;
        }

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let StreamState { writer, scratch } = &mut *state;
        scratch.clear();
        if self.renderer.render(scratch, severity, args).is_ok() {
            // Best-effort: a full disk or closed pipe must not fail the
            // logging call.
            let _ = writer.write_all(scratch);
        }
    }
}
