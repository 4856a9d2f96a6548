#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging-buffer` provides [`BufferedLogger`], the deferred-output
//! counterpart to [`logging::StreamLogger`]. Qualifying events are rendered
//! and held in memory instead of written; the first event at or above a
//! separate flush threshold releases everything recorded so far, in order,
//! and switches the logger to direct passthrough for the rest of its life.
//!
//! A process that normally stays quiet can therefore run with a verbose
//! recording threshold and only produce output when something goes wrong,
//! at which point the full history leading up to the failure appears. This
//! is the intended companion to cron jobs whose captured output is mailed:
//! no output, no mail.
//!
//! # Design
//!
//! The sink, the pending lines, and the flushed flag live behind a single
//! mutex, so buffer appends, the flush drain, and post-flush writes are
//! mutually exclusive and output order matches lock-acquisition order.
//! Lines are rendered with the same [`logging::LineRenderer`] the stream
//! logger uses, at call time, so flushed output is byte-identical to what
//! immediate output would have been, timestamps included.
//!
//! # Invariants
//!
//! - The `Collecting -> Flushed` transition fires at most once and is
//!   irreversible for the logger's lifetime.
//! - A flush-triggering event appears in the output exactly once, after
//!   every previously buffered event.
//! - Events below the recording threshold never enter the buffer in either
//!   state.
//! - A flush threshold of [`Severity::None`] never fires: the logger
//!   buffers forever, bounded only by process memory, and stays silent.
//!   Exiting while still collecting discards the buffer; there is no
//!   drop-triggered drain.
//!
//! # Examples
//!
//! ```
//! use logging::{Logger, Severity};
//! use logging_buffer::BufferedLogger;
//!
//! let logger = BufferedLogger::without_timestamp(Vec::new(), Severity::Debug, Severity::Error);
//! logger.info("starting up");
//! logger.debug("loading state");
//! logger.error("state corrupted");
//! logger.info("giving up");
//!
//! let output = String::from_utf8(logger.into_inner()).unwrap();
//! assert_eq!(
//!     output,
//!     "INFO starting up\nDEBUG loading state\nERROR state corrupted\nINFO giving up\n"
//! );
//! ```

use std::fmt;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use logging::{LineRenderer, LineWriter, Logger, Severity, TimestampMode};

/// Logger that defers output until an event reaches its flush threshold.
///
/// Shares the [`Logger`] surface with [`logging::StreamLogger`], so callers
/// cannot tell which variant is active. See the crate docs for the
/// buffering state machine.
pub struct BufferedLogger<W> {
    threshold: Severity,
    flush_threshold: Severity,
    renderer: LineRenderer,
    state: Mutex<BufferState<W>>,
}

/// Mutable logger state, guarded as one unit.
struct BufferState<W> {
    writer: W,
    pending: Vec<Vec<u8>>,
    flushed: bool,
}

impl<W: Write> BufferedLogger<W> {
    /// Creates a buffered logger with timestamped lines.
    ///
    /// `threshold` gates whether an event is recorded at all;
    /// `flush_threshold` gates the one-time release of the buffer. Passing
    /// [`Severity::None`] as the flush threshold selects the
    /// buffer-forever mode.
    pub fn new(writer: W, threshold: Severity, flush_threshold: Severity) -> Self {
        Self::with_renderer(
            writer,
            threshold,
            flush_threshold,
            LineRenderer::new(TimestampMode::WithTimestamp),
        )
    }

    /// Creates a buffered logger that emits `LEVEL message` lines without a
    /// timestamp.
    pub fn without_timestamp(writer: W, threshold: Severity, flush_threshold: Severity) -> Self {
        Self::with_renderer(
            writer,
            threshold,
            flush_threshold,
            LineRenderer::new(TimestampMode::WithoutTimestamp),
        )
    }

    /// Creates a buffered logger that delegates line layout to
    /// `line_writer`.
    ///
    /// The strategy renders into the pending buffer at call time, so
    /// flushed output preserves both the custom layout and chronological
    /// order.
    pub fn with_line_writer(
        writer: W,
        threshold: Severity,
        flush_threshold: Severity,
        line_writer: LineWriter,
    ) -> Self {
        Self::with_renderer(
            writer,
            threshold,
            flush_threshold,
            LineRenderer::with_line_writer(line_writer),
        )
    }

    /// Creates a buffered logger from an explicit [`LineRenderer`].
    pub fn with_renderer(
        writer: W,
        threshold: Severity,
        flush_threshold: Severity,
        renderer: LineRenderer,
    ) -> Self {
        Self {
            threshold,
            flush_threshold,
            renderer,
            state: Mutex::new(BufferState {
                writer,
                pending: Vec::new(),
                flushed: false,
            }),
        }
    }

    /// Returns the recording threshold.
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Returns the flush threshold.
    pub const fn flush_threshold(&self) -> Severity {
        self.flush_threshold
    }

    /// Returns true once the flush transition has fired.
    pub fn has_flushed(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flushed
    }

    /// Returns the number of lines currently held in memory.
    ///
    /// Useful for monitoring the buffer-forever mode, whose growth is
    /// bounded only by process memory.
    pub fn pending_lines(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pending
            .len()
    }

    /// Consumes the logger and returns the wrapped sink.
    ///
    /// Pending lines are discarded, matching process-exit behaviour: a
    /// logger that never reached its flush threshold stays silent.
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }
}

impl<W: Write + Send> Logger for BufferedLogger<W> {
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
        let state = &mut *state;

        let mut line = Vec::with_capacity(64);
        if self.renderer.render(&mut line, severity, args).is_err() {
            return;
        }

        if state.flushed {
            // Identical to the stream logger once the transition has fired.
            let _ = state.writer.write_all(&line);
            return;
        }

        state.pending.push(line);

        // Real severities always rank below `None`, so a `none` flush
        // threshold never fires and the buffer grows until process exit.
        if severity >= self.flush_threshold {
            for line in state.pending.drain(..) {
                let _ = state.writer.write_all(&line);
            }
            state.flushed = true;
        }
    }
}
