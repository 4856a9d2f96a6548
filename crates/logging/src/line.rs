//! crates/logging/src/line.rs
//! Line rendering shared by the stream and buffered loggers.
//!
//! The default renderer produces `YYYY-MM-DD HH:MM:SS.mmm LEVEL message`
//! lines with millisecond precision. Callers that need a different layout
//! inject a [`LineWriter`] at construction time; the strategy receives the
//! destination, the raw message bytes, and the event severity, and fully
//! replaces the default rendering.

use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::SystemTime;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::levels::Severity;

/// Injected line-writing strategy.
///
/// Receives the destination, the formatted message body (without timestamp
/// or level tag), and the event severity. Supplied at logger construction to
/// replace the default line layout; the strategy decides everything that is
/// written, including any terminator.
pub type LineWriter = Box<dyn Fn(&mut dyn Write, &[u8], Severity) -> io::Result<()> + Send + Sync>;

/// Controls whether rendered lines begin with a wall-clock timestamp.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimestampMode {
    /// Prefix each line with `YYYY-MM-DD HH:MM:SS.mmm`.
    WithTimestamp,
    /// Emit `LEVEL message` without a timestamp prefix.
    WithoutTimestamp,
}

impl Default for TimestampMode {
    fn default() -> Self {
        Self::WithTimestamp
    }
}

/// Timestamp layout for rendered lines (millisecond precision).
const LINE_TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]");

/// Returns the process-local UTC offset, resolved once.
///
/// The lookup is fallible once other threads exist, so the first caller
/// resolves it and everyone else reuses the cached value; UTC is the
/// fallback when the local offset cannot be determined.
fn local_offset() -> UtcOffset {
    static OFFSET: OnceLock<UtcOffset> = OnceLock::new();
    *OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

/// Renders log lines either through the default layout or an injected
/// [`LineWriter`].
///
/// Both logger variants own one of these; the buffered variant renders into
/// its pending buffer with the same renderer it later reuses after the
/// flush transition, so deferred and immediate output are byte-identical.
pub struct LineRenderer {
    mode: TimestampMode,
    custom: Option<LineWriter>,
}

impl LineRenderer {
    /// Creates the default renderer with the given [`TimestampMode`].
    pub fn new(mode: TimestampMode) -> Self {
        Self { mode, custom: None }
    }

    /// Creates a renderer that delegates every line to `line_writer`.
    pub fn with_line_writer(line_writer: LineWriter) -> Self {
        Self {
            mode: TimestampMode::WithTimestamp,
            custom: Some(line_writer),
        }
    }

    /// Renders one event into `out`.
    ///
    /// A timestamp that fails to format degrades to a bare `LEVEL message`
    /// line rather than suppressing the event.
    pub fn render(
        &self,
        out: &mut dyn Write,
        severity: Severity,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if let Some(custom) = &self.custom {
            let mut message = Vec::with_capacity(64);
            // Writing into a Vec cannot fail.
            let _ = message.write_fmt(args);
            return custom(out, &message, severity);
        }

        if self.mode == TimestampMode::WithTimestamp {
            let now = OffsetDateTime::from(SystemTime::now()).to_offset(local_offset());
            if let Ok(stamp) = now.format(LINE_TIMESTAMP_FORMAT) {
                out.write_all(stamp.as_bytes())?;
                out.write_all(b" ")?;
            }
        }
        out.write_all(severity.tag().as_bytes())?;
        out.write_all(b" ")?;
        out.write_fmt(args)?;
        out.write_all(b"\n")
    }
}

impl fmt::Debug for LineRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineRenderer")
            .field("mode", &self.mode)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_vec(renderer: &LineRenderer, severity: Severity, message: &str) -> Vec<u8> {
        let mut out = Vec::new();
        renderer
            .render(&mut out, severity, format_args!("{message}"))
            .expect("render into Vec succeeds");
        out
    }

    // --- default layout tests ---

    #[test]
    fn bare_layout_is_tag_and_message() {
        let renderer = LineRenderer::new(TimestampMode::WithoutTimestamp);
        let line = render_to_vec(&renderer, Severity::Info, "ready");
        assert_eq!(line, b"INFO ready\n");
    }

    #[test]
    fn timestamped_layout_has_millisecond_prefix() {
        let renderer = LineRenderer::new(TimestampMode::WithTimestamp);
        let line = render_to_vec(&renderer, Severity::Error, "boom");
        let text = String::from_utf8(line).expect("utf-8");

        // `YYYY-MM-DD HH:MM:SS.mmm ERROR boom\n`
        let (stamp, rest) = text.split_at(23);
        assert_eq!(rest, " ERROR boom\n");
        assert_eq!(stamp.as_bytes()[4], b'-');
        assert_eq!(stamp.as_bytes()[7], b'-');
        assert_eq!(stamp.as_bytes()[10], b' ');
        assert_eq!(stamp.as_bytes()[13], b':');
        assert_eq!(stamp.as_bytes()[16], b':');
        assert_eq!(stamp.as_bytes()[19], b'.');
        assert!(
            stamp
                .chars()
                .all(|c| c.is_ascii_digit() || "-: .".contains(c)),
            "unexpected timestamp shape: {stamp}"
        );
    }

    #[test]
    fn formatted_arguments_are_rendered_in_place() {
        let renderer = LineRenderer::new(TimestampMode::WithoutTimestamp);
        let mut out = Vec::new();
        renderer
            .render(&mut out, Severity::Warning, format_args!("{} of {}", 3, 9))
            .expect("render succeeds");
        assert_eq!(out, b"WARNING 3 of 9\n");
    }

    // --- injected writer tests ---

    #[test]
    fn line_writer_replaces_default_layout() {
        let renderer = LineRenderer::with_line_writer(Box::new(|out, message, severity| {
            out.write_all(severity.as_str().as_bytes())?;
            out.write_all(b"|")?;
            out.write_all(message)?;
            out.write_all(b"|")
        }));

        let line = render_to_vec(&renderer, Severity::Notice, "custom");
        assert_eq!(line, b"notice|custom|");
    }

    #[test]
    fn line_writer_errors_propagate_to_the_caller() {
        let renderer = LineRenderer::with_line_writer(Box::new(|_, _, _| {
            Err(io::Error::other("writer refused"))
        }));

        let mut out = Vec::new();
        let err = renderer
            .render(&mut out, Severity::Info, format_args!("dropped"))
            .expect_err("custom writer failure surfaces");
        assert_eq!(err.to_string(), "writer refused");
        assert!(out.is_empty());
    }

    #[test]
    fn debug_format_reports_custom_presence() {
        let plain = LineRenderer::new(TimestampMode::WithTimestamp);
        assert!(format!("{plain:?}").contains("custom: false"));

        let custom = LineRenderer::with_line_writer(Box::new(|_, _, _| Ok(())));
        assert!(format!("{custom:?}").contains("custom: true"));
    }
}
