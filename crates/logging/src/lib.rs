#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the severity scale, the [`Logger`] capability trait,
//! and the immediate-output [`StreamLogger`] shared across the cronlog
//! workspace. Programs hold a `&dyn Logger` and stay agnostic to whether
//! events stream out immediately or are deferred by the buffered variant in
//! the `logging-buffer` crate.
//!
//! # Design
//!
//! [`Severity`] is a totally ordered enum of the eight RFC 5424 severities
//! plus a `none` ceiling that outranks all of them, so threshold checks are
//! plain comparisons and a `none` threshold naturally disables the gated
//! behaviour. [`StreamLogger`] wraps any [`std::io::Write`] sink behind a
//! mutex, rendering each qualifying event into a reused scratch buffer and
//! writing it with a single call so concurrent callers never interleave
//! partial lines. Line layout is a strategy: the default renderer prefixes a
//! millisecond timestamp and the severity tag, and a [`LineWriter`] injected
//! at construction replaces it wholesale.
//!
//! # Invariants
//!
//! - Logging calls never return errors and never panic; sink failures are
//!   absorbed.
//! - Events below the threshold are dropped before any formatting work.
//! - Output order matches the order in which calls acquire the logger's
//!   internal lock.
//!
//! # Examples
//!
//! ```
//! use logging::{Logger, Severity, StreamLogger, errorf};
//!
//! let logger = StreamLogger::without_timestamp(Vec::new(), Severity::Info);
//! logger.info("connecting to the server...");
//! logger.debug("handshake detail");
//! errorf!(logger, "connection failed: {}", "refused");
//!
//! let output = String::from_utf8(logger.into_inner()).unwrap();
//! assert_eq!(output, "INFO connecting to the server...\nERROR connection failed: refused\n");
//! ```
//!
//! # See also
//!
//! - `logging-buffer` for the deferred-flush variant sharing this crate's
//!   rendering.
//! - `cronlog` for the flag surface that selects and wires a variant.

mod levels;
mod line;
mod logger;
mod macros;
mod stream;

pub use levels::{LevelParseError, Severity};
pub use line::{LineRenderer, LineWriter, TimestampMode};
pub use logger::Logger;
pub use stream::StreamLogger;
