#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Shared test utilities for the cronlog workspace.
//!
//! The main export is [`SharedSink`], a cloneable in-memory sink that lets
//! tests hand a writer to a logger while keeping a handle to inspect what
//! was written, including from other threads.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable in-memory byte sink for logger tests.
///
/// Every clone appends to the same underlying buffer, so a test can move
/// one clone into a logger (or several threads) and read the combined
/// output through another.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use test_support::SharedSink;
///
/// let sink = SharedSink::new();
/// let mut writer = sink.clone();
/// writer.write_all(b"INFO ready\n").unwrap();
///
/// assert_eq!(sink.lines(), vec!["INFO ready".to_owned()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the written bytes as UTF-8 text.
    ///
    /// Panics on invalid UTF-8; logger output is always valid.
    pub fn text(&self) -> String {
        String::from_utf8(self.contents()).expect("sink holds valid utf-8")
    }

    /// Returns the written text split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }

    /// Returns true when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
