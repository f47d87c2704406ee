//! Character writer over the output sink

use std::io::Write;

use crate::delimiter::Delimiter;
use crate::error::{PasteError, Result};

/// Single owner of the output sink. Mergers borrow it mutably.
#[derive(Debug)]
pub struct CharWriter<W: Write> {
    inner: W,
}

impl<W: Write> CharWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write one character as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`PasteError::Write`] if the sink fails.
    pub fn emit(&mut self, c: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.inner
            .write_all(c.encode_utf8(&mut buf).as_bytes())
            .map_err(PasteError::Write)
    }

    /// Write a delimiter; the empty delimiter writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PasteError::Write`] if the sink fails.
    pub fn emit_delimiter(&mut self, delim: Delimiter) -> Result<()> {
        match delim.as_char() {
            Some(c) => self.emit(c),
            None => Ok(()),
        }
    }

    /// Flush buffered output to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`PasteError::Write`] if the sink fails.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(PasteError::Write)
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
