//! Character reader over a byte source

use std::io::{self, ErrorKind, Read};

use super::utf8::{Step, Utf8Decoder};
use crate::error::{PasteError, Result};

/// Yields characters from a byte source until end of stream.
///
/// Bytes are pulled one at a time so that no input is held back in a
/// private buffer. Callers wrap files in a `BufReader`; stdin is already
/// buffered process-wide, which lets several readers share it.
#[derive(Debug)]
pub struct CharReader<R> {
    name: String,
    inner: R,
    decoder: Utf8Decoder,
    done: bool,
}

impl<R: Read> CharReader<R> {
    pub fn new(name: impl Into<String>, inner: R) -> Self {
        Self {
            name: name.into(),
            inner,
            decoder: Utf8Decoder::new(),
            done: false,
        }
    }

    /// Name used in diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Next character, or `None` at end of stream.
    ///
    /// Once end of stream has been seen, further calls keep returning
    /// `None` without touching the source.
    ///
    /// # Errors
    ///
    /// Returns [`PasteError::Read`] if the source fails or the bytes are
    /// not valid UTF-8.
    pub fn next_char(&mut self) -> Result<Option<char>> {
        if self.done {
            return Ok(None);
        }

        loop {
            let Some(byte) = self.next_byte()? else {
                self.done = true;
                if self.decoder.is_pending() {
                    return Err(self.fault(invalid("truncated UTF-8 sequence")));
                }
                return Ok(None);
            };

            match self.decoder.feed(byte) {
                Step::Pending => continue,
                Step::Char(c) => return Ok(Some(c)),
                Step::Invalid => return Err(self.fault(invalid("invalid UTF-8 sequence"))),
            }
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(self.fault(e)),
            }
        }
    }

    fn fault(&self, source: io::Error) -> PasteError {
        PasteError::Read {
            name: self.name.clone(),
            source,
        }
    }
}

fn invalid(msg: &'static str) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source that yields its bytes, then fails
    struct Faulty(&'static [u8]);

    impl Read for Faulty {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.split_first() {
                Some((&b, rest)) => {
                    buf[0] = b;
                    self.0 = rest;
                    Ok(1)
                }
                None => Err(io::Error::other("device gone")),
            }
        }
    }

    fn collect(bytes: &[u8]) -> Result<String> {
        let mut reader = CharReader::new("test", bytes);
        let mut out = String::new();
        while let Some(c) = reader.next_char()? {
            out.push(c);
        }
        Ok(out)
    }

    #[test]
    fn test_reads_utf8_text() {
        assert_eq!(collect("héllo\n世界".as_bytes()).unwrap(), "héllo\n世界");
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(collect(b"").unwrap(), "");
    }

    #[test]
    fn test_end_of_stream_is_sticky() {
        let mut reader = CharReader::new("test", &b"x"[..]);
        assert_eq!(reader.next_char().unwrap(), Some('x'));
        assert_eq!(reader.next_char().unwrap(), None);
        assert_eq!(reader.next_char().unwrap(), None);
    }

    #[test]
    fn test_invalid_bytes_are_read_error() {
        let err = collect(&[b'a', 0xFF]).unwrap_err();
        match err {
            PasteError::Read { name, source } => {
                assert_eq!(name, "test");
                assert_eq!(source.kind(), ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_truncated_sequence_is_read_error() {
        assert!(matches!(collect(&[0xE4, 0xB8]), Err(PasteError::Read { .. })));
    }

    #[test]
    fn test_source_fault_is_read_error() {
        let mut reader = CharReader::new("disk", Faulty(b"ok"));
        assert_eq!(reader.next_char().unwrap(), Some('o'));
        assert_eq!(reader.next_char().unwrap(), Some('k'));
        let err = reader.next_char().unwrap_err();
        assert!(err.to_string().starts_with("'disk' read error: device gone"));
    }
}
