//! Sequential (`-s`) merging
//!
//! Each input is joined onto one line: the newline between two lines of the
//! same input becomes the next delimiter. The final newline of an input is
//! kept. The delimiter cursor restarts at the first entry for every input.

use std::io::{Read, Write};

use tracing::trace;

use crate::delimiter::DelimiterList;
use crate::error::Result;
use crate::stream::{CharReader, CharWriter};

/// Merge every stream in turn.
///
/// # Errors
///
/// Propagates the first read or write failure.
pub fn merge<R: Read, W: Write>(
    streams: &mut [CharReader<R>],
    delimiters: &DelimiterList,
    out: &mut CharWriter<W>,
) -> Result<()> {
    for stream in streams.iter_mut() {
        join_lines(stream, delimiters, out)?;
    }
    Ok(())
}

fn join_lines<R: Read, W: Write>(
    stream: &mut CharReader<R>,
    delimiters: &DelimiterList,
    out: &mut CharWriter<W>,
) -> Result<()> {
    let mut cursor = 0;
    let mut last = None;

    while let Some(c) = stream.next_char()? {
        if last == Some('\n') {
            out.emit_delimiter(delimiters.get(cursor))?;
            cursor = delimiters.advance(cursor);
        }
        if c != '\n' {
            out.emit(c)?;
        }
        last = Some(c);
    }

    if last == Some('\n') {
        out.emit('\n')?;
    }
    trace!(stream = stream.name(), "joined");
    Ok(())
}
