//! Parallel (default) merging
//!
//! Each output row takes the next line from every stream, in order, and
//! joins them with delimiters. The separator after column `i` is entry
//! `i % len` of the delimiter list. Streams that run dry contribute empty
//! cells; merging stops at the first row where every stream is exhausted.
//!
//! # Row state machine
//!
//! A row is driven column by column through these states:
//!
//! - `Idle(col)`: about to read the first character of `col`'s cell.
//!   - end of stream, nothing written yet this row: the cell is deferred
//!     and the machine moves on (`Idle(col + 1)` or `RowDone`)
//!   - end of stream, row already live: the empty cell is closed
//!   - any character: `Padding`
//! - `Padding { col, first }`: write the separators of deferred columns
//!   before `col`, then `Reading`.
//! - `Reading { col, next }`: copy `next` and continue until a newline or
//!   end of stream, which closes the cell.
//! - `RowDone`: the row is finished.
//!
//! Closing a cell writes its separator, or the row's newline on the last
//! column, and records the column as written.

use std::io::{Read, Write};

use tracing::trace;

use crate::delimiter::DelimiterList;
use crate::error::Result;
use crate::stream::{CharReader, CharWriter};

/// Column state within one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle(usize),
    Padding { col: usize, first: char },
    Reading { col: usize, next: Option<char> },
    RowDone,
}

/// Merge streams row by row until all of them are exhausted.
///
/// # Errors
///
/// Propagates the first read or write failure.
pub fn merge<R: Read, W: Write>(
    streams: &mut [CharReader<R>],
    delimiters: &DelimiterList,
    out: &mut CharWriter<W>,
) -> Result<()> {
    if streams.is_empty() {
        return Ok(());
    }

    let mut row = Row {
        streams,
        delimiters,
        out,
    };
    let mut rows = 0usize;
    while row.run()? {
        rows += 1;
    }
    trace!(rows, "parallel merge finished");
    Ok(())
}

struct Row<'a, R, W: Write> {
    streams: &'a mut [CharReader<R>],
    delimiters: &'a DelimiterList,
    out: &'a mut CharWriter<W>,
}

impl<R: Read, W: Write> Row<'_, R, W> {
    /// Produce one row. Returns false if every stream was already empty,
    /// in which case nothing was written.
    fn run(&mut self) -> Result<bool> {
        // Columns whose separator (or newline) has been written
        let mut progress = 0;
        let mut state = State::Idle(0);

        while state != State::RowDone {
            state = match state {
                State::Idle(col) => match self.streams[col].next_char()? {
                    None if progress == 0 => self.after(col),
                    None => {
                        progress = self.close(col)?;
                        self.after(col)
                    }
                    Some(first) => State::Padding { col, first },
                },
                State::Padding { col, first } => {
                    for skipped in progress..col {
                        self.out.emit_delimiter(self.delimiters.get(skipped))?;
                    }
                    State::Reading {
                        col,
                        next: Some(first),
                    }
                }
                State::Reading { col, next } => match next {
                    Some('\n') | None => {
                        progress = self.close(col)?;
                        self.after(col)
                    }
                    Some(c) => {
                        self.out.emit(c)?;
                        State::Reading {
                            col,
                            next: self.streams[col].next_char()?,
                        }
                    }
                },
                State::RowDone => State::RowDone,
            };
        }

        Ok(progress > 0)
    }

    /// End `col`'s cell; returns the new progress count
    fn close(&mut self, col: usize) -> Result<usize> {
        if col + 1 == self.streams.len() {
            self.out.emit('\n')?;
        } else {
            self.out.emit_delimiter(self.delimiters.get(col))?;
        }
        Ok(col + 1)
    }

    fn after(&self, col: usize) -> State {
        if col + 1 == self.streams.len() {
            State::RowDone
        } else {
            State::Idle(col + 1)
        }
    }
}
