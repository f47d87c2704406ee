//! Input and output character streams
//!
//! Inputs are opened by name, with `-` meaning standard input. Every
//! occurrence of `-` reads the same process stdin. Files close when the
//! [`StreamSet`] is dropped; stdin is left open.

mod reader;
mod utf8;
mod writer;

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Read};

use tracing::debug;

use crate::error::{PasteError, Result};

pub use reader::CharReader;
pub use writer::CharWriter;

/// Name that selects standard input
pub const STDIN_NAME: &str = "-";

/// Byte source behind an input stream
#[derive(Debug)]
pub enum Source {
    Stdin(io::Stdin),
    File(BufReader<File>),
}

impl Read for Source {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Source::Stdin(stdin) => stdin.read(buf),
            Source::File(file) => file.read(buf),
        }
    }
}

/// A named input opened for reading
pub type InputStream = CharReader<Source>;

/// Open one input by name.
///
/// # Errors
///
/// Returns [`PasteError::Open`] if the file cannot be opened.
pub fn open<S: AsRef<OsStr> + ?Sized>(name: &S) -> Result<InputStream> {
    let name = name.as_ref();
    let shown = name.to_string_lossy().into_owned();
    if name == OsStr::new(STDIN_NAME) {
        debug!("reading standard input");
        return Ok(CharReader::new(shown, Source::Stdin(io::stdin())));
    }

    let file = File::open(name).map_err(|source| PasteError::Open {
        name: shown.clone(),
        source,
    })?;
    debug!(file = shown.as_str(), "opened input");
    Ok(CharReader::new(shown, Source::File(BufReader::new(file))))
}

/// Ordered inputs for one run. Order decides column and cycling order.
#[derive(Debug)]
pub struct StreamSet {
    streams: Vec<InputStream>,
}

impl StreamSet {
    /// Open every input in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`PasteError::Open`] for the first input that cannot be
    /// opened (already opened files are closed again), or
    /// [`PasteError::Allocation`] if the set cannot be reserved.
    pub fn open<S: AsRef<OsStr>>(names: &[S]) -> Result<Self> {
        let mut streams = Vec::new();
        streams.try_reserve_exact(names.len())?;
        for name in names {
            streams.push(open(name)?);
        }
        Ok(Self { streams })
    }

    pub(crate) fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn as_mut_slice(&mut self) -> &mut [InputStream] {
        &mut self.streams
    }
}
