//! Run driver
//!
//! Owns the open inputs and the delimiter list for one run and hands them
//! to the selected merger together with the single output writer.

use std::io::Write;

use tracing::{debug, debug_span};

use crate::config::Config;
use crate::delimiter::DelimiterList;
use crate::error::Result;
use crate::merge::MergeMode;
use crate::stream::{CharWriter, StreamSet};

/// One paste run
#[derive(Debug)]
pub struct Paste {
    mode: MergeMode,
    delimiters: DelimiterList,
    streams: StreamSet,
}

impl Paste {
    /// Open every input named in `config`.
    ///
    /// # Errors
    ///
    /// Returns the first open or allocation failure; nothing is written.
    pub fn from_config(config: &Config) -> Result<Self> {
        let streams = StreamSet::open(&config.files)?;
        debug!(
            inputs = streams.len(),
            mode = ?config.mode,
            delimiters = config.delimiters.len(),
            "inputs opened"
        );
        Ok(Self {
            mode: config.mode,
            delimiters: config.delimiters.clone(),
            streams,
        })
    }

    pub fn mode(&self) -> MergeMode {
        self.mode
    }

    /// Merge all inputs into `sink`.
    ///
    /// Output is flushed whether or not the merge succeeds, so whatever was
    /// produced before a failure still reaches the sink.
    ///
    /// # Errors
    ///
    /// Returns the first read or write failure.
    pub fn run<W: Write>(&mut self, sink: W) -> Result<()> {
        let _span = debug_span!("paste", mode = ?self.mode).entered();

        let mut out = CharWriter::new(sink);
        let merged = self
            .mode
            .merge(self.streams.as_mut_slice(), &self.delimiters, &mut out);
        let flushed = out.flush();

        merged?;
        flushed?;
        debug!("merge complete");
        Ok(())
    }
}
