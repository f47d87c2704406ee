//! Line merging
//!
//! Two traversals over the same inputs:
//! - [`MergeMode::Parallel`]: line `n` of every input forms output row `n`
//! - [`MergeMode::Sequential`]: every input becomes one output line

pub mod parallel;
pub mod sequential;

use std::io::{Read, Write};

use crate::delimiter::DelimiterList;
use crate::error::Result;
use crate::stream::{CharReader, CharWriter};

/// How inputs are traversed. Chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    #[default]
    Parallel,
    Sequential,
}

impl MergeMode {
    /// Run the selected merger over `streams`.
    ///
    /// # Errors
    ///
    /// Propagates the first read or write failure. Output already written
    /// stays written.
    pub fn merge<R: Read, W: Write>(
        self,
        streams: &mut [CharReader<R>],
        delimiters: &DelimiterList,
        out: &mut CharWriter<W>,
    ) -> Result<()> {
        match self {
            MergeMode::Parallel => parallel::merge(streams, delimiters, out),
            MergeMode::Sequential => sequential::merge(streams, delimiters, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mode: MergeMode, inputs: &[&str]) -> String {
        let delimiters = DelimiterList::default();
        let mut streams: Vec<_> = inputs
            .iter()
            .map(|s| CharReader::new("mem", s.as_bytes()))
            .collect();
        let mut out = CharWriter::new(Vec::new());
        mode.merge(&mut streams, &delimiters, &mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_default_mode_is_parallel() {
        assert_eq!(MergeMode::default(), MergeMode::Parallel);
    }

    #[test]
    fn test_modes_differ_on_same_input() {
        let inputs = ["a\nb\n", "1\n2\n"];
        assert_eq!(run(MergeMode::Parallel, &inputs), "a\t1\nb\t2\n");
        assert_eq!(run(MergeMode::Sequential, &inputs), "a\tb\n1\t2\n");
    }
}
