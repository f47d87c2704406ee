//! Delimiter list decoding
//!
//! Turns the `-d` argument into an ordered list of delimiters. The list is
//! indexed cyclically: callers keep an explicit cursor and look up
//! `list[cursor % len]`.
//!
//! Recognised escapes:
//! - `\n` newline
//! - `\t` tab
//! - `\0` empty delimiter (nothing is written at that position)
//! - `\\` backslash
//!
//! A backslash followed by anything else, or by nothing, ends decoding. The
//! entries collected up to that point are kept.

use crate::error::{PasteError, Result};

/// A single decoded delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Write this character
    Char(char),
    /// Write nothing
    Null,
}

impl Delimiter {
    /// The character to write, if any
    pub fn as_char(self) -> Option<char> {
        match self {
            Delimiter::Char(c) => Some(c),
            Delimiter::Null => None,
        }
    }
}

/// Decoded, non-empty, immutable delimiter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterList {
    entries: Vec<Delimiter>,
}

impl Default for DelimiterList {
    /// A single tab
    fn default() -> Self {
        Self {
            entries: vec![Delimiter::Char('\t')],
        }
    }
}

impl DelimiterList {
    /// Decode a delimiter specification.
    ///
    /// # Errors
    ///
    /// Returns [`PasteError::EmptyDelimiterSet`] if nothing survives decoding
    /// and [`PasteError::Allocation`] if the list cannot be reserved.
    pub fn parse(spec: &str) -> Result<Self> {
        let entries = unescape(spec)?;
        if entries.is_empty() {
            return Err(PasteError::EmptyDelimiterSet);
        }
        Ok(Self { entries })
    }

    /// Delimiter at `cursor`, wrapping around the end of the list
    #[inline]
    pub fn get(&self, cursor: usize) -> Delimiter {
        self.entries[cursor % self.entries.len()]
    }

    /// Cursor following `cursor`, kept within the list bounds
    #[inline]
    pub fn advance(&self, cursor: usize) -> usize {
        (cursor + 1) % self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: an empty list is rejected at construction
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Delimiter] {
        &self.entries
    }
}

/// Decode escapes, stopping at the first unrecognised one
fn unescape(spec: &str) -> Result<Vec<Delimiter>> {
    let mut entries = Vec::new();
    entries.try_reserve_exact(spec.chars().count())?;

    let mut chars = spec.chars();
    while let Some(c) = chars.next() {
        let delim = if c == '\\' {
            match chars.next() {
                Some('n') => Delimiter::Char('\n'),
                Some('t') => Delimiter::Char('\t'),
                Some('0') => Delimiter::Null,
                Some('\\') => Delimiter::Char('\\'),
                // Unspecified by POSIX; keep what we have
                _ => break,
            }
        } else {
            Delimiter::Char(c)
        };
        entries.push(delim);
    }

    Ok(entries)
}
