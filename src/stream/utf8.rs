//! Incremental UTF-8 decoding for input streams
//!
//! Bytes arrive one at a time from the source. The decoder holds a partial
//! sequence until it completes, then yields the character. Malformed input
//! is reported rather than replaced: a stream that is not valid UTF-8 is a
//! read failure.

/// Outcome of feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Sequence incomplete
    Pending,
    /// Character complete
    Char(char),
    /// Malformed sequence
    Invalid,
}

/// UTF-8 decoder state
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Decoder {
    /// Code point bits gathered so far
    code: u32,
    /// Continuation bytes still expected
    remaining: u8,
    /// Total length of the sequence being decoded
    width: u8,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a multi-byte sequence is partially read
    pub fn is_pending(&self) -> bool {
        self.remaining > 0
    }

    pub fn feed(&mut self, byte: u8) -> Step {
        if self.remaining == 0 {
            return self.start(byte);
        }

        if byte & 0b1100_0000 != 0b1000_0000 {
            *self = Self::default();
            return Step::Invalid;
        }

        self.code = (self.code << 6) | u32::from(byte & 0x3F);
        self.remaining -= 1;
        if self.remaining > 0 {
            return Step::Pending;
        }

        let (code, width) = (self.code, self.width);
        *self = Self::default();

        // Reject overlong forms; surrogates and out-of-range values fail from_u32
        let shortest = match width {
            2 => code >= 0x80,
            3 => code >= 0x800,
            _ => code >= 0x1_0000,
        };
        match char::from_u32(code) {
            Some(c) if shortest => Step::Char(c),
            _ => Step::Invalid,
        }
    }

    fn start(&mut self, byte: u8) -> Step {
        let (bits, width) = match byte {
            0x00..=0x7F => return Step::Char(char::from(byte)),
            0xC0..=0xDF => (byte & 0x1F, 2),
            0xE0..=0xEF => (byte & 0x0F, 3),
            0xF0..=0xF7 => (byte & 0x07, 4),
            _ => return Step::Invalid,
        };
        self.code = u32::from(bits);
        self.width = width;
        self.remaining = width - 1;
        Step::Pending
    }
}
