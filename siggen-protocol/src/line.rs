//! Line assembly from the raw console byte stream
//!
//! Pure accumulator: no I/O and no echo decisions beyond reporting what
//! happened to each byte. The intake layer turns the returned events into
//! echo and prompt traffic.

use heapless::Vec;

/// Line buffer capacity; longer lines are truncated (and the loss counted).
pub const MAX_LINE_LEN: usize = 1024;

/// Lowest byte accepted into the buffer (space).
const PRINTABLE_MIN: u8 = 32;
/// Highest byte accepted into the buffer.
const PRINTABLE_MAX: u8 = 128;

/// What feeding one byte produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineEvent {
    /// Byte stored; echo it.
    Buffered(u8),
    /// Byte discarded: unprintable, a swallowed LF, or the buffer is full.
    Ignored,
    /// Terminator on a non-empty buffer. Read it with [`LineAssembler::line`],
    /// then call [`LineAssembler::clear`].
    Completed,
    /// Terminator on an empty buffer.
    Blank,
}

/// Byte-at-a-time line accumulator.
///
/// CR and LF both terminate a line; an LF directly following a CR is
/// swallowed so a CRLF pair terminates exactly once. Only printable bytes
/// (32..=128) are buffered. When the buffer is full, further printable
/// bytes are dropped without echo, but the drop is counted so truncation
/// stays observable.
#[derive(Debug, Clone)]
pub struct LineAssembler {
    buffer: Vec<u8, MAX_LINE_LEN>,
    last_was_cr: bool,
    dropped: u32,
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl LineAssembler {
    /// Create an empty assembler
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            last_was_cr: false,
            dropped: 0,
        }
    }

    /// Feed a single byte
    pub fn feed(&mut self, byte: u8) -> LineEvent {
        if byte == b'\n' && self.last_was_cr {
            self.last_was_cr = false;
            return LineEvent::Ignored;
        }
        self.last_was_cr = byte == b'\r';

        if byte == b'\r' || byte == b'\n' {
            if self.buffer.is_empty() {
                return LineEvent::Blank;
            }
            return LineEvent::Completed;
        }

        if !(PRINTABLE_MIN..=PRINTABLE_MAX).contains(&byte) {
            return LineEvent::Ignored;
        }

        if self.buffer.push(byte).is_err() {
            self.dropped += 1;
            return LineEvent::Ignored;
        }

        LineEvent::Buffered(byte)
    }

    /// The bytes of the line assembled so far
    pub fn line(&self) -> &[u8] {
        &self.buffer
    }

    /// Printable bytes lost to the buffer cap in the current line
    pub fn dropped_bytes(&self) -> u32 {
        self.dropped
    }

    /// Discard the current line and its drop count
    ///
    /// The CR state is kept: an LF arriving after the clear still pairs
    /// with the CR that terminated the previous line.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.dropped = 0;
    }
}
