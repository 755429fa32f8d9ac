//! Console byte-stream abstractions
//!
//! The command console is a raw byte stream: bytes arrive one at a time from
//! a serial transport, and echo, prompts, and replies go back the same way.
//! These traits keep the command pipeline independent of the transport.

/// Non-blocking console input
pub trait ByteRx {
    /// Try to read one byte without waiting
    ///
    /// Returns `None` when nothing is pending. Transports that can report
    /// receive errors (framing, overrun) absorb them here; a corrupted byte
    /// reads as `None`.
    fn poll_byte(&mut self) -> Option<u8>;
}

/// Console output sink
///
/// Implementations are expected to buffer; a full transmit buffer may block
/// briefly but must not drop bytes silently mid-line.
pub trait ByteTx {
    /// Write a single byte
    fn write_byte(&mut self, byte: u8);

    /// Write a slice of bytes
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }
}
