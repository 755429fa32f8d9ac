//! Console intake
//!
//! Owns the line assembler, parser, and queue, and drives them from a
//! non-blocking byte source. Echo and prompt traffic goes to an injected
//! sink, so the whole pipeline runs (and tests) without hardware.

use siggen_hal::{ByteRx, ByteTx};

use crate::command::ParseOutcome;
use crate::line::{LineAssembler, LineEvent};
use crate::parser::CommandParser;
use crate::queue::CommandQueue;

/// Prompt shown after every terminated line.
pub const PROMPT: &[u8] = b"$ ";

/// Console front end: bytes in, queued command outcomes out.
pub struct CommandIntake {
    assembler: LineAssembler,
    parser: CommandParser,
    queue: CommandQueue,
    prompt_pending: bool,
    truncated_lines: u32,
}

impl Default for CommandIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandIntake {
    /// Create an intake with the default parser
    ///
    /// The prompt stays disarmed until the first line terminates, so the
    /// console writes nothing before input arrives.
    pub fn new() -> Self {
        Self {
            assembler: LineAssembler::new(),
            parser: CommandParser::new(),
            queue: CommandQueue::new(),
            prompt_pending: false,
            truncated_lines: 0,
        }
    }

    /// Service the console once
    ///
    /// Flushes a pending prompt, then attempts exactly one non-blocking
    /// read; an absent byte is a no-op. Returns whether a byte was
    /// consumed, so callers can drain a buffered transport by polling
    /// until `false`.
    pub fn poll<R: ByteRx, T: ByteTx>(&mut self, rx: &mut R, tx: &mut T) -> bool {
        if self.prompt_pending {
            tx.write_bytes(PROMPT);
            self.prompt_pending = false;
        }

        match rx.poll_byte() {
            Some(byte) => {
                self.accept(byte, tx);
                true
            }
            None => false,
        }
    }

    /// Feed one byte through assembly, echo, and (on completion) parsing
    pub fn accept<T: ByteTx>(&mut self, byte: u8, tx: &mut T) {
        match self.assembler.feed(byte) {
            LineEvent::Buffered(echo) => tx.write_byte(echo),
            LineEvent::Ignored => {}
            LineEvent::Blank => {
                // Terminators echo as newline even when nothing was typed
                tx.write_byte(b'\n');
                self.prompt_pending = true;
            }
            LineEvent::Completed => {
                tx.write_byte(b'\n');
                if self.assembler.dropped_bytes() > 0 {
                    self.truncated_lines += 1;
                }
                let outcome = self.parser.parse(self.assembler.line());
                self.queue.push(outcome);
                self.assembler.clear();
                self.prompt_pending = true;
            }
        }
    }

    /// Remove the oldest queued outcome
    pub fn take_command(&mut self) -> Option<ParseOutcome> {
        self.queue.pop()
    }

    /// Number of outcomes waiting for the apply loop
    pub fn pending_commands(&self) -> usize {
        self.queue.len()
    }

    /// Completed lines that lost bytes to the buffer cap so far
    pub fn truncated_lines(&self) -> u32 {
        self.truncated_lines
    }
}
