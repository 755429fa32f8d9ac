//! Console command protocol for the signal generator
//!
//! The console is line oriented: one line is one JSON command, and every
//! non-empty line produces exactly one JSON reply. Bytes are echoed as they
//! arrive so the stream works as an interactive terminal.
//!
//! # Pipeline
//!
//! ```text
//!  bytes   ┌───────────────┐  line   ┌───────────────┐  outcome
//! ───────▶ │ LineAssembler │ ──────▶ │ CommandParser │ ──────────┐
//!   echo   └───────────────┘         └───────────────┘           ▼
//!                                                        ┌──────────────┐
//!                                                        │ CommandQueue │
//!                                                        └──────────────┘
//! ```
//!
//! [`intake::CommandIntake`] wires the three stages to a non-blocking byte
//! source and an echo sink; the firmware's console task drains the queue and
//! encodes [`reply::Reply`] lines.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod command;
pub mod intake;
pub mod line;
pub mod parser;
pub mod queue;
pub mod reply;

pub use command::{CommandError, CommandRecord, ErrorKind, Field, ParseOutcome};
pub use intake::{CommandIntake, PROMPT};
pub use line::{LineAssembler, LineEvent, MAX_LINE_LEN};
pub use parser::{CommandParser, MAX_JSON_DEPTH};
pub use queue::CommandQueue;
pub use reply::Reply;
