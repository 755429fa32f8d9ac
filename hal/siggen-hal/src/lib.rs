//! Siggen Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. This keeps the protocol and driver crates free of
//! any peripheral types, so they build and test on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (siggen-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  siggen-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  siggen-hal-rp2040                      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output drive (DDS control lines)
//! - [`console::ByteRx`], [`console::ByteTx`] - Console byte stream

#![no_std]
#![deny(unsafe_code)]

pub mod console;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use console::{ByteRx, ByteTx};
pub use gpio::OutputPin;
