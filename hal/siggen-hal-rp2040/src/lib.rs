//! RP2040-specific HAL for the siggen DDS firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `siggen-hal` traits:
//!
//! - GPIO outputs for the synthesizer control lines
//! - Buffered UART halves as the command console transport

#![no_std]
#![deny(unsafe_code)]

pub mod console;
pub mod gpio;

pub use console::{UartConsoleRx, UartConsoleTx};
pub use gpio::RpOutputPin;

// Re-export shared traits from siggen-hal for convenience
pub use siggen_hal::{ByteRx, ByteTx, OutputPin};
