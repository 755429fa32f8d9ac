//! AD9850 DDS synthesizer driver
//!
//! Split into three layers:
//!
//! - [`registers`] - pure tuning-word and phase-register math
//! - [`wire`] - the 40-bit serial load sequence over four GPIO lines
//! - [`ad9850`] - staged (pending/committed) device state on top of the bus

pub mod ad9850;
pub mod registers;
pub mod wire;

pub use ad9850::Ad9850;
pub use wire::{BusTiming, ControlWord, SerialBus};
