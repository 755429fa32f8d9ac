//! Hardware driver implementations
//!
//! This crate provides the driver for the signal generator's synthesizer
//! chip:
//!
//! - AD9850 DDS (register math, serial load bus, staged device state)

#![no_std]
#![deny(unsafe_code)]

pub mod dds;
