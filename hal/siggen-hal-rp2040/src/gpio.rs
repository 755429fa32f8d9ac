//! GPIO outputs for the synthesizer control lines
//!
//! Wraps `embassy_rp::gpio::Output` in the shared [`OutputPin`] trait so
//! the DDS driver stays independent of the chip HAL.

use embassy_rp::gpio::Output;
use siggen_hal::OutputPin;

/// An RP2040 push-pull output pin.
pub struct RpOutputPin {
    inner: Output<'static>,
}

impl RpOutputPin {
    pub fn new(inner: Output<'static>) -> Self {
        Self { inner }
    }
}

impl OutputPin for RpOutputPin {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}
