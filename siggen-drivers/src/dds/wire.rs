//! AD9850 serial load interface
//!
//! The chip is programmed over four GPIO lines: serial DATA, a W_CLK strobe
//! per bit, an FQ_UD strobe that latches the shifted word into the output
//! registers, and RESET. One load is 40 bits: the 32-bit tuning word LSB
//! first, two control bits (always zero in serial mode), the power-down
//! bit, and the 5-bit phase register LSB first.

use embedded_hal::delay::DelayNs;
use siggen_hal::OutputPin;

/// Strobe timing for the load interface.
///
/// The default of zero inserts no delays: edges go out back to back at bus
/// speed. That matches how AD9850 modules are commonly driven but is not
/// verified against the datasheet minimums on faster cores; set a non-zero
/// width to hold each pulse level for at least that long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusTiming {
    /// Minimum high and low time for W_CLK, FQ_UD and RESET pulses, in ns.
    pub pulse_width_ns: u32,
}

/// One fully-assembled 40-bit load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlWord {
    /// 32-bit frequency tuning word.
    pub frequency: u32,
    /// 5-bit phase register (upper three bits are ignored).
    pub phase: u8,
    /// Output enabled. Transmitted inverted: the wire bit is power-down.
    pub enabled: bool,
}

/// The four control lines of the AD9850 load interface.
pub struct SerialBus<P, D> {
    data: P,
    w_clk: P,
    fq_ud: P,
    reset: P,
    delay: D,
    timing: BusTiming,
}

impl<P: OutputPin, D: DelayNs> SerialBus<P, D> {
    /// Take ownership of the four control lines.
    ///
    /// Pins must already be configured as outputs, initially low.
    pub fn new(data: P, w_clk: P, fq_ud: P, reset: P, delay: D) -> Self {
        Self {
            data,
            w_clk,
            fq_ud,
            reset,
            delay,
            timing: BusTiming::default(),
        }
    }

    /// Override the default (zero-delay) strobe timing.
    pub fn with_timing(mut self, timing: BusTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Reset the chip and enter serial load mode.
    ///
    /// Datasheet entry sequence: a RESET pulse, one W_CLK pulse, one FQ_UD
    /// pulse. Must run once before the first word.
    pub fn init(&mut self) {
        pulse(&mut self.reset, &mut self.delay, self.timing.pulse_width_ns);
        pulse(&mut self.w_clk, &mut self.delay, self.timing.pulse_width_ns);
        pulse(&mut self.fq_ud, &mut self.delay, self.timing.pulse_width_ns);
    }

    /// Shift out one control word and latch it.
    pub fn write_word(&mut self, word: ControlWord) {
        // 32 tuning-word bits, LSB first
        for bit in 0..32 {
            self.write_bit((word.frequency >> bit) & 1 == 1);
        }
        // Two control bits, always zero in serial mode
        self.write_bit(false);
        self.write_bit(false);
        // The chip's bit is power-down, the inverse of "output enabled"
        self.write_bit(!word.enabled);
        // 5 phase bits, LSB first
        for bit in 0..5 {
            self.write_bit((word.phase >> bit) & 1 == 1);
        }
        // Latch the shifted word into the output registers
        pulse(&mut self.fq_ud, &mut self.delay, self.timing.pulse_width_ns);
    }

    /// Present one bit on DATA and clock it in.
    fn write_bit(&mut self, high: bool) {
        self.data.set_state(high);
        pulse(&mut self.w_clk, &mut self.delay, self.timing.pulse_width_ns);
    }
}

/// Drive a strobe line high then low, holding each level for `width_ns`.
fn pulse<P: OutputPin, D: DelayNs>(pin: &mut P, delay: &mut D, width_ns: u32) {
    pin.set_high();
    if width_ns > 0 {
        delay.delay_ns(width_ns);
    }
    pin.set_low();
    if width_ns > 0 {
        delay.delay_ns(width_ns);
    }
}
