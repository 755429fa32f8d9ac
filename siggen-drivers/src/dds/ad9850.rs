//! AD9850 device state
//!
//! Settings are staged: setters only touch the pending copy, `commit`
//! derives the hardware registers, transmits exactly one control word, and
//! publishes the result. Getters report committed values only, so a
//! half-entered setting is never observable through them.

use embedded_hal::delay::DelayNs;
use siggen_hal::OutputPin;

use super::registers;
use super::wire::{ControlWord, SerialBus};

/// Requested output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Settings {
    frequency_hz: u32,
    phase_cdeg: u32,
    enabled: bool,
}

/// AD9850 synthesizer with staged settings.
pub struct Ad9850<P, D> {
    bus: SerialBus<P, D>,
    osc_hz: u32,
    pending: Settings,
    committed: Settings,
    frequency_register: u32,
    phase_register: u8,
}

impl<P: OutputPin, D: DelayNs> Ad9850<P, D> {
    /// Initialize the chip and load the all-zero, output-disabled word.
    ///
    /// `osc_hz` is the reference oscillator frequency (125 MHz on stock
    /// modules) and must be non-zero.
    pub fn new(mut bus: SerialBus<P, D>, osc_hz: u32) -> Self {
        bus.init();
        bus.write_word(ControlWord {
            frequency: 0,
            phase: 0,
            enabled: false,
        });
        Self {
            bus,
            osc_hz,
            pending: Settings::default(),
            committed: Settings::default(),
            frequency_register: 0,
            phase_register: 0,
        }
    }

    /// Stage a new output frequency in Hz. Takes effect at the next commit.
    pub fn set_frequency(&mut self, frequency_hz: u32) {
        self.pending.frequency_hz = frequency_hz;
    }

    /// Stage a new output phase in hundredths of a degree.
    pub fn set_phase(&mut self, phase_cdeg: u32) {
        self.pending.phase_cdeg = phase_cdeg;
    }

    /// Stage the output-enable flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.pending.enabled = enabled;
    }

    /// Program the chip with the staged settings.
    ///
    /// Any number of setter calls since the last commit collapse into this
    /// one word. The committed phase is the quantized value the chip will
    /// actually produce; the committed frequency is the requested one (the
    /// tuning word carries the rounding).
    pub fn commit(&mut self) {
        self.frequency_register =
            registers::frequency_register(self.osc_hz, self.pending.frequency_hz);
        self.phase_register = registers::phase_register(self.pending.phase_cdeg);

        self.committed = self.pending;
        self.committed.phase_cdeg = registers::quantized_phase_cdeg(self.phase_register);

        self.bus.write_word(ControlWord {
            frequency: self.frequency_register,
            phase: self.phase_register,
            enabled: self.committed.enabled,
        });
    }

    /// Last committed frequency in Hz.
    pub fn frequency(&self) -> u32 {
        self.committed.frequency_hz
    }

    /// Last committed phase in hundredths of a degree (quantized).
    pub fn phase(&self) -> u32 {
        self.committed.phase_cdeg
    }

    /// Last committed output-enable flag.
    pub fn enabled(&self) -> bool {
        self.committed.enabled
    }

    /// Tuning word from the last commit.
    pub fn frequency_register(&self) -> u32 {
        self.frequency_register
    }

    /// Phase register from the last commit.
    pub fn phase_register(&self) -> u8 {
        self.phase_register
    }
}
