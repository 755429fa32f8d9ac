//! Board configuration
//!
//! The board file is compiled into the firmware and parsed at startup
//! by a small no_std TOML parser.

pub mod toml;

pub use toml::parse_config;

/// Synthesizer parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DdsConfig {
    /// Reference oscillator frequency in Hz (stock modules: 125 MHz)
    pub osc_hz: u32,
    /// Strobe width for W_CLK / FQ_UD / RESET in nanoseconds
    ///
    /// Zero skips the delay calls entirely; GPIO toggling is then the
    /// only pacing, which stock modules keep up with.
    pub pulse_width_ns: u32,
    /// Wiring record; the typed bindings in main.rs are authoritative
    pub data_pin: u8,
    pub w_clk_pin: u8,
    pub fq_ud_pin: u8,
    pub reset_pin: u8,
}

impl Default for DdsConfig {
    fn default() -> Self {
        Self {
            osc_hz: 125_000_000,
            pulse_width_ns: 0,
            data_pin: 12,
            w_clk_pin: 10,
            fq_ud_pin: 11,
            reset_pin: 13,
        }
    }
}

/// Command console parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsoleConfig {
    pub baud_rate: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { baud_rate: 115_200 }
    }
}

/// Settings committed to the synthesizer once at power-on
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StartupConfig {
    pub frequency_hz: u32,
    pub phase_cdeg: u32,
    pub enable_out: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            frequency_hz: 1000,
            phase_cdeg: 0,
            enable_out: false,
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub dds: DdsConfig,
    pub console: ConsoleConfig,
    pub startup: StartupConfig,
}
