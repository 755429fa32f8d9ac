//! AD9850 register math
//!
//! Output frequency and phase are set by a 32-bit frequency tuning word and
//! a 5-bit phase register. Both conversions are pure integer math so they
//! can be checked against known values on the host.

/// Reference oscillator on the stock AD9850 module, in Hz.
pub const STOCK_OSC_HZ: u32 = 125_000_000;

/// Phase step size in hundredths of a degree (360° / 32 = 11.25°).
pub const PHASE_STEP_CDEG: u32 = 1125;

/// Number of phase steps per turn (5-bit register).
pub const PHASE_STEPS: u32 = 32;

/// Compute the 32-bit frequency tuning word.
///
/// The chip produces `f_out = word × osc_hz / 2^32`, so the word is
/// `floor(frequency_hz × 2^32 / osc_hz)`. The shift is done in u64; the
/// largest intermediate (`u32::MAX << 32`) still fits. `osc_hz` must be
/// non-zero.
pub fn frequency_register(osc_hz: u32, frequency_hz: u32) -> u32 {
    (((frequency_hz as u64) << 32) / osc_hz as u64) as u32
}

/// Compute the 5-bit phase register from hundredths of a degree.
///
/// Rounds half up to the nearest 11.25° step, then wraps modulo 32 so
/// 360.00° maps back to register 0.
pub fn phase_register(phase_cdeg: u32) -> u8 {
    let mut steps = phase_cdeg / PHASE_STEP_CDEG;
    let remainder = phase_cdeg % PHASE_STEP_CDEG;
    if remainder > PHASE_STEP_CDEG / 2 {
        steps += 1;
    }
    (steps % PHASE_STEPS) as u8
}

/// The phase a register value actually produces, in hundredths of a degree.
pub fn quantized_phase_cdeg(register: u8) -> u32 {
    (register as u32 % PHASE_STEPS) * PHASE_STEP_CDEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuning_word_known_values() {
        // 1 kHz at 125 MHz: floor(1000 * 2^32 / 125_000_000)
        assert_eq!(frequency_register(STOCK_OSC_HZ, 1000), 34_359);
        // Half the oscillator is exactly the top bit
        assert_eq!(frequency_register(STOCK_OSC_HZ, 62_500_000), 0x8000_0000);
        assert_eq!(frequency_register(STOCK_OSC_HZ, 10_000_000), 343_597_383);
        assert_eq!(frequency_register(STOCK_OSC_HZ, 0), 0);
    }

    #[test]
    fn test_tuning_word_round_trip() {
        // Inverting the word recovers the request within one resolution step
        // (125 MHz / 2^32 ≈ 0.0291 Hz).
        let word = frequency_register(STOCK_OSC_HZ, 1000);
        let back = (word as u64 * STOCK_OSC_HZ as u64) >> 32;
        assert!(back <= 1000);
        assert!(1000 - back <= 1);
    }

    #[test]
    fn test_phase_register_quantization() {
        // Half a step (562) rounds down, one past half (563) rounds up.
        assert_eq!(phase_register(0), 0);
        assert_eq!(phase_register(562), 0);
        assert_eq!(phase_register(563), 1);
        assert_eq!(phase_register(1125), 1);
        assert_eq!(phase_register(4500), 4);
        // Full turn wraps to zero
        assert_eq!(phase_register(36_000), 0);
        // 359.99° is closer to 360° than to the last step, so it wraps too
        assert_eq!(phase_register(35_999), 0);
        assert_eq!(phase_register(34_875), 31);
    }

    #[test]
    fn test_quantized_phase() {
        assert_eq!(quantized_phase_cdeg(0), 0);
        assert_eq!(quantized_phase_cdeg(1), 1125);
        assert_eq!(quantized_phase_cdeg(4), 4500);
        assert_eq!(quantized_phase_cdeg(31), 34_875);
        // Out-of-range registers wrap like the hardware's 5-bit field
        assert_eq!(quantized_phase_cdeg(32), 0);
    }

    #[test]
    fn test_quantized_phase_is_fixed_point() {
        // Quantizing an already-achievable phase changes nothing.
        for register in 0..32u8 {
            let cdeg = quantized_phase_cdeg(register);
            assert_eq!(phase_register(cdeg), register);
            assert_eq!(quantized_phase_cdeg(phase_register(cdeg)), cdeg);
        }
    }
}
