//! GPIO abstractions
//!
//! Provides a trait for digital output pins that can be implemented by
//! chip-specific HALs. Pin writes are infallible: every supported target
//! drives its GPIO registers directly.

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high
    fn set_high(&mut self);

    /// Set the pin low
    fn set_low(&mut self);

    /// Set the pin to the given state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}
