//! GPIO wrappers and allocation
//!
//! Wraps embassy pins so the drivers can use them through the
//! `tapgate-hal` traits, and tracks which GPIOs the node config claims.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;
use heapless::FnvIndexSet;
use tapgate_core::config::PinConfig;

use crate::pins::PinError;

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Push-pull output, starts low
pub struct GpioOutput<'d> {
    pin: Output<'d>,
}

impl<'d> GpioOutput<'d> {
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl tapgate_hal::OutputPin for GpioOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Digital input with optional pull-up
pub struct GpioInput<'d> {
    pin: Input<'d>,
}

impl<'d> GpioInput<'d> {
    pub fn new(pin: Peri<'d, AnyPin>, pull_up: bool) -> Self {
        let pull = if pull_up { Pull::Up } else { Pull::None };
        Self {
            pin: Input::new(pin, pull),
        }
    }

    /// Create an input using the pull setting from the node config
    pub fn from_config(pin: Peri<'d, AnyPin>, config: &PinConfig) -> Self {
        Self::new(pin, config.pull_up)
    }
}

impl tapgate_hal::InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// GPIO allocator to track pin usage
///
/// Used at boot to reject node configs that assign one GPIO to two roles.
pub struct GpioAllocator {
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Claim a GPIO
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        if pin >= GPIO_COUNT {
            return Err(PinError::InvalidPin);
        }
        if self.allocated.contains(&pin) {
            return Err(PinError::AlreadyTaken);
        }
        self.allocated
            .insert(pin)
            .map(|_| ())
            .map_err(|_| PinError::InvalidPin)
    }

    /// Claim every pin of a role list
    ///
    /// Stops at the first failure and reports the role that caused it.
    pub fn allocate_all(
        &mut self,
        assignments: &[(&'static str, u8)],
    ) -> Result<(), (&'static str, PinError)> {
        for &(role, pin) in assignments {
            self.allocate(pin).map_err(|e| (role, e))?;
        }
        Ok(())
    }

    /// Release a GPIO
    pub fn release(&mut self, pin: u8) {
        self.allocated.remove(&pin);
    }

    /// Check if a pin is allocated
    pub fn is_allocated(&self, pin: u8) -> bool {
        self.allocated.contains(&pin)
    }

    /// Get the number of allocated pins
    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator() {
        let mut alloc = GpioAllocator::new();

        assert!(alloc.allocate(5).is_ok());
        assert!(alloc.is_allocated(5));
        assert_eq!(alloc.allocate(5), Err(PinError::AlreadyTaken));
        assert_eq!(alloc.allocate(30), Err(PinError::InvalidPin));

        alloc.release(5);
        assert!(!alloc.is_allocated(5));
        assert!(alloc.allocate(5).is_ok());
    }

    #[test]
    fn test_allocate_all_reports_role() {
        let mut alloc = GpioAllocator::new();
        alloc.allocate(7).unwrap();

        let roles = [("channel_a", 5), ("channel_b", 6), ("buzzer", 7)];
        assert_eq!(
            alloc.allocate_all(&roles),
            Err(("buzzer", PinError::AlreadyTaken))
        );
        assert_eq!(alloc.allocated_count(), 3);
    }
}
