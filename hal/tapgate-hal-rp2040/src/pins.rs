//! Pin lookup by number
//!
//! Node roles are assigned GPIO numbers in `node.toml`, so the firmware
//! needs to turn a number into a pin at runtime. [`PinBank`] holds every
//! general-purpose GPIO as `Peri<AnyPin>` and hands each one out once.
//!
//! GPIO7 is kept out of the bank: it carries the LED matrix data line and
//! is driven by PIO, which needs the concrete pin type.

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{PIN_7, PIO0};
use embassy_rp::{Peri, Peripherals};

use crate::gpio::GPIO_COUNT;

/// GPIO wired to the LED matrix data input
pub const MATRIX_DATA_PIN: u8 = 7;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
    /// Pin reserved for a board function
    Reserved,
}

/// Peripherals that stay outside the pin bank
pub struct BoardPeripherals {
    /// PIO block for the LED matrix
    pub pio0: Peri<'static, PIO0>,
    /// LED matrix data line
    pub matrix_data: Peri<'static, PIN_7>,
}

/// Bank of GPIOs that can be taken by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
}

impl PinBank {
    /// Split the peripherals into the pin bank and the board-fixed parts
    pub fn split(p: Peripherals) -> (Self, BoardPeripherals) {
        let bank = Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                None,
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        };
        let board = BoardPeripherals {
            pio0: p.PIO0,
            matrix_data: p.PIN_7,
        };
        (bank, board)
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if pin_num >= GPIO_COUNT {
            return Err(PinError::InvalidPin);
        }
        if pin_num == MATRIX_DATA_PIN {
            return Err(PinError::Reserved);
        }
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken)
    }
}
