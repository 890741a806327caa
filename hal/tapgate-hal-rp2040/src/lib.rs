//! RP2040-specific HAL for the Tapgate firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `tapgate-hal` traits, plus RP2040-specific functionality:
//!
//! - GPIO wrappers and pin allocation
//! - Config-driven pin lookup by number
//! - PIO-based WS2812 data line

#![no_std]

pub mod gpio;
pub mod pins;
pub mod pio;
pub mod ws2812;

pub use gpio::{GpioAllocator, GpioInput, GpioOutput};
pub use pins::{BoardPeripherals, PinBank, PinError};
pub use ws2812::PioWs2812Line;
