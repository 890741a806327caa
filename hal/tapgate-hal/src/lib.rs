//! Tapgate Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the Tapgate drivers are written
//! against. Chip-specific crates implement them, so the drivers and the lock
//! logic can be tested on the host with mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tapgate-drivers / tapgate-firmware     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tapgate-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tapgate-hal-rp2040                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`wire::PixelWire`] - Self-clocked single-wire LED data line
//!
//! Blocking delays use `embedded_hal::delay::DelayNs` directly.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod wire;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use wire::PixelWire;
