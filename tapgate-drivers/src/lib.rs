//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tapgate-core, written against the pin and wire traits of tapgate-hal:
//!
//! - LED matrix (WS2812 pixel driver, canned patterns)
//! - Feedback (buzzer tone generator, RGB status LED)
//! - Inputs (two-button pair)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod feedback;
pub mod input;
pub mod matrix;
