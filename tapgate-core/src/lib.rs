//! Board-agnostic core logic for the Tapgate access-control node
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - LED matrix model (pixels, serpentine layout, frame buffer)
//! - Combination lock state machine and attempt counting
//! - Access node cycle (idle, check, success/failure follow-up)
//! - Collaborator traits (inputs, tone, matrix patterns, status LED)
//! - Configuration types and the `node.toml` parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod lock;
pub mod matrix;
pub mod node;
pub mod traits;
