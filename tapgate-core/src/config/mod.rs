//! Configuration types
//!
//! Lock timing lives in [`LockConfig`], whose defaults are the node's
//! observable behavior. Pin assignment lives in [`NodeConfig`] and is read
//! from `node.toml` at boot.

pub mod hardware;
pub mod toml;
pub mod types;

pub use hardware::*;
pub use toml::{parse_config, ParseError};
pub use types::*;
