//! Button input drivers

mod buttons;

pub use buttons::ButtonPair;
