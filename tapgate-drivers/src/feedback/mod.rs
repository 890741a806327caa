//! Buzzer and status LED drivers

mod status;
mod tone;

pub use status::RgbStatusLed;
pub use tone::{tone_cycles, ToneGenerator};
