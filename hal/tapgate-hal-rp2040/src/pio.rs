//! PIO timing for the WS2812 data line
//!
//! Each data bit is one loop of the PIO program: T1 cycles low, T2 cycles
//! high, then T3 cycles either high (a 1) or low (a 0). The state machine
//! clock is set so that one loop lasts exactly one bit period.

/// System clock frequency (RP2040 default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// WS2812 bit rate
pub const WS2812_BIT_RATE_HZ: u32 = 800_000;

/// Cycles before the rising edge
pub const T1: u8 = 2;
/// Cycles high for every bit
pub const T2: u8 = 5;
/// Cycles that carry the bit value
pub const T3: u8 = 3;

/// PIO cycles per data bit
pub const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;

/// Calculate the state machine clock divider for a bit rate
///
/// The state machine must run at `bit_rate_hz * CYCLES_PER_BIT`.
/// Returns (integer_part, fractional_part) for the 16.8 fixed-point divider.
pub fn calc_clock_divider(sys_clk_hz: u32, bit_rate_hz: u32) -> (u16, u8) {
    if bit_rate_hz == 0 {
        return (0xFFFF, 0xFF);
    }

    let pio_clk_hz = bit_rate_hz as u64 * CYCLES_PER_BIT as u64;
    let divider_x256 = (sys_clk_hz as u64 * 256) / pio_clk_hz;

    let int_part = (divider_x256 / 256).clamp(1, 0xFFFF) as u16;
    let frac_part = if divider_x256 / 256 == 0 {
        0
    } else {
        (divider_x256 % 256) as u8
    };

    (int_part, frac_part)
}

/// Divider as the raw bits of a U24F8
pub fn divider_bits(int_part: u16, frac_part: u8) -> u32 {
    ((int_part as u32) << 8) | frac_part as u32
}

/// Time to shift out one byte, in microseconds (rounded up)
pub fn byte_time_us(bit_rate_hz: u32) -> u32 {
    (8 * 1_000_000u32).div_ceil(bit_rate_hz.max(1))
}
