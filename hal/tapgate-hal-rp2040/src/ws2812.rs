//! PIO-driven WS2812 data line
//!
//! One state machine turns bytes from its TX FIFO into the WS2812 pulse
//! train. The CPU only feeds the FIFO; bit timing is exact regardless of
//! what the executor is doing.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use fixed::types::U24F8;
use tapgate_hal::PixelWire;

use crate::pio::{byte_time_us, calc_clock_divider, divider_bits, WS2812_BIT_RATE_HZ};

/// WS2812 line on a PIO state machine
pub struct PioWs2812Line<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
    /// CPU cycles needed to shift out the byte left in the OSR
    drain_cycles: u32,
}

impl<'d, PIO: Instance, const SM: usize> PioWs2812Line<'d, PIO, SM> {
    /// Load the WS2812 program and start the state machine
    ///
    /// The data pin idles low until the first byte is queued.
    pub fn new<DATA: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        data_pin: Peri<'d, DATA>,
    ) -> Self {
        // T1 = 2, T2 = 5, T3 = 3
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1       side 0 [2]",
            "    jmp !x do_zero side 1 [1]",
            "    jmp bitloop    side 1 [4]",
            "do_zero:",
            "    nop            side 0 [4]",
            ".wrap"
        );

        let installed = common.load_program(&prg.program);
        let data = common.make_pio_pin(data_pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&data]);

        let sys_clk = clk_sys_freq();
        let (int_div, frac_div) = calc_clock_divider(sys_clk, WS2812_BIT_RATE_HZ);
        cfg.clock_divider = U24F8::from_bits(divider_bits(int_div, frac_div));

        // Autopull one byte at a time, MSB first
        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 8,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&data]);
        sm.set_enable(true);

        Self {
            sm,
            drain_cycles: byte_time_us(WS2812_BIT_RATE_HZ) * (sys_clk / 1_000_000),
        }
    }
}

impl<PIO: Instance, const SM: usize> PixelWire for PioWs2812Line<'_, PIO, SM> {
    fn put_blocking(&mut self, byte: u8) {
        // Left shift takes bits from the top of the word
        let word = (byte as u32) << 24;
        while !self.sm.tx().try_push(word) {}
    }

    fn flush(&mut self) {
        while !self.sm.tx().empty() {}
        // The FIFO is empty once the last byte moved to the OSR
        cortex_m::asm::delay(self.drain_cycles);
    }
}
