//! Lock task
//!
//! Runs the access node forever. Every wait inside a cycle is a blocking
//! delay, so this task owns the core while a cycle is in progress; it
//! yields once between cycles.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_time::Delay;

use tapgate_core::lock::CheckOutcome;
use tapgate_core::node::AccessNode;
use tapgate_drivers::feedback::{RgbStatusLed, ToneGenerator};
use tapgate_drivers::input::ButtonPair;
use tapgate_drivers::matrix::PatternRenderer;
use tapgate_hal_rp2040::{GpioInput, GpioOutput, PioWs2812Line};

pub type Buttons = ButtonPair<GpioInput<'static>, GpioInput<'static>>;
pub type Buzzer = ToneGenerator<GpioOutput<'static>, Delay>;
pub type Matrix = PatternRenderer<PioWs2812Line<'static, PIO0, 0>, Delay>;
pub type StatusLed = RgbStatusLed<GpioOutput<'static>, GpioOutput<'static>, GpioOutput<'static>>;

/// The node as wired on the board
pub type Node = AccessNode<Buttons, Buzzer, Matrix, StatusLed, Delay>;

#[embassy_executor::task]
pub async fn lock_task(mut node: Node) {
    info!("Lock task started");
    node.boot();

    let limit = node.lock().attempt_limit();
    let mut cycle: u32 = 0;

    loop {
        let report = node.run_cycle();
        cycle = cycle.wrapping_add(1);

        match report.outcome {
            CheckOutcome::Accepted => info!("Cycle {}: access granted", cycle),
            CheckOutcome::Rejected if report.locked_out => warn!(
                "Cycle {}: rejected, locking out on next attempt ({}/{})",
                cycle, report.failed_attempts, limit
            ),
            CheckOutcome::Rejected => info!(
                "Cycle {}: rejected ({}/{} failed)",
                cycle, report.failed_attempts, limit
            ),
        }

        embassy_futures::yield_now().await;
    }
}
