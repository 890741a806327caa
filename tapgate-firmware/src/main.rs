//! Tapgate - Access-Control Node Firmware
//!
//! Two-button combination lock for RP2040 boards with a 5x5 WS2812
//! matrix, an RGB status LED and a passive buzzer. Pin wiring comes from
//! `node.toml`; the lock itself runs in a single task.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use tapgate_core::config::{parse_config, LockConfig, NodeConfig};
use tapgate_core::lock::CombinationLock;
use tapgate_core::node::AccessNode;
use tapgate_drivers::feedback::{RgbStatusLed, ToneGenerator};
use tapgate_drivers::input::ButtonPair;
use tapgate_drivers::matrix::{PatternRenderer, PixelDriver};
use tapgate_hal::gpio::ActiveLevel;
use tapgate_hal_rp2040::pins::MATRIX_DATA_PIN;
use tapgate_hal_rp2040::{GpioAllocator, GpioInput, GpioOutput, PinBank, PinError, PioWs2812Line};

mod tasks;

/// Embedded node wiring (compiled into firmware)
/// Edit node.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../node.toml");

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tapgate firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_node_config();
    let (mut bank, board) = PinBank::split(p);

    // Matrix line
    let Pio {
        mut common, sm0, ..
    } = Pio::new(board.pio0, Irqs);
    let line = PioWs2812Line::new(&mut common, sm0, board.matrix_data);
    let matrix = PatternRenderer::new(PixelDriver::new(line, Delay));
    info!("LED matrix on gpio{} (PIO0 SM0)", MATRIX_DATA_PIN);

    // Buttons
    let buttons = ButtonPair::with_levels(
        GpioInput::from_config(unwrap!(bank.take(config.channel_a.pin)), &config.channel_a),
        ActiveLevel::from_inverted(config.channel_a.inverted),
        GpioInput::from_config(unwrap!(bank.take(config.channel_b.pin)), &config.channel_b),
        ActiveLevel::from_inverted(config.channel_b.inverted),
    );
    info!(
        "Buttons: A=gpio{} B=gpio{}",
        config.channel_a.pin, config.channel_b.pin
    );

    // Status LED
    let led = config.status_led;
    let status = RgbStatusLed::with_levels(
        GpioOutput::new(unwrap!(bank.take(led.red.pin))),
        GpioOutput::new(unwrap!(bank.take(led.green.pin))),
        GpioOutput::new(unwrap!(bank.take(led.blue.pin))),
        [led.red, led.green, led.blue].map(|p| ActiveLevel::from_inverted(p.inverted)),
    );
    info!(
        "Status LED: R=gpio{} G=gpio{} B=gpio{}",
        led.red.pin, led.green.pin, led.blue.pin
    );

    // Buzzer
    let buzzer = ToneGenerator::new(GpioOutput::new(unwrap!(bank.take(config.buzzer.pin))), Delay);
    info!("Buzzer: gpio{}", config.buzzer.pin);

    let lock_config = LockConfig::default();
    info!(
        "Lock: {} presses, {} failures before {} ms lockout",
        lock_config.presses_per_attempt, lock_config.max_failed_attempts, lock_config.lockout_ms
    );

    let lock = CombinationLock::new(buttons, buzzer, matrix, status, Delay, lock_config);
    spawner.spawn(tasks::lock_task(AccessNode::new(lock))).unwrap();

    info!("Lock task spawned, firmware running");

    // Main task has nothing else to do; `common` stays alive with it
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Parse the embedded node config and claim its pins
///
/// Falls back to the default wiring if the file does not parse or assigns
/// a pin that is out of range, reserved or used twice.
fn load_node_config() -> NodeConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded node config");
            config
        }
        Err(e) => {
            error!("Failed to parse node.toml: {}", e);
            error!("Using default wiring");
            NodeConfig::default()
        }
    };

    match claim_pins(&config) {
        Ok(()) => config,
        Err((role, e)) => {
            error!("Pin for {} unusable: {}", role, e);
            error!("Using default wiring");
            let fallback = NodeConfig::default();
            if let Err((role, e)) = claim_pins(&fallback) {
                panic!("Default wiring unusable at {}: {}", role, e);
            }
            fallback
        }
    }
}

/// Check that every role gets its own free GPIO
fn claim_pins(config: &NodeConfig) -> Result<(), (&'static str, PinError)> {
    let assignments = config.assignments();
    if let Some(&(role, _)) = assignments.iter().find(|(_, pin)| *pin == MATRIX_DATA_PIN) {
        return Err((role, PinError::Reserved));
    }

    let mut gpio = GpioAllocator::new();
    gpio.allocate_all(&assignments)?;

    for (role, pin) in assignments {
        debug!("{} -> gpio{}", role, pin);
    }
    Ok(())
}
