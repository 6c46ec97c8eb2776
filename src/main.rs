// PostureCare — Firmware Entry Point
//
// Boot sequence:
//   1. Initialise logging and take the peripherals.
//   2. Bring up the indicator panel and run a short lamp test.
//   3. Bring up the UART telemetry link.
//   4. Spawn the sampler, classifier, indicator, and telemetry tasks.
//
// The first 3 seconds after boot are the calibration window: the user holds
// a neutral posture while the sampler captures the reference vector.  All
// four tasks then run for the lifetime of the device.

mod calibration;
mod config;
mod drivers;
mod filter;
mod posture;
mod state;
mod tasks;
mod telemetry;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use esp_idf_hal::gpio::{AnyIOPin, OutputPin};
use esp_idf_hal::prelude::*;
use esp_idf_hal::uart::{config::Config as UartConfig, UartDriver};

use crate::config::*;
use crate::drivers::indicator::IndicatorPanel;
use crate::drivers::link::UartLink;
use crate::state::SharedState;

fn main() -> anyhow::Result<()> {
    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("PostureCare firmware starting…");

    // ---- Peripherals ------------------------------------------------------
    let peripherals = Peripherals::take()?;

    // ---- Indicator panel (LEDs + buzzer) -----------------------------------
    let mut panel = IndicatorPanel::new(
        peripherals.pins.gpio5.downgrade_output(),  // green
        peripherals.pins.gpio8.downgrade_output(),  // yellow
        peripherals.pins.gpio9.downgrade_output(),  // red
        peripherals.pins.gpio10.downgrade_output(), // buzzer
    )?;
    panel.lamp_test();

    // ---- Telemetry link ----------------------------------------------------
    let uart_config = UartConfig::new().baudrate(UART_BAUD.Hz());
    let uart = UartDriver::new(
        peripherals.uart1,
        peripherals.pins.gpio21, // TX
        peripherals.pins.gpio20, // RX (unused, the link is one-way)
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &uart_config,
    )?;
    let link = UartLink::new(uart);

    // ---- Shared state -----------------------------------------------------
    let shared = Arc::new(SharedState::new());

    // ---- Spawn tasks (map to FreeRTOS tasks via std::thread) ---------------

    // Sampler task — owns the accelerometer and the calibration window.
    let sampler_state = Arc::clone(&shared);
    thread::Builder::new()
        .name("sampler".into())
        .stack_size(STACK_SAMPLER)
        .spawn(move || {
            tasks::sampler::sampler_task(sampler_state);
        })?;

    // Classifier task — angle estimation + hysteresis state machine.
    let classifier_state = Arc::clone(&shared);
    thread::Builder::new()
        .name("classifier".into())
        .stack_size(STACK_CLASSIFIER)
        .spawn(move || {
            tasks::classifier::classifier_task(classifier_state);
        })?;

    // Indicator task — LEDs + buzzer.
    let indicator_state = Arc::clone(&shared);
    thread::Builder::new()
        .name("indicator".into())
        .stack_size(STACK_INDICATOR)
        .spawn(move || {
            tasks::indicator::indicator_task(panel, indicator_state);
        })?;

    // Telemetry task — frame formatting + UART publish.
    let telemetry_state = Arc::clone(&shared);
    thread::Builder::new()
        .name("telemetry".into())
        .stack_size(STACK_TELEMETRY)
        .spawn(move || {
            tasks::telemetry::telemetry_task(link, telemetry_state);
        })?;

    log::info!(
        "Boot complete — hold a neutral posture, calibrating for {} ms",
        CALIBRATION_WINDOW_MS
    );

    // Main thread has nothing left to do — park it forever.
    // (All work happens in the spawned FreeRTOS tasks.)
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
