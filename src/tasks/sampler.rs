// PostureCare — Sampler Task
//
// Once per sampling period: read the three ADXL335 axes, smooth each one,
// and publish the result.  During the startup calibration window every
// smoothed sample is also accumulated; when the window elapses the per-axis
// mean becomes the neutral-posture reference vector.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::calibration::Calibrator;
use crate::config::*;
use crate::drivers::accel::Adxl335;
use crate::filter;
use crate::state::SharedState;

pub fn sampler_task(state: Arc<SharedState>) {
    log::info!("Sampler task started");

    // The ADC handle is not Send, so the driver lives inside this task.
    let accel = match Adxl335::new() {
        Ok(a) => a,
        Err(e) => {
            log::error!("ADXL335 init failed in sampler task: {}", e);
            return;
        }
    };

    let mut calibrator = Calibrator::new();
    let window = Duration::from_millis(CALIBRATION_WINDOW_MS);
    let interval = Duration::from_millis(SAMPLE_PERIOD_MS);
    let start = Instant::now();

    loop {
        let tick_start = Instant::now();

        match accel.read() {
            Ok(raw) => {
                let smoothed = state.update_reading(|r| {
                    r.ax = filter::smooth(raw[0], r.ax);
                    r.ay = filter::smooth(raw[1], r.ay);
                    r.az = filter::smooth(raw[2], r.az);
                    [r.ax, r.ay, r.az]
                });

                if !state.is_calibrated() {
                    calibrator.accumulate(smoothed);
                    // Finalization waits for the window AND at least one
                    // accumulated sample (Calibrator::finish is None when
                    // empty), so the mean can never divide by zero.
                    if start.elapsed() >= window {
                        if let Some(base) = calibrator.finish() {
                            state.set_reference(base);
                            log::info!(
                                "Calibration complete: X={:.2} Y={:.2} Z={:.2} ({} samples)",
                                base[0],
                                base[1],
                                base[2],
                                calibrator.samples()
                            );
                        }
                    }
                }
            }
            Err(e) => {
                // A bad sample never halts the loop; retry next tick.
                log::warn!("Accelerometer read error: {}", e);
            }
        }

        // Sleep for the remainder of the sampling period.
        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}
