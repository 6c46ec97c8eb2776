// PostureCare — Classifier Task
//
// Once per evaluation period (same cadence as sampling): compute the
// deviation angle between the current smoothed reading and the calibration
// reference, write it back into the shared reading, and advance the
// hysteresis state machine.  Idle until calibration completes.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::CLASSIFY_PERIOD_MS;
use crate::posture;
use crate::state::SharedState;

pub fn classifier_task(state: Arc<SharedState>) {
    log::info!("Classifier task started");

    let interval = Duration::from_millis(CLASSIFY_PERIOD_MS);
    let tick_ms = CLASSIFY_PERIOD_MS as u32;

    loop {
        let tick_start = Instant::now();

        if let Some(reference) = state.reference() {
            let angle = state.update_reading(|r| {
                r.angle = posture::deviation_angle([r.ax, r.ay, r.az], reference);
                r.angle
            });

            let next = posture::step(state.posture(), posture::over_threshold(angle), tick_ms);
            state.set_posture(next);
        }

        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}
