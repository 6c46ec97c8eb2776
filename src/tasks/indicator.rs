// PostureCare — Indicator Task
//
// Pure consumer: refreshes the LED/buzzer panel from the current posture
// state once per second.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::INDICATOR_PERIOD_MS;
use crate::drivers::indicator::IndicatorPanel;
use crate::state::SharedState;

pub fn indicator_task(mut panel: IndicatorPanel<'static>, state: Arc<SharedState>) {
    log::info!("Indicator task started");

    let interval = Duration::from_millis(INDICATOR_PERIOD_MS);

    loop {
        let tick_start = Instant::now();

        panel.apply(state.posture().state);

        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}
