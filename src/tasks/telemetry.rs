// PostureCare — Telemetry Publisher Task
//
// Every 100 ms: snapshot the reading and posture state, format one protocol
// frame, and push it down the link.  Fire-and-forget — a failed send is
// logged and the frame dropped; the control loop never stalls on telemetry.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::TELEMETRY_PERIOD_MS;
use crate::drivers::link::TelemetryLink;
use crate::state::SharedState;
use crate::telemetry;

pub fn telemetry_task(mut link: impl TelemetryLink, state: Arc<SharedState>) {
    log::info!("Telemetry task started");

    let interval = Duration::from_millis(TELEMETRY_PERIOD_MS);

    loop {
        let tick_start = Instant::now();

        let reading = state.reading();
        let posture = state.posture();
        let frame = telemetry::frame(&reading, posture.state);
        if let Err(e) = link.send_text(&frame) {
            log::warn!("Telemetry send failed: {}", e);
        }

        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}
