// PostureCare — Telemetry Link
//
// One-way, line-oriented text transport to the remote display client.
// Delivery is best-effort: the publisher logs failures and moves on.

use esp_idf_hal::uart::UartDriver;

pub trait TelemetryLink {
    fn send_text(&mut self, payload: &str) -> anyhow::Result<()>;
}

/// Telemetry over a plain UART (e.g. an HC-05/HM-10 bridge or a wired
/// serial console on the display side).
pub struct UartLink {
    uart: UartDriver<'static>,
}

impl UartLink {
    pub fn new(uart: UartDriver<'static>) -> Self {
        Self { uart }
    }
}

impl TelemetryLink for UartLink {
    fn send_text(&mut self, payload: &str) -> anyhow::Result<()> {
        self.uart.write(payload.as_bytes())?;
        Ok(())
    }
}
