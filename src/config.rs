// PostureCare — Hardware & System Configuration
// Target: Seeed Studio Xiao ESP32-C3 (RISC-V)

// ---------------------------------------------------------------------------
// GPIO Pin Definitions (Xiao ESP32-C3 pinout)
// ---------------------------------------------------------------------------
pub const PIN_LED_GREEN: i32 = 5;    // D3  — Correct posture
pub const PIN_LED_YELLOW: i32 = 8;   // D8  — Warning (sustained 3 s)
pub const PIN_LED_RED: i32 = 9;      // D9  — Alert (sustained 5 s)
pub const PIN_BUZZER: i32 = 10;      // D10 — Audible alert, driven with the red LED
pub const PIN_UART_TX: i32 = 21;     // D6  — Telemetry link TX
pub const PIN_UART_RX: i32 = 20;     // D7  — Telemetry link RX (unused, line is one-way)

// ADXL335 analog outputs on ADC1 (GPIO number == ADC1 channel on the C3).
pub const ADC_CHANNEL_X: u32 = 2; // D0/A0
pub const ADC_CHANNEL_Y: u32 = 3; // D1/A1
pub const ADC_CHANNEL_Z: u32 = 4; // D2/A2

// ---------------------------------------------------------------------------
// Task Stack Sizes (bytes)
// ---------------------------------------------------------------------------
pub const STACK_SAMPLER: usize = 4096;
pub const STACK_CLASSIFIER: usize = 4096;
pub const STACK_INDICATOR: usize = 4096;
pub const STACK_TELEMETRY: usize = 6144;

// ---------------------------------------------------------------------------
// Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const SAMPLE_PERIOD_MS: u64 = 1000;       // Accelerometer sampling tick
pub const CLASSIFY_PERIOD_MS: u64 = 1000;     // Posture evaluation tick (same as sampling)
pub const INDICATOR_PERIOD_MS: u64 = 1000;    // LED/buzzer refresh
pub const TELEMETRY_PERIOD_MS: u64 = 100;     // Telemetry publish rate
pub const CALIBRATION_WINDOW_MS: u64 = 3000;  // Initial reference-capture window
pub const BOOT_LAMP_TEST_MS: u64 = 300;       // All indicators on at boot

// ---------------------------------------------------------------------------
// Posture Classification
// ---------------------------------------------------------------------------
pub const TILT_THRESHOLD_DEG: f32 = 12.0; // Deviation beyond this counts as bad posture
pub const WARNING_AFTER_MS: u32 = 3000;   // Sustained bad posture → Warning
pub const ALERT_AFTER_MS: u32 = 5000;     // Sustained bad posture → Alert

// ---------------------------------------------------------------------------
// Signal Smoothing
// ---------------------------------------------------------------------------
// Weight of the newest raw sample: smoothed = (1 - α)·previous + α·raw
pub const SMOOTHING_ALPHA: f32 = 0.2;

// ---------------------------------------------------------------------------
// ADXL335 / ADC Scale Factors
// ---------------------------------------------------------------------------
pub const ADC_MAX_COUNTS: f32 = 4095.0;           // 12-bit oneshot reads
pub const ADC_FULL_SCALE_V: f32 = 3.3;            // 11 dB attenuation
pub const ADXL335_ZERO_G_V: f32 = 1.65;           // Output at 0 g (Vs/2 at 3.3 V supply)
pub const ADXL335_SENSITIVITY_V_PER_G: f32 = 0.33;

// ---------------------------------------------------------------------------
// Telemetry Link
// ---------------------------------------------------------------------------
pub const UART_BAUD: u32 = 115_200;
