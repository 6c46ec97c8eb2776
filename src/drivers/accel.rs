// PostureCare — ADXL335 Accelerometer Driver
//
// The ADXL335 is a purely analog part: one voltage output per axis, read
// through the ESP-IDF oneshot ADC (12-bit, 11 dB attenuation for the full
// 0–3.3 V swing).  Raw counts are converted to g using the part's zero-g
// bias (Vs/2) and 0.33 V/g sensitivity.

use crate::config::*;

#[derive(Debug, Clone, Copy)]
pub enum Axis {
    X,
    Y,
    Z,
}

const fn channel_of(axis: Axis) -> esp_idf_sys::adc_channel_t {
    match axis {
        Axis::X => ADC_CHANNEL_X as esp_idf_sys::adc_channel_t,
        Axis::Y => ADC_CHANNEL_Y as esp_idf_sys::adc_channel_t,
        Axis::Z => ADC_CHANNEL_Z as esp_idf_sys::adc_channel_t,
    }
}

fn check(ret: esp_idf_sys::esp_err_t, what: &str) -> anyhow::Result<()> {
    if ret == esp_idf_sys::ESP_OK {
        Ok(())
    } else {
        anyhow::bail!("{} failed ({})", what, ret)
    }
}

/// Oneshot-ADC handle configured for the three ADXL335 channels.
/// The raw handle is not `Send`, so the driver is constructed inside the
/// sampler task that owns it.
pub struct Adxl335 {
    handle: esp_idf_sys::adc_oneshot_unit_handle_t,
}

impl Adxl335 {
    pub fn new() -> anyhow::Result<Self> {
        unsafe {
            let mut handle: esp_idf_sys::adc_oneshot_unit_handle_t = core::ptr::null_mut();
            let unit_cfg = esp_idf_sys::adc_oneshot_unit_init_cfg_t {
                unit_id: esp_idf_sys::adc_unit_t_ADC_UNIT_1,
                ulp_mode: esp_idf_sys::adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
                ..core::mem::zeroed()
            };
            check(
                esp_idf_sys::adc_oneshot_new_unit(&unit_cfg, &mut handle),
                "ADC unit init",
            )?;

            let chan_cfg = esp_idf_sys::adc_oneshot_chan_cfg_t {
                atten: esp_idf_sys::adc_atten_t_ADC_ATTEN_DB_11,
                bitwidth: esp_idf_sys::adc_bitwidth_t_ADC_BITWIDTH_12,
            };
            for axis in [Axis::X, Axis::Y, Axis::Z] {
                check(
                    esp_idf_sys::adc_oneshot_config_channel(handle, channel_of(axis), &chan_cfg),
                    "ADC channel config",
                )?;
            }

            log::info!("ADXL335 initialised (ADC1 ch{ADC_CHANNEL_X}/{ADC_CHANNEL_Y}/{ADC_CHANNEL_Z}, 12-bit, 11 dB)");
            Ok(Self { handle })
        }
    }

    /// One instantaneous reading of a single axis, in g.
    pub fn read_axis(&self, axis: Axis) -> anyhow::Result<f32> {
        let mut raw: i32 = 0;
        let ret = unsafe { esp_idf_sys::adc_oneshot_read(self.handle, channel_of(axis), &mut raw) };
        check(ret, "ADC read")?;

        let volts = (raw as f32 / ADC_MAX_COUNTS) * ADC_FULL_SCALE_V;
        Ok((volts - ADXL335_ZERO_G_V) / ADXL335_SENSITIVITY_V_PER_G)
    }

    /// Read all three axes for one sampling tick.
    pub fn read(&self) -> anyhow::Result<[f32; 3]> {
        Ok([
            self.read_axis(Axis::X)?,
            self.read_axis(Axis::Y)?,
            self.read_axis(Axis::Z)?,
        ])
    }
}
