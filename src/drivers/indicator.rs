// PostureCare — Indicator Panel Driver
//
// Three status LEDs plus a buzzer on plain GPIO.  Exactly one LED is lit at
// a time; the buzzer sounds only in the alert state.

use std::thread;
use std::time::Duration;

use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};

use crate::config::BOOT_LAMP_TEST_MS;
use crate::state::PostureState;

pub struct IndicatorPanel<'d> {
    green: PinDriver<'d, AnyOutputPin, Output>,
    yellow: PinDriver<'d, AnyOutputPin, Output>,
    red: PinDriver<'d, AnyOutputPin, Output>,
    buzzer: PinDriver<'d, AnyOutputPin, Output>,
}

impl IndicatorPanel<'static> {
    pub fn new(
        green: AnyOutputPin,
        yellow: AnyOutputPin,
        red: AnyOutputPin,
        buzzer: AnyOutputPin,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            green: PinDriver::output(green)?,
            yellow: PinDriver::output(yellow)?,
            red: PinDriver::output(red)?,
            buzzer: PinDriver::output(buzzer)?,
        })
    }
}

impl<'d> IndicatorPanel<'d> {
    /// Boot self-test: light everything briefly, then settle on the
    /// correct-posture indication.
    pub fn lamp_test(&mut self) {
        let _ = self.green.set_high();
        let _ = self.yellow.set_high();
        let _ = self.red.set_high();
        let _ = self.buzzer.set_high();
        thread::sleep(Duration::from_millis(BOOT_LAMP_TEST_MS));
        self.apply(PostureState::Correct);
    }

    /// Drive the mutually-exclusive output combination for a posture state.
    pub fn apply(&mut self, state: PostureState) {
        match state {
            PostureState::Correct => {
                let _ = self.green.set_high();
                let _ = self.yellow.set_low();
                let _ = self.red.set_low();
                let _ = self.buzzer.set_low();
            }
            PostureState::Warning => {
                let _ = self.green.set_low();
                let _ = self.yellow.set_high();
                let _ = self.red.set_low();
                let _ = self.buzzer.set_low();
            }
            PostureState::Alert => {
                let _ = self.green.set_low();
                let _ = self.yellow.set_low();
                let _ = self.red.set_high();
                let _ = self.buzzer.set_high();
            }
        }
    }
}
