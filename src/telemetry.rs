// PostureCare — Telemetry Frame Formatting
//
// Line-oriented ASCII protocol consumed by the phone dashboard: one block
// per publish tick, each value on its own `*`-prefixed, newline-terminated
// line so every display widget picks out its own channel.

use crate::state::{PostureState, Reading};

/// Format one telemetry block: three accelerations (g), the deviation angle
/// (degrees), and the posture label.  Fractional values carry exactly two
/// decimal places.
pub fn frame(reading: &Reading, state: PostureState) -> String {
    format!(
        "*X{:.2}g\n*Y{:.2}g\n*Z{:.2}g\n*A{:.2}\n*E{}\n",
        reading.ax,
        reading.ay,
        reading.az,
        reading.angle,
        state.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_frame_matches_protocol_exactly() {
        let reading = Reading {
            ax: 1.23,
            ay: -0.50,
            az: 9.81,
            angle: 15.0,
        };
        assert_eq!(
            frame(&reading, PostureState::Alert),
            "*X1.23g\n*Y-0.50g\n*Z9.81g\n*A15.00\n*EIncorrecta-Alerta\n"
        );
    }

    #[test]
    fn startup_frame_is_all_zeros_and_correct() {
        assert_eq!(
            frame(&Reading::default(), PostureState::Correct),
            "*X0.00g\n*Y0.00g\n*Z0.00g\n*A0.00\n*ECorrecta\n"
        );
    }

    #[test]
    fn labels_cover_every_state() {
        assert_eq!(PostureState::Correct.label(), "Correcta");
        assert_eq!(PostureState::Warning.label(), "Incorrecta-Advertencia");
        assert_eq!(PostureState::Alert.label(), "Incorrecta-Alerta");
    }
}
