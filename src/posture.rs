// PostureCare — Posture Classification Logic
//
// Two pure pieces: the deviation-angle estimate between the current smoothed
// acceleration vector and the calibrated reference, and the time-hysteresis
// state machine that escalates Correct → Warning → Alert while the angle
// stays over threshold.

use crate::config::{ALERT_AFTER_MS, TILT_THRESHOLD_DEG, WARNING_AFTER_MS};
use crate::state::{Posture, PostureState};

/// Angle in degrees between the current vector and the reference vector.
///
/// `cosθ = (v·r) / (|v|·|r|)`, clamped to [-1, 1] to absorb floating-point
/// rounding.  A zero-magnitude vector on either side yields 0° (treated as
/// correct posture) so the state machine stays total.
pub fn deviation_angle(v: [f32; 3], r: [f32; 3]) -> f32 {
    let dot = v[0] * r[0] + v[1] * r[1] + v[2] * r[2];
    let mag_v = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    let mag_r = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
    if mag_v == 0.0 || mag_r == 0.0 {
        return 0.0;
    }
    let cos_theta = (dot / (mag_v * mag_r)).clamp(-1.0, 1.0);
    cos_theta.acos().to_degrees()
}

/// Strict comparison: sitting exactly on the threshold is still correct.
pub fn over_threshold(angle: f32) -> bool {
    angle.abs() > TILT_THRESHOLD_DEG
}

/// One evaluation tick of the hysteresis state machine.
///
/// Over threshold: accumulate `tick_ms` of bad posture and escalate once the
/// warning/alert durations are reached (the state otherwise stays whatever
/// it was).  Under threshold: immediate reset to Correct, duration zeroed —
/// an abrupt reset, not a sliding window.
pub fn step(prev: Posture, over_threshold: bool, tick_ms: u32) -> Posture {
    if !over_threshold {
        return Posture {
            state: PostureState::Correct,
            bad_ms: 0,
        };
    }

    let bad_ms = prev.bad_ms + tick_ms;
    let state = if bad_ms >= ALERT_AFTER_MS {
        PostureState::Alert
    } else if bad_ms >= WARNING_AFTER_MS {
        PostureState::Warning
    } else {
        prev.state
    };
    Posture { state, bad_ms }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK_MS: u32 = 1000;

    #[test]
    fn aligned_vectors_have_zero_angle() {
        let angle = deviation_angle([0.0, 0.0, 1.0], [0.0, 0.0, 1.0]);
        assert!(angle.abs() < 1e-3);
    }

    #[test]
    fn orthogonal_vectors_are_ninety_degrees() {
        let angle = deviation_angle([1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn opposite_vectors_are_one_eighty() {
        let angle = deviation_angle([0.0, 0.0, -2.0], [0.0, 0.0, 0.5]);
        assert!((angle - 180.0).abs() < 1e-3);
    }

    #[test]
    fn angle_stays_in_range_despite_rounding() {
        // Parallel vectors of very different magnitude can push cosθ just
        // past 1.0 in f32; the clamp must keep acos defined.
        let angle = deviation_angle([0.1, 0.2, 0.3], [10.0, 20.0, 30.0]);
        assert!((0.0..=180.0).contains(&angle));
        assert!(angle < 0.5);
    }

    #[test]
    fn zero_magnitude_vector_reads_as_upright() {
        assert_eq!(deviation_angle([0.0; 3], [0.0, 0.0, 1.0]), 0.0);
        assert_eq!(deviation_angle([0.0, 1.0, 0.0], [0.0; 3]), 0.0);
    }

    #[test]
    fn threshold_comparison_is_strict() {
        assert!(!over_threshold(TILT_THRESHOLD_DEG));
        assert!(!over_threshold(-TILT_THRESHOLD_DEG));
        assert!(over_threshold(TILT_THRESHOLD_DEG + 0.01));
    }

    #[test]
    fn sustained_tilt_escalates_then_resets() {
        // 1 s ticks, warning at 3 s, alert at 5 s.
        let mut p = Posture::default();
        let mut states = Vec::new();
        for _ in 0..5 {
            p = step(p, true, TICK_MS);
            states.push(p.state);
        }
        assert_eq!(
            states,
            [
                PostureState::Correct,
                PostureState::Correct,
                PostureState::Warning,
                PostureState::Warning,
                PostureState::Alert,
            ]
        );

        // One good tick resets immediately.
        p = step(p, false, TICK_MS);
        assert_eq!(p.state, PostureState::Correct);
        assert_eq!(p.bad_ms, 0);
    }

    #[test]
    fn duration_accumulates_monotonically_while_tilted() {
        let mut p = Posture::default();
        for expected in (1..=7).map(|i| i * TICK_MS) {
            p = step(p, true, TICK_MS);
            assert_eq!(p.bad_ms, expected);
        }
        assert_eq!(p.state, PostureState::Alert);
    }

    #[test]
    fn tilt_scenario_escalates_at_time_boundaries() {
        // Upright through calibration, then a ~20° lean held for 6 s:
        // warning at the 3000 ms mark, alert at the 5000 ms mark.
        let reference = [0.0, 0.0, 1.0];
        let lean = 20.0_f32.to_radians();
        let tilted = [lean.sin(), 0.0, lean.cos()];

        let mut p = Posture::default();
        let mut labels = Vec::new();
        for v in [reference; 3].into_iter().chain([tilted; 6]) {
            let angle = deviation_angle(v, reference);
            p = step(p, over_threshold(angle), TICK_MS);
            labels.push(p.state.label());
        }
        assert_eq!(
            labels,
            [
                "Correcta",
                "Correcta",
                "Correcta",
                "Correcta",
                "Correcta",
                "Incorrecta-Advertencia",
                "Incorrecta-Advertencia",
                "Incorrecta-Alerta",
                "Incorrecta-Alerta",
            ]
        );
    }

    #[test]
    fn boundary_ticks_never_accumulate() {
        // Repeated ticks with the angle held exactly on the threshold must
        // leave the machine at Correct with zero duration.
        let mut p = Posture::default();
        for _ in 0..10 {
            p = step(p, over_threshold(TILT_THRESHOLD_DEG), TICK_MS);
        }
        assert_eq!(p.state, PostureState::Correct);
        assert_eq!(p.bad_ms, 0);
    }
}
