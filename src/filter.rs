// PostureCare — Signal Smoothing
//
// First-order exponential filter applied independently per axis to knock
// down ADC noise before calibration and angle estimation.

use crate::config::SMOOTHING_ALPHA;

/// `smoothed = (1 - α)·previous + α·raw` with α = 0.2.
pub fn smooth(raw: f32, previous: f32) -> f32 {
    (1.0 - SMOOTHING_ALPHA) * previous + SMOOTHING_ALPHA * raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_state_is_fixed_point() {
        // Constant input with a converged filter must stay put.
        let c = 0.98_f32;
        assert!((smooth(c, c) - c).abs() < 1e-6);
    }

    #[test]
    fn first_sample_from_zero_takes_alpha_fraction() {
        assert!((smooth(1.0, 0.0) - SMOOTHING_ALPHA).abs() < 1e-6);
    }

    #[test]
    fn converges_toward_constant_input() {
        let target = -0.5_f32;
        let mut value = 1.0_f32;
        for _ in 0..60 {
            value = smooth(target, value);
        }
        assert!((value - target).abs() < 1e-3);
    }
}
