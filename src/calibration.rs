// PostureCare — Calibration Accumulator
//
// During the startup window the sampler feeds every smoothed reading in
// here; the per-axis arithmetic mean becomes the neutral-posture reference
// vector.  Retired once calibration completes.

#[derive(Debug, Default)]
pub struct Calibrator {
    sum: [f32; 3],
    samples: u32,
}

impl Calibrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulate(&mut self, sample: [f32; 3]) {
        for (total, axis) in self.sum.iter_mut().zip(sample) {
            *total += axis;
        }
        self.samples += 1;
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Per-axis mean of the accumulated samples, or `None` when nothing has
    /// been accumulated yet (finalization is deferred, never divides by
    /// zero).
    pub fn finish(&self) -> Option<[f32; 3]> {
        if self.samples == 0 {
            return None;
        }
        let n = self.samples as f32;
        Some([self.sum[0] / n, self.sum[1] / n, self.sum[2] / n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_accumulated_samples() {
        let mut cal = Calibrator::new();
        cal.accumulate([0.0, 1.0, 9.0]);
        cal.accumulate([0.2, 1.0, 10.0]);
        cal.accumulate([0.1, 1.0, 11.0]);

        let base = cal.finish().unwrap();
        assert!((base[0] - 0.1).abs() < 1e-6);
        assert!((base[1] - 1.0).abs() < 1e-6);
        assert!((base[2] - 10.0).abs() < 1e-6);
        assert_eq!(cal.samples(), 3);
    }

    #[test]
    fn single_sample_is_its_own_mean() {
        let mut cal = Calibrator::new();
        cal.accumulate([0.05, -0.02, 0.99]);
        assert_eq!(cal.finish(), Some([0.05, -0.02, 0.99]));
    }

    #[test]
    fn empty_accumulator_defers_finalization() {
        assert_eq!(Calibrator::new().finish(), None);
    }
}
