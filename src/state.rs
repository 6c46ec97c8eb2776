// PostureCare — Shared State & Data Types
//
// The four tasks share three pieces of data: the latest smoothed reading,
// the posture classification, and the calibration reference.  All of it
// lives behind `SharedState` so consumers always see a consistent snapshot
// (no torn multi-field reads across the float fields).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Reading — smoothed 3-axis acceleration + last computed deviation angle
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default)]
pub struct Reading {
    pub ax: f32,
    pub ay: f32,
    pub az: f32,
    /// Deviation angle in degrees; stays at its last value until the
    /// classifier recomputes it (zero before calibration).
    pub angle: f32,
}

// ---------------------------------------------------------------------------
// Posture Classification
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostureState {
    #[default]
    Correct,
    Warning,
    Alert,
}

impl PostureState {
    /// Telemetry label, kept verbatim from the original dashboard protocol
    /// so the downstream display widgets keep parsing.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Correct => "Correcta",
            Self::Warning => "Incorrecta-Advertencia",
            Self::Alert => "Incorrecta-Alerta",
        }
    }
}

/// Classification output plus the accumulated time spent over threshold.
/// `bad_ms` is zero whenever `state == Correct`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Posture {
    pub state: PostureState,
    pub bad_ms: u32,
}

// ---------------------------------------------------------------------------
// SharedState — the single synchronization point between tasks
// ---------------------------------------------------------------------------
// Writers: sampler (reading axes, reference), classifier (angle, posture).
// Readers: indicator and telemetry tasks.  The calibrated flag is written
// once, after the reference vector, and gates the classifier.
pub struct SharedState {
    reading: Mutex<Reading>,
    posture: Mutex<Posture>,
    reference: Mutex<[f32; 3]>,
    calibrated: AtomicBool,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            reading: Mutex::new(Reading::default()),
            posture: Mutex::new(Posture::default()),
            reference: Mutex::new([0.0; 3]),
            calibrated: AtomicBool::new(false),
        }
    }

    /// Mutate the reading under the lock; used by the sampler (smoothing)
    /// and the classifier (angle write-back).
    pub fn update_reading<R>(&self, f: impl FnOnce(&mut Reading) -> R) -> R {
        f(&mut self.reading.lock().unwrap())
    }

    /// Consistent snapshot of the latest reading.
    pub fn reading(&self) -> Reading {
        *self.reading.lock().unwrap()
    }

    pub fn posture(&self) -> Posture {
        *self.posture.lock().unwrap()
    }

    pub fn set_posture(&self, posture: Posture) {
        *self.posture.lock().unwrap() = posture;
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibrated.load(Ordering::Acquire)
    }

    /// Store the calibration reference and raise the calibrated flag.
    /// Called exactly once per session, by the sampler.
    pub fn set_reference(&self, base: [f32; 3]) {
        *self.reference.lock().unwrap() = base;
        self.calibrated.store(true, Ordering::Release);
    }

    /// The reference vector, available once calibration has completed.
    pub fn reference(&self) -> Option<[f32; 3]> {
        if self.is_calibrated() {
            Some(*self.reference.lock().unwrap())
        } else {
            None
        }
    }
}
