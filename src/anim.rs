use crate::config;
use log::{debug, info};
use std::thread;
use std::time::Duration;

/// Completion callback for one rotation. Invoked exactly once, on the
/// caller's thread, carrying the label the wheel landed on.
pub type OnComplete = Box<dyn FnOnce(String) + Send>;

/// The rotation animation collaborator.
///
/// The core hands it the label set and a rotation request and waits for the
/// single completion callback; it owns the animation duration and cannot be
/// interrupted once started.
pub trait WheelAnimator {
    /// Installs the wheel's label set. Called after every entries rebuild.
    fn configure(&mut self, count: usize, labels: &[String]);

    /// Rotates by `angle_degrees` over `duration_ms`, then reports the
    /// landing label through `on_complete`.
    fn rotate(&mut self, angle_degrees: f32, duration_ms: u64, on_complete: OnComplete);
}

/// Stand-in for the graphical wheel: equal-width segments, pointer fixed at
/// segment zero's start, wheel rotated by the requested angle. The landing
/// segment is whichever one the pointer ends up inside after the final turn.
#[derive(Debug, Default)]
pub struct SimulatedWheel {
    labels: Vec<String>,
    /// When set, `rotate` sleeps for the animation duration so the terminal
    /// app gets the same fixed-length wait as the original wheel. Tests leave
    /// it off.
    real_time: bool,
}

impl SimulatedWheel {
    pub fn new(real_time: bool) -> Self {
        SimulatedWheel {
            labels: Vec::new(),
            real_time,
        }
    }

    fn landing_label(&self, angle_degrees: f32) -> Option<String> {
        if self.labels.is_empty() {
            return None;
        }
        let final_angle = angle_degrees.rem_euclid(config::FULL_TURN_DEGREES);
        let segment_degrees = config::FULL_TURN_DEGREES / self.labels.len() as f32;
        let index = (final_angle / segment_degrees) as usize % self.labels.len();
        Some(self.labels[index].clone())
    }
}

impl WheelAnimator for SimulatedWheel {
    fn configure(&mut self, count: usize, labels: &[String]) {
        debug_assert_eq!(count, labels.len());
        debug!("Wheel configured with {} labels", count);
        self.labels = labels.to_vec();
    }

    fn rotate(&mut self, angle_degrees: f32, duration_ms: u64, on_complete: OnComplete) {
        info!("Rotating wheel by {:.0} degrees over {} ms", angle_degrees, duration_ms);
        if self.real_time {
            thread::sleep(Duration::from_millis(duration_ms));
        }
        // The label set is installed before every spin, so landing_label only
        // misses if rotate was called without configure.
        let label = self.landing_label(angle_degrees).unwrap_or_default();
        on_complete(label);
    }
}
