use crate::config;
use crate::roster::{Member, Roster};
use log::{debug, warn};
use rand::Rng;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinError {
    /// Spin requested with zero wheel entries (everyone excluded). Recovered
    /// locally; the animator must never see this request.
    EmptyWheel,
    /// Spin requested while a spin is outstanding. Spins cannot overlap.
    AlreadySpinning,
    /// Animation completion delivered while no spin is outstanding.
    NotSpinning,
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinError::EmptyWheel => write!(f, "the wheel has no entries to spin"),
            SpinError::AlreadySpinning => write!(f, "a spin is already in progress"),
            SpinError::NotSpinning => write!(f, "no spin is in progress"),
        }
    }
}

impl Error for SpinError {}

/// What the animation collaborator is handed for one spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    pub angle_degrees: f32,
    pub duration_ms: u64,
}

/// Outcome of one completed spin. `resolved` is `None` when the reported
/// label matched no roster member, which signals an internal inconsistency
/// between the wheel's label set and the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinResult {
    pub raw_label: String,
    pub resolved: Option<Member>,
}

/// Spin state machine: `Idle -> Spinning -> Idle`.
///
/// Resolution hands the result straight back to the caller, so the resolved
/// phase never outlives the `animation_resolved` call and the engine is ready
/// for the next spin immediately. The `Spinning` state doubles as the overlap
/// guard; there is no lock because everything runs on one thread.
#[derive(Debug, Default)]
pub struct SpinEngine {
    state: SpinState,
}

impl SpinEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    /// Starts a spin over the given entries. Valid only from `Idle` with a
    /// non-empty wheel; failures leave the state untouched.
    pub fn spin<R: Rng>(&mut self, entries: &[String], rng: &mut R) -> Result<SpinPlan, SpinError> {
        if self.state == SpinState::Spinning {
            return Err(SpinError::AlreadySpinning);
        }
        if entries.is_empty() {
            return Err(SpinError::EmptyWheel);
        }

        let degrees = rng.random_range(config::SPIN_MIN_DEGREES..=config::SPIN_MAX_DEGREES);
        debug!("Spin started: {} entries, {} degrees", entries.len(), degrees);

        self.state = SpinState::Spinning;
        Ok(SpinPlan {
            angle_degrees: degrees as f32,
            duration_ms: config::SPIN_DURATION_MS,
        })
    }

    /// Accepts the animation's landing label, exactly once per spin, and maps
    /// it back to a member via the roster. Returns the engine to `Idle`.
    pub fn animation_resolved(
        &mut self,
        raw_label: &str,
        roster: &Roster,
    ) -> Result<SpinResult, SpinError> {
        if self.state != SpinState::Spinning {
            return Err(SpinError::NotSpinning);
        }
        self.state = SpinState::Idle;

        let resolved = roster.resolve_label(raw_label).cloned();
        if resolved.is_none() {
            warn!("Spin landed on label {:?} which matches no roster member", raw_label);
        }
        Ok(SpinResult {
            raw_label: raw_label.to_string(),
            resolved,
        })
    }
}
