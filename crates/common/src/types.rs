use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::Display;

/// Number of triage tiers tracked by the tool
pub const TRIAGE_LEVEL_COUNT: usize = 5;

/// Maximum patients a tier will take before it stops accepting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Capacity {
    Bounded(u32),
    Unbounded,
}

impl Capacity {
    /// Whether `waiting` patients already fill this capacity
    pub fn is_reached(&self, waiting: u32) -> bool {
        match self {
            Capacity::Bounded(cap) => waiting >= *cap,
            Capacity::Unbounded => false,
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Bounded(cap) => write!(f, "{}", cap),
            Capacity::Unbounded => write!(f, "∞"),
        }
    }
}

/// A clinical priority tier, 1 being the most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriageLevel {
    pub level: u8,
    pub label: &'static str,
    /// Average clinician minutes consumed per patient
    pub consult_minutes: u32,
    pub capacity: Capacity,
}

/// The fixed triage table, ordered from most to least urgent
pub const TRIAGE_LEVELS: [TriageLevel; TRIAGE_LEVEL_COUNT] = [
    TriageLevel { level: 1, label: "Triage 1", consult_minutes: 60, capacity: Capacity::Unbounded },
    TriageLevel { level: 2, label: "Triage 2", consult_minutes: 45, capacity: Capacity::Bounded(6) },
    TriageLevel { level: 3, label: "Triage 3", consult_minutes: 30, capacity: Capacity::Bounded(15) },
    TriageLevel { level: 4, label: "Triage 4", consult_minutes: 20, capacity: Capacity::Bounded(25) },
    TriageLevel { level: 5, label: "Triage 5", consult_minutes: 15, capacity: Capacity::Bounded(30) },
];

/// Waiting patients per triage level, index-aligned with [`TRIAGE_LEVELS`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientCounts(pub [u32; TRIAGE_LEVEL_COUNT]);

impl PatientCounts {
    pub fn new(counts: [u32; TRIAGE_LEVEL_COUNT]) -> Self {
        Self(counts)
    }

    /// Count at `index`, zero when out of range
    pub fn get(&self, index: usize) -> u32 {
        self.0.get(index).copied().unwrap_or(0)
    }

    /// Replace the count at `index`; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, count: u32) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = count;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn total(&self) -> u64 {
        self.iter().map(u64::from).sum()
    }
}

impl From<[u32; TRIAGE_LEVEL_COUNT]> for PatientCounts {
    fn from(counts: [u32; TRIAGE_LEVEL_COUNT]) -> Self {
        Self(counts)
    }
}

/// Staffing inputs for the capacity calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityConfig {
    pub clinicians: u32,
    /// Hour of day (24h clock) the clinic stops seeing patients
    pub closing_hour: u32,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            clinicians: 2,
            closing_hour: 22,
        }
    }
}

/// Whether a triage level is still taking new patients
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
pub enum AcceptStatus {
    Accept,
    Stop,
}

impl AcceptStatus {
    pub fn is_stop(&self) -> bool {
        matches!(self, AcceptStatus::Stop)
    }
}

/// How restrictive the current intake decision is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BannerSeverity {
    /// Every level is accepting
    Normal,
    /// Some lower-acuity levels are paused
    Restricted,
    /// Only the most urgent level is being considered
    Critical,
}

/// Headline intake decision shown above the triage table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub text: String,
    pub severity: BannerSeverity,
}

/// Estimated minutes until the next patient at a level is seen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WaitEstimate {
    Minutes(u64),
    /// No clinicians on duty
    Unbounded,
}

impl WaitEstimate {
    pub fn minutes(&self) -> Option<u64> {
        match self {
            WaitEstimate::Minutes(m) => Some(*m),
            WaitEstimate::Unbounded => None,
        }
    }
}

impl fmt::Display for WaitEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitEstimate::Minutes(m) => write!(f, "{}", m),
            WaitEstimate::Unbounded => write!(f, "∞"),
        }
    }
}
