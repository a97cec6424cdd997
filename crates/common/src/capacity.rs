//! Capacity arithmetic
//!
//! All functions here are pure: the wall-clock reading is passed in so the
//! same inputs always produce the same report.

use chrono::Timelike;
use serde::Serialize;

use crate::types::{
    AcceptStatus, Banner, BannerSeverity, CapacityConfig, PatientCounts, TriageLevel, WaitEstimate,
    TRIAGE_LEVELS, TRIAGE_LEVEL_COUNT,
};

/// Clinician-minutes left before closing, summed across all clinicians.
///
/// Seconds are ignored. Once the closing hour has passed the result is zero;
/// it does not roll over into the next day.
pub fn remaining_minutes(config: &CapacityConfig, now: &impl Timelike) -> u64 {
    let until_close =
        (i64::from(config.closing_hour) - i64::from(now.hour())) * 60 - i64::from(now.minute());
    (until_close.max(0) as u64) * u64::from(config.clinicians)
}

/// Clinician-minutes demanded by the patients waiting at each level
pub fn workloads(patients: &PatientCounts) -> [u64; TRIAGE_LEVEL_COUNT] {
    let mut out = [0; TRIAGE_LEVEL_COUNT];
    for (i, level) in TRIAGE_LEVELS.iter().enumerate() {
        out[i] = u64::from(patients.get(i)) * u64::from(level.consult_minutes);
    }
    out
}

/// Running total of workload from the most urgent level down to each level
pub fn cumulative_workloads(workloads: &[u64; TRIAGE_LEVEL_COUNT]) -> [u64; TRIAGE_LEVEL_COUNT] {
    let mut out = [0; TRIAGE_LEVEL_COUNT];
    let mut running = 0;
    for (i, w) in workloads.iter().enumerate() {
        running += w;
        out[i] = running;
    }
    out
}

/// Accept/stop decision for a single level.
///
/// A full level stops regardless of workload; otherwise it stops once the
/// work queued at it and above no longer fits in the remaining minutes.
pub fn level_status(
    level: &TriageLevel,
    waiting: u32,
    cumulative_workload: u64,
    remaining: u64,
) -> AcceptStatus {
    if level.capacity.is_reached(waiting) || cumulative_workload > remaining {
        AcceptStatus::Stop
    } else {
        AcceptStatus::Accept
    }
}

/// Index of the most urgent level that has stopped accepting
pub fn lowest_stopped(statuses: &[AcceptStatus]) -> Option<usize> {
    statuses.iter().position(AcceptStatus::is_stop)
}

/// Headline decision derived from the first stopped level
pub fn banner_for(lowest_stopped: Option<usize>) -> Banner {
    match lowest_stopped {
        None => Banner {
            text: "Accepting all triage levels".to_string(),
            severity: BannerSeverity::Normal,
        },
        Some(0) => Banner {
            text: "CRITICAL ONLY – Triage 1".to_string(),
            severity: BannerSeverity::Critical,
        },
        Some(index) => Banner {
            text: format!("Accepting Triage 1–{} only", index),
            severity: BannerSeverity::Restricted,
        },
    }
}

/// Expected wait for the next arrival at `index`.
///
/// Counts all work at more urgent levels plus everyone already queued at the
/// same level, shared across clinicians and rounded half up.
pub fn estimated_wait(
    patients: &PatientCounts,
    workloads: &[u64; TRIAGE_LEVEL_COUNT],
    clinicians: u32,
    index: usize,
) -> WaitEstimate {
    if clinicians == 0 {
        return WaitEstimate::Unbounded;
    }
    let Some(level) = TRIAGE_LEVELS.get(index) else {
        return WaitEstimate::Minutes(0);
    };

    let higher: u64 = workloads[..index].iter().sum();
    let same_ahead = u64::from(patients.get(index).saturating_sub(1)) * u64::from(level.consult_minutes);
    let clinicians = u64::from(clinicians);
    WaitEstimate::Minutes((2 * (higher + same_ahead) + clinicians) / (2 * clinicians))
}

/// Derived figures for one triage level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelReport {
    pub triage: TriageLevel,
    pub waiting: u32,
    pub workload: u64,
    pub cumulative_workload: u64,
    pub status: AcceptStatus,
    pub estimated_wait: WaitEstimate,
}

/// Every derived value for one set of inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityReport {
    pub remaining_minutes: u64,
    pub levels: Vec<LevelReport>,
    pub lowest_stopped: Option<usize>,
    pub banner: Banner,
}

impl CapacityReport {
    /// Recompute the full report from current inputs
    pub fn evaluate(patients: &PatientCounts, config: &CapacityConfig, now: &impl Timelike) -> Self {
        let remaining = remaining_minutes(config, now);
        let workloads = workloads(patients);
        let cumulative = cumulative_workloads(&workloads);

        let levels: Vec<LevelReport> = TRIAGE_LEVELS
            .iter()
            .enumerate()
            .map(|(i, triage)| LevelReport {
                triage: *triage,
                waiting: patients.get(i),
                workload: workloads[i],
                cumulative_workload: cumulative[i],
                status: level_status(triage, patients.get(i), cumulative[i], remaining),
                estimated_wait: estimated_wait(patients, &workloads, config.clinicians, i),
            })
            .collect();

        let statuses: Vec<AcceptStatus> = levels.iter().map(|l| l.status).collect();
        let lowest = lowest_stopped(&statuses);

        Self {
            remaining_minutes: remaining,
            levels,
            lowest_stopped: lowest,
            banner: banner_for(lowest),
        }
    }

    pub fn statuses(&self) -> Vec<AcceptStatus> {
        self.levels.iter().map(|l| l.status).collect()
    }

    pub fn accepting_all(&self) -> bool {
        self.lowest_stopped.is_none()
    }

    pub fn total_workload(&self) -> u64 {
        self.levels.last().map(|l| l.cumulative_workload).unwrap_or(0)
    }
}
