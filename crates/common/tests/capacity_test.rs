use chrono::NaiveTime;
use intake_common::*;

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn test_triage_table_matches_clinic_defaults() {
    let consult: Vec<u32> = TRIAGE_LEVELS.iter().map(|t| t.consult_minutes).collect();
    assert_eq!(consult, vec![60, 45, 30, 20, 15]);
    assert_eq!(TRIAGE_LEVELS[0].capacity, Capacity::Unbounded);
    assert_eq!(TRIAGE_LEVELS[4].capacity, Capacity::Bounded(30));
    assert_eq!(TRIAGE_LEVELS[2].label, "Triage 3");
}

#[test]
fn test_two_hours_with_two_clinicians() {
    let config = CapacityConfig { clinicians: 2, closing_hour: 16 };
    assert_eq!(remaining_minutes(&config, &at(14, 0)), 240);
}

#[test]
fn test_empty_waiting_room_accepts_all() {
    let report = CapacityReport::evaluate(&PatientCounts::default(), &CapacityConfig::default(), &at(12, 0));
    assert!(report.accepting_all());
    assert!(report.statuses().iter().all(|s| *s == AcceptStatus::Accept));
    assert_eq!(report.banner.text, "Accepting all triage levels");
    assert_eq!(report.banner.severity, BannerSeverity::Normal);
}

#[test]
fn test_triage_one_stopped_by_workload() {
    // one clinician, closing in an hour: 60 minutes against 420 queued
    let config = CapacityConfig { clinicians: 1, closing_hour: 13 };
    let report = CapacityReport::evaluate(&PatientCounts::new([7, 0, 0, 0, 0]), &config, &at(12, 0));

    assert_eq!(report.remaining_minutes, 60);
    assert_eq!(report.levels[0].workload, 420);
    assert_eq!(report.levels[0].status, AcceptStatus::Stop);
    assert_eq!(report.lowest_stopped, Some(0));
    assert_eq!(report.banner.text, "CRITICAL ONLY – Triage 1");
    assert_eq!(report.banner.severity, BannerSeverity::Critical);
}

#[test]
fn test_full_level_stops_regardless_of_workload() {
    // plenty of time left; only the per-level caps can stop anything
    let config = CapacityConfig { clinicians: 50, closing_hour: 23 };
    for (i, triage) in TRIAGE_LEVELS.iter().enumerate() {
        let Capacity::Bounded(cap) = triage.capacity else {
            continue;
        };
        for waiting in [cap, cap + 1, cap * 2] {
            let mut patients = PatientCounts::default();
            patients.set(i, waiting);
            let report = CapacityReport::evaluate(&patients, &config, &at(6, 0));
            assert_eq!(report.levels[i].status, AcceptStatus::Stop, "level {} at {}", i + 1, waiting);
        }
        let mut patients = PatientCounts::default();
        patients.set(i, cap - 1);
        let report = CapacityReport::evaluate(&patients, &config, &at(6, 0));
        assert_eq!(report.levels[i].status, AcceptStatus::Accept);
    }
}

#[test]
fn test_partial_banner_names_last_accepting_level() {
    // triage 3 is full, everything above it fits
    let report = CapacityReport::evaluate(
        &PatientCounts::new([0, 1, 15, 0, 0]),
        &CapacityConfig::default(),
        &at(10, 0),
    );
    assert_eq!(report.lowest_stopped, Some(2));
    assert_eq!(report.banner.text, "Accepting Triage 1–2 only");
    assert_eq!(report.banner.severity, BannerSeverity::Restricted);
    // lower levels are evaluated on their own merits
    assert_eq!(report.levels[3].status, AcceptStatus::Accept);
}

#[test]
fn test_after_closing_everything_with_patients_stops() {
    let report = CapacityReport::evaluate(
        &PatientCounts::new([0, 0, 1, 0, 0]),
        &CapacityConfig { clinicians: 4, closing_hour: 18 },
        &at(19, 30),
    );
    assert_eq!(report.remaining_minutes, 0);
    assert_eq!(report.levels[0].status, AcceptStatus::Accept);
    assert_eq!(report.levels[1].status, AcceptStatus::Accept);
    assert_eq!(report.levels[2].status, AcceptStatus::Stop);
    assert_eq!(report.banner.text, "Accepting Triage 1–2 only");
}

#[test]
fn test_wait_estimates() {
    let patients = PatientCounts::new([1, 2, 3, 0, 1]);
    let report = CapacityReport::evaluate(&patients, &CapacityConfig { clinicians: 2, closing_hour: 22 }, &at(8, 0));
    let waits: Vec<Option<u64>> = report.levels.iter().map(|l| l.estimated_wait.minutes()).collect();
    // level 1: nobody ahead; level 2: 60 + 45 = 105 / 2 = 52.5 -> 53
    // level 3: 150 + 60 = 210 / 2; level 4: 240 / 2; level 5: 240 / 2
    assert_eq!(waits, vec![Some(0), Some(53), Some(105), Some(120), Some(120)]);
}

#[test]
fn test_wait_unbounded_without_clinicians() {
    let report = CapacityReport::evaluate(
        &PatientCounts::new([1, 0, 0, 0, 0]),
        &CapacityConfig { clinicians: 0, closing_hour: 22 },
        &at(8, 0),
    );
    assert!(report.levels.iter().all(|l| l.estimated_wait == WaitEstimate::Unbounded));
    assert_eq!(report.remaining_minutes, 0);
    assert_eq!(report.levels[0].status, AcceptStatus::Stop);
}

#[test]
fn test_wait_monotonic_in_higher_and_same_level_counts() {
    let config = CapacityConfig { clinicians: 3, closing_hour: 22 };
    let base = [2, 1, 4, 0, 3];
    for i in 0..TRIAGE_LEVEL_COUNT {
        for j in 0..=i {
            let mut previous = None;
            for extra in 0..6 {
                let mut counts = base;
                counts[j] += extra;
                let report = CapacityReport::evaluate(&PatientCounts::new(counts), &config, &at(9, 0));
                let wait = report.levels[i].estimated_wait;
                if let Some(prev) = previous {
                    assert!(wait >= prev, "wait at level {} fell as level {} grew", i + 1, j + 1);
                }
                previous = Some(wait);
            }
        }
    }
}

#[test]
fn test_cumulative_workload_reported_per_level() {
    let report = CapacityReport::evaluate(
        &PatientCounts::new([1, 1, 1, 1, 1]),
        &CapacityConfig::default(),
        &at(9, 0),
    );
    let cumulative: Vec<u64> = report.levels.iter().map(|l| l.cumulative_workload).collect();
    assert_eq!(cumulative, vec![60, 105, 135, 155, 170]);
    assert_eq!(report.total_workload(), 170);
}
