use punchsheet::config::SectorConfig;
use punchsheet::core::punctuality::{DayPunches, analyze};
use punchsheet::models::day_type::DayType;
use punchsheet::models::problem::ProblemType;
use punchsheet::models::record::Anomaly;
use punchsheet::models::slot::{Slot, SlotMap};
use punchsheet::utils::time::ClockTime;

fn t(s: &str) -> ClockTime {
    s.parse().expect("valid time")
}

/// Punches laid out from E1 in order.
fn run(raw: &[&str], day_type: DayType) -> Anomaly {
    let times: Vec<ClockTime> = raw.iter().map(|s| t(s)).collect();
    let (slots, _) = SlotMap::positional(&times);
    analyze(
        &DayPunches {
            raw_slots: &slots,
            timestamps: &times,
            day_type,
            labelled: true,
            work_day: true,
        },
        &SectorConfig::producao(),
    )
}

/// Punches placed in explicit slots.
fn run_slots(placed: &[(Slot, &str)]) -> Anomaly {
    let mut slots = SlotMap::new();
    for (s, v) in placed {
        slots.set(*s, Some(t(v)));
    }
    let times = slots.times();
    analyze(
        &DayPunches {
            raw_slots: &slots,
            timestamps: &times,
            day_type: DayType::Normal,
            labelled: true,
            work_day: true,
        },
        &SectorConfig::producao(),
    )
}

#[test]
fn test_on_time_day_is_clean() {
    let a = run(&["08:00", "12:00", "13:00", "17:00"], DayType::Normal);
    assert_eq!(a.problem, ProblemType::None);
    assert!(a.problem_type.is_empty());
    assert!(!a.needs_manual_review);
    assert_eq!(a.delay_minutes, 0);
}

#[test]
fn test_forgotten_entry_beats_late_entry() {
    let a = run(&["08:45", "12:00", "13:00", "17:00"], DayType::Normal);
    assert_eq!(a.problem, ProblemType::PossibleForgottenEntry);
    assert_eq!(a.delay_minutes, 45);
    // two hours before the first punch, not the standard entry
    assert_eq!(a.suggested_time, Some(t("06:45")));
    assert!(a.needs_manual_review);
}

#[test]
fn test_forgotten_entry_suggestion_stays_within_the_day() {
    let sector = SectorConfig {
        entrada_padrao: t("00:30"),
        tolerancia_entrada: 5,
        tolerancia_esquecimento: 20,
        ..SectorConfig::producao()
    };
    let times: Vec<ClockTime> = ["01:30", "04:00", "05:00", "17:00"].iter().map(|s| t(s)).collect();
    let (slots, _) = SlotMap::positional(&times);
    let a = analyze(
        &DayPunches {
            raw_slots: &slots,
            timestamps: &times,
            day_type: DayType::Normal,
            labelled: true,
            work_day: true,
        },
        &sector,
    );
    assert_eq!(a.problem, ProblemType::PossibleForgottenEntry);
    assert_eq!(a.suggested_time, Some(ClockTime::MIDNIGHT));
}

#[test]
fn test_entry_tolerance_is_strict() {
    let a = run(&["08:10", "12:00", "13:00", "17:00"], DayType::Normal);
    assert_eq!(a.problem, ProblemType::None);
    assert_eq!(a.delay_minutes, 10);

    let a = run(&["08:11", "12:00", "13:00", "17:00"], DayType::Normal);
    assert_eq!(a.problem, ProblemType::LateEntry);
    assert_eq!(a.problem_type, "late entry");
    assert!(!a.needs_manual_review);
}

#[test]
fn test_forgetting_tolerance_is_strict() {
    let a = run(&["08:30", "12:00", "13:00", "17:00"], DayType::Normal);
    assert_eq!(a.problem, ProblemType::LateEntry);

    let a = run(&["08:31", "12:00", "13:00", "17:00"], DayType::Normal);
    assert_eq!(a.problem, ProblemType::PossibleForgottenEntry);
}

#[test]
fn test_early_exit() {
    let a = run(&["08:00", "12:00", "13:00", "16:45"], DayType::Normal);
    assert_eq!(a.problem, ProblemType::None);
    assert_eq!(a.early_departure_minutes, 15);

    let a = run(&["08:00", "12:00", "13:00", "16:30"], DayType::Normal);
    assert_eq!(a.problem, ProblemType::EarlyExit);
    assert_eq!(a.early_departure_minutes, 30);
}

#[test]
fn test_missing_final_exit() {
    let a = run(&["08:00", "12:00", "13:00"], DayType::Normal);
    assert_eq!(a.problem, ProblemType::MissingFinalExit);
    assert_eq!(a.problem_type, "missing final exit");
    assert_eq!(a.suggested_time, Some(t("17:00")));
    assert!(a.needs_manual_review);
}

#[test]
fn test_missing_entry_when_first_punch_is_an_exit() {
    let a = run_slots(&[(Slot::S1, "12:00"), (Slot::E2, "13:00"), (Slot::S2, "17:00")]);
    assert_eq!(a.problem, ProblemType::MissingEntry);
    assert_eq!(a.suggested_time, Some(t("10:00")));
    assert!(a.suggestion_confidence < 0.9);
}

#[test]
fn test_missing_exit_when_last_punch_is_an_entry() {
    let a = run_slots(&[
        (Slot::E1, "08:00"),
        (Slot::S1, "12:00"),
        (Slot::E2, "13:00"),
        (Slot::E3, "14:00"),
    ]);
    assert_eq!(a.problem, ProblemType::MissingExit);
    assert_eq!(a.suggestion_confidence, 0.7);
    assert!(a.needs_manual_review);
}

#[test]
fn test_sequence_error_names_the_pair() {
    let a = run(&["08:00", "17:00", "12:00", "13:00"], DayType::Normal);
    assert_eq!(a.problem, ProblemType::SequenceError);
    assert!(a.problem_type.contains("17:00 >= 12:00"));
    assert_eq!(a.suggestion_confidence, 0.9);
    assert!(!a.needs_manual_review);
}

#[test]
fn test_vacation_with_punches() {
    let a = run(&["08:00"], DayType::Vacation);
    assert_eq!(a.problem, ProblemType::UnexpectedPunchesOnNonWorkDay);
    assert_eq!(a.suggestion_confidence, 0.8);
    assert!(a.needs_manual_review);
}

#[test]
fn test_vacation_without_punches_is_expected() {
    let a = run(&[], DayType::Vacation);
    assert_eq!(a.problem, ProblemType::ExpectedNoData);
    assert!(!a.needs_manual_review);
}

#[test]
fn test_non_work_day_gate() {
    let slots = SlotMap::new();
    let a = analyze(
        &DayPunches {
            raw_slots: &slots,
            timestamps: &[],
            day_type: DayType::Normal,
            labelled: false,
            work_day: false,
        },
        &SectorConfig::producao(),
    );
    assert_eq!(a.problem, ProblemType::ExpectedNoData);
}

#[test]
fn test_no_data_on_work_day() {
    let a = run(&[], DayType::Normal);
    assert_eq!(a.problem, ProblemType::NoData);
    assert_eq!(a.suggestion_confidence, 0.0);
    assert!(a.needs_manual_review);
}

#[test]
fn test_guessed_absence_is_still_no_data() {
    let slots = SlotMap::new();
    let day = |labelled| DayPunches {
        raw_slots: &slots,
        timestamps: &[],
        day_type: DayType::FullAbsence,
        labelled,
        work_day: true,
    };

    let a = analyze(&day(false), &SectorConfig::producao());
    assert_eq!(a.problem, ProblemType::NoData);
    assert!(a.needs_manual_review);

    let a = analyze(&day(true), &SectorConfig::producao());
    assert_eq!(a.problem, ProblemType::ExpectedNoData);
    assert!(!a.needs_manual_review);
}

#[test]
fn test_odd_count() {
    let a = run(&["08:00", "10:00", "10:15", "12:00", "13:00"], DayType::Normal);
    assert_eq!(a.problem, ProblemType::OddTimestamps);
    assert!(a.problem_type.contains('5'));
    assert!(a.problem_type.contains("4, 6 or 8"));
    assert!(a.suggestion_confidence <= 0.5);
    assert!(a.needs_manual_review);
}

#[test]
fn test_half_day_skips_early_exit() {
    let a = run(&["08:00", "12:00"], DayType::HalfDay);
    assert_eq!(a.problem, ProblemType::None);
    assert_eq!(a.early_departure_minutes, 0);
}
