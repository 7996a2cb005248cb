mod common;
use chrono::NaiveDate;
use common::{SUNDAY, WORK_DAY, clock_row, reconcile_rows};
use punchsheet::config::Config;
use punchsheet::core::pipeline::{self, RecordEdit, apply_correction, apply_edit, reconcile};
use punchsheet::core::summary::summarize;
use punchsheet::errors::AppError;
use punchsheet::models::day_type::DayType;
use punchsheet::models::problem::ProblemType;
use punchsheet::models::slot::Slot;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, d).expect("valid date")
}

#[test]
fn test_import_embedded_layout() {
    let table = reconcile_rows(&[
        clock_row("1001", "Ana Silva", "Produção", WORK_DAY, "", &["08:00", "12:00", "13:00", "17:00"]),
        clock_row("1001", "Ana Silva", "Produção", "02/04/2025 Quarta", "", &["08:00", "12:00", "13:00"]),
    ]);

    assert_eq!(table.records.len(), 2);
    let first = &table.records[0];
    assert_eq!(first.employee_name, "Ana Silva");
    assert_eq!(first.date, day(1));
    assert!(first.punches_valid);
    assert_eq!(first.durations.total_work, 480);
    assert_eq!(first.day_type, DayType::Normal);
    assert_eq!(first.sector, "Produção");

    let second = &table.records[1];
    assert_eq!(second.date, day(2));
    assert!(!second.punches_valid);
    assert_eq!(second.anomaly.problem_type, "missing final exit");
    assert_eq!(second.durations.afternoon_period, 0);
}

#[test]
fn test_compact_midnight_is_not_a_punch() {
    let table = reconcile_rows(&[clock_row(
        "1001",
        "Ana",
        "Produção",
        WORK_DAY,
        "",
        &["0000", "08:00", "12:00", "13:00", "17:00"],
    )]);
    let r = &table.records[0];
    assert_eq!(r.punch_count(), 4);
    assert!(r.punches_valid);
    assert!(r.punch_warning.is_empty());
    assert_eq!(r.raw_slots.get(Slot::E1), None);
    assert_eq!(r.slots.display(Slot::E1), "08:00");
}

#[test]
fn test_malformed_rows_are_skipped_not_fatal() {
    let table = reconcile_rows(&[
        "just,a,short,row".to_string(),
        clock_row("1001", "Ana", "Produção", "not a date", "", &["08:00"]),
        clock_row("1001", "Ana", "Produção", WORK_DAY, "", &["08:00", "12:00", "13:00", "17:00"]),
        ",,1002,,Rui,,Produção,Data,E1,S1,08:00,12:00".to_string(),
    ]);
    assert_eq!(table.records.len(), 1);
    assert_eq!(table.skipped_rows, 3);
}

#[test]
fn test_rejected_time_fields_are_counted() {
    let table = reconcile_rows(&[clock_row(
        "1001",
        "Ana",
        "Produção",
        WORK_DAY,
        "",
        &["08:00", "25:00", "13:00", "17:00"],
    )]);
    assert_eq!(table.rejected_fields, 1);
    assert_eq!(table.records[0].punch_count(), 3);
}

#[test]
fn test_duplicates_keep_first() {
    let table = reconcile_rows(&[
        clock_row("1001", "Ana", "Produção", WORK_DAY, "", &["08:00", "12:00", "13:00", "17:00"]),
        clock_row("1001", "Ana", "Produção", WORK_DAY, "", &["09:00", "12:00", "13:00", "17:00"]),
    ]);
    assert_eq!(table.records.len(), 1);
    assert_eq!(table.duplicate_rows, 1);
    assert_eq!(table.records[0].slots.display(Slot::E1), "08:00");
}

#[test]
fn test_no_parseable_rows_is_an_error() {
    let err = pipeline::import_str("foo,bar\n1,2\n", &Config::default(), None)
        .expect_err("nothing to import");
    assert!(matches!(err, AppError::NoParseableRows(_)));
}

#[test]
fn test_reconcile_is_idempotent() {
    let table = reconcile_rows(&[
        clock_row("1001", "Ana", "Produção", WORK_DAY, "", &["08:00", "12:00", "13:00", "17:00"]),
        clock_row("1001", "Ana", "Produção", "02/04/2025", "", &["08:00", "17:00", "12:00", "13:00"]),
        clock_row("1002", "Rui", "Vendas", WORK_DAY, "Férias", &["08:00"]),
        clock_row("1002", "Rui", "Vendas", "02/04/2025", "", &["09:40", "13:00", "13:45", "18:00", "19:00"]),
    ]);

    let again = reconcile(&table.records, &Config::default(), None);
    assert_eq!(again.records, table.records);
}

#[test]
fn test_vacation_zeroes_durations_and_flags_punches() {
    let table = reconcile_rows(&[clock_row(
        "1001",
        "Ana",
        "Produção",
        WORK_DAY,
        "Férias",
        &["08:00"],
    )]);
    let r = &table.records[0];
    assert_eq!(r.day_type, DayType::Vacation);
    assert_eq!(r.durations.total_work, 0);
    assert_eq!(r.durations.total_break, 0);
    assert_eq!(r.anomaly.problem, ProblemType::UnexpectedPunchesOnNonWorkDay);
}

#[test]
fn test_empty_sunday_is_weekend() {
    let table = reconcile_rows(&[clock_row("1001", "Ana", "Produção", SUNDAY, "", &[])]);
    let r = &table.records[0];
    assert_eq!(r.day_type, DayType::Weekend);
    assert_eq!(r.anomaly.problem, ProblemType::ExpectedNoData);
    assert_eq!(r.shortfall_minutes, 0);
}

#[test]
fn test_unlabelled_empty_work_day_needs_review() {
    let table = reconcile_rows(&[clock_row("1001", "Ana", "Produção", WORK_DAY, "", &[])]);
    let r = &table.records[0];
    assert_eq!(r.day_type, DayType::FullAbsence);
    assert_eq!(r.shortfall_minutes, 480);
    assert_eq!(r.overtime_minutes, 0);
    assert_eq!(r.anomaly.problem, ProblemType::NoData);
    assert_eq!(r.anomaly.suggestion_confidence, 0.0);
    assert!(r.anomaly.needs_manual_review);
    assert!(!r.intervals.compliant);

    let s = summarize(&table.records, &Config::default(), 0);
    assert_eq!(s.invalid_punch_days, 1);
    assert_eq!(s.compliance_rate, 0.0);
}

#[test]
fn test_labelled_absence_expects_no_punches() {
    let table = reconcile_rows(&[clock_row("1001", "Ana", "Produção", WORK_DAY, "Falta", &[])]);
    let r = &table.records[0];
    assert_eq!(r.anomaly.problem, ProblemType::ExpectedNoData);
    assert!(!r.anomaly.needs_manual_review);
    assert_eq!(r.shortfall_minutes, 480);
}

#[test]
fn test_unknown_department_uses_default_sector() {
    let table = reconcile_rows(&[clock_row(
        "1001",
        "Ana",
        "Marketing",
        WORK_DAY,
        "",
        &["08:00", "12:00", "13:00", "17:00"],
    )]);
    assert_eq!(table.records[0].sector, "Produção");
}

#[test]
fn test_sector_expected_punch_count_note() {
    // Vendas expects 4 punches
    let table = reconcile_rows(&[clock_row(
        "1002",
        "Rui",
        "Vendas",
        WORK_DAY,
        "",
        &["09:00", "11:00", "11:10", "13:00", "13:45", "18:00"],
    )]);
    let r = &table.records[0];
    assert!(r.punches_valid);
    assert!(r.punch_warning.contains("expects 4"));
}

#[test]
fn test_sector_override() {
    let content = clock_row("1001", "Ana", "Produção", WORK_DAY, "", &["09:00", "12:30", "13:30", "18:00"]);
    let table = pipeline::import_str(&content, &Config::default(), Some("Administrativo"))
        .expect("parseable rows");
    let r = &table.records[0];
    assert_eq!(r.sector, "Administrativo");
    assert_eq!(r.anomaly.problem, ProblemType::None);
}

#[test]
fn test_day_type_edit_rederives_everything() {
    let cfg = Config::default();
    let table = reconcile_rows(&[clock_row(
        "1001",
        "Ana",
        "Produção",
        WORK_DAY,
        "",
        &["08:00", "12:00", "13:00", "17:00"],
    )]);
    let r = &table.records[0];

    let holiday = apply_edit(r, &RecordEdit::DayType(DayType::Holiday), &cfg, None);
    assert_eq!(holiday.day_type, DayType::Holiday);
    assert_eq!(holiday.durations.total_work, 0);
    assert_eq!(holiday.anomaly.problem, ProblemType::UnexpectedPunchesOnNonWorkDay);

    let back = apply_edit(&holiday, &RecordEdit::DayType(DayType::Normal), &cfg, None);
    assert_eq!(back.durations.total_work, 480);
    assert_eq!(back.anomaly.problem, ProblemType::None);
}

#[test]
fn test_slot_edit_rederives_everything() {
    let cfg = Config::default();
    let table = reconcile_rows(&[clock_row(
        "1001",
        "Ana",
        "Produção",
        WORK_DAY,
        "",
        &["08:00", "12:00", "13:00", "17:00"],
    )]);
    let r = &table.records[0];

    let cleared = apply_edit(r, &RecordEdit::Slot(Slot::S2, None), &cfg, None);
    assert!(!cleared.punches_valid);
    assert_eq!(cleared.anomaly.problem, ProblemType::MissingFinalExit);
    assert_eq!(cleared.durations.total_work, 240);
}

#[test]
fn test_apply_suggested_correction() {
    let cfg = Config::default();
    let table = reconcile_rows(&[clock_row(
        "1001",
        "Ana",
        "Produção",
        WORK_DAY,
        "",
        &["08:00", "12:00", "13:00"],
    )]);
    let r = &table.records[0];
    let suggested = r.anomaly.suggested_time.expect("suggestion for missing exit");

    let (correction, updated) = apply_correction(r, suggested, None, &cfg, None);
    assert_eq!(correction.after.display(Slot::S2), "17:00");
    assert!(updated.punches_valid);
    assert_eq!(updated.durations.total_work, 480);
    assert_eq!(updated.anomaly.problem, ProblemType::None);
}

#[test]
fn test_records_sorted_by_employee_then_date() {
    let table = reconcile_rows(&[
        clock_row("1002", "Rui", "Produção", "02/04/2025", "", &[]),
        clock_row("1001", "Ana", "Produção", "02/04/2025", "", &[]),
        clock_row("1001", "Ana", "Produção", WORK_DAY, "", &[]),
    ]);
    let keys: Vec<(String, NaiveDate)> = table
        .records
        .iter()
        .map(|r| (r.employee_id.clone(), r.date))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("1001".to_string(), day(1)),
            ("1001".to_string(), day(2)),
            ("1002".to_string(), day(2)),
        ]
    );
}

#[test]
fn test_latin1_input() {
    let row = clock_row("1001", "João", "Produção", WORK_DAY, "", &["08:00", "12:00", "13:00", "17:00"]);
    let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(&row);
    let decoded = punchsheet::core::extractor::decode(&bytes);
    let table = pipeline::import_str(&decoded, &Config::default(), None).expect("parseable rows");
    assert_eq!(table.records[0].employee_name, "João");
}
