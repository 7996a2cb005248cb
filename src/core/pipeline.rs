//! Import and reconciliation.
//!
//! `reconcile` is a pure function of its inputs: every derived field of a
//! record is recomputed from the record's own inputs (identity, day label,
//! raw slots) and the configuration. Callers own the table and call it
//! again after each edit.

use crate::config::Config;
use crate::core::calculator::{balance, periods};
use crate::core::correction::{self, Correction};
use crate::core::extractor::{self, ExtractedRow, Extraction};
use crate::core::punctuality::{self, DayPunches};
use crate::core::{classifier, distributor, intervals};
use crate::errors::{AppError, AppResult};
use crate::models::day_type::DayType;
use crate::models::record::DailyPunchRecord;
use crate::models::slot::Slot;
use crate::utils::time::ClockTime;
use chrono::NaiveDate;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ReconciledTable {
    pub records: Vec<DailyPunchRecord>,
    /// Rows that could not be read (malformed, no date, no headers).
    pub skipped_rows: usize,
    pub duplicate_rows: usize,
    pub rejected_fields: usize,
}

impl ReconciledTable {
    pub fn find(&self, employee: Option<&str>, date: NaiveDate) -> Option<&DailyPunchRecord> {
        self.records
            .iter()
            .find(|r| r.date == date && employee.is_none_or(|e| r.employee_id == e))
    }
}

/// A user edit to one record. Applying it re-derives the whole record.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordEdit {
    DayType(DayType),
    Slot(Slot, Option<ClockTime>),
    InsertPunch { time: ClockTime, hint: String },
}

pub fn record_from_row(row: ExtractedRow) -> DailyPunchRecord {
    let mut record = DailyPunchRecord::new(
        row.fixed.number,
        row.fixed.name,
        row.fixed.department,
        row.date,
        row.day_label,
        row.slots,
    );
    record.justification = row.justification;
    record.extra_punches = row.extra;
    record
}

/// Recompute every derived field of `record`.
///
/// `sector_override` forces a sector instead of the record's department.
pub fn derive(
    record: &DailyPunchRecord,
    cfg: &Config,
    sector_override: Option<&str>,
) -> DailyPunchRecord {
    let (sector_name, sector) = cfg.sector_for(sector_override.unwrap_or(&record.department));
    let timestamps = record.timestamps();
    let work_day = sector.is_work_day(&record.date);
    let day_type = classifier::classify(&record.day_label, &timestamps, work_day);

    let dist = distributor::distribute(&timestamps);
    let mut warning = dist.warning.clone();
    if dist.punches_valid && !sector.picagens_esperadas.matches(dist.punch_count) {
        warning = format!(
            "{} punches where {} expects {}",
            dist.punch_count, sector_name, sector.picagens_esperadas
        );
    }

    let durations = periods::compute_for_day(&dist.slots, day_type);
    let bal = balance::compute(durations.total_work, day_type, cfg.daily_target_minutes);

    let day = DayPunches {
        raw_slots: &record.raw_slots,
        timestamps: &timestamps,
        day_type,
        labelled: !record.day_label.trim().is_empty(),
        work_day,
    };
    let interval_report = intervals::analyze(&dist, &sector, day.punches_expected());
    let anomaly = punctuality::analyze(&day, &sector);

    DailyPunchRecord {
        sector: sector_name,
        day_type,
        slots: dist.slots,
        punches_valid: dist.punches_valid,
        punch_warning: warning,
        durations,
        effective_minutes: bal.effective,
        shortfall_minutes: bal.shortfall,
        overtime_minutes: bal.overtime,
        anomaly,
        intervals: interval_report,
        ..record.clone()
    }
}

/// Re-derive a whole table. Output is ordered by employee then date.
pub fn reconcile(
    records: &[DailyPunchRecord],
    cfg: &Config,
    sector_override: Option<&str>,
) -> ReconciledTable {
    let mut out: Vec<DailyPunchRecord> = records
        .iter()
        .map(|r| derive(r, cfg, sector_override))
        .collect();
    out.sort_by(|a, b| a.employee_id.cmp(&b.employee_id).then(a.date.cmp(&b.date)));

    info!(records = out.len(), "reconciled");

    ReconciledTable {
        records: out,
        ..ReconciledTable::default()
    }
}

/// Apply an edit and return the fully re-derived record.
pub fn apply_edit(
    record: &DailyPunchRecord,
    edit: &RecordEdit,
    cfg: &Config,
    sector_override: Option<&str>,
) -> DailyPunchRecord {
    let mut edited = record.clone();
    match edit {
        RecordEdit::DayType(dt) => edited.day_label = dt.label().to_string(),
        RecordEdit::Slot(slot, value) => edited.raw_slots.set(*slot, *value),
        RecordEdit::InsertPunch { time, hint } => {
            let c = correction::insert_punch(&record.raw_slots, &record.extra_punches, *time, hint);
            edited.raw_slots = c.after;
            edited.extra_punches = c.overflow;
        }
    }
    derive(&edited, cfg, sector_override)
}

/// Preview a manual correction: the slot change and the re-derived record.
/// Without a hint, the record's current problem label is used.
pub fn apply_correction(
    record: &DailyPunchRecord,
    time: ClockTime,
    hint: Option<&str>,
    cfg: &Config,
    sector_override: Option<&str>,
) -> (Correction, DailyPunchRecord) {
    let hint = hint.unwrap_or(&record.anomaly.problem_type).to_string();
    let c = correction::insert_punch(&record.raw_slots, &record.extra_punches, time, &hint);
    let updated = apply_edit(
        record,
        &RecordEdit::InsertPunch { time, hint },
        cfg,
        sector_override,
    );
    (c, updated)
}

fn from_extraction(
    extraction: Extraction,
    source: &str,
    cfg: &Config,
    sector_override: Option<&str>,
) -> AppResult<ReconciledTable> {
    if extraction.rows.is_empty() {
        return Err(AppError::NoParseableRows(source.to_string()));
    }

    let records: Vec<DailyPunchRecord> = extraction.rows.into_iter().map(record_from_row).collect();
    let mut table = reconcile(&records, cfg, sector_override);
    table.skipped_rows = extraction.report.rows_skipped;
    table.duplicate_rows = extraction.report.duplicates;
    table.rejected_fields = extraction.report.rejected_fields;
    Ok(table)
}

/// Read, extract and reconcile a CSV file. Fails only when no row at all
/// could be parsed.
pub fn import(path: &Path, cfg: &Config, sector_override: Option<&str>) -> AppResult<ReconciledTable> {
    let extraction = extractor::extract_file(path)?;
    from_extraction(extraction, &path.display().to_string(), cfg, sector_override)
}

pub fn import_str(
    content: &str,
    cfg: &Config,
    sector_override: Option<&str>,
) -> AppResult<ReconciledTable> {
    let extraction = extractor::extract_str(content)?;
    from_extraction(extraction, "<input>", cfg, sector_override)
}
