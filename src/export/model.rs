// src/export/model.rs

use crate::models::day_type::DayType;
use crate::models::record::DailyPunchRecord;
use crate::models::slot::Slot;
use crate::utils::date::format_export_date;
use crate::utils::time::format_minutes;
use serde::Serialize;

/// Flat row of the export table. Field order is the column order and is a
/// stable contract: the extractor reads this layout back.
///
/// `Tipo` and the slot columns carry the record's inputs (the label as typed,
/// the punches as read) so that a re-import derives the same day; the
/// resolved type and the derived fields follow `Justificação`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    #[serde(rename = "Numero")]
    pub number: String,
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Departamento")]
    pub department: String,
    #[serde(rename = "Data")]
    pub date: String,
    #[serde(rename = "Tipo")]
    pub day_type: String,
    #[serde(rename = "E1")]
    pub e1: String,
    #[serde(rename = "S1")]
    pub s1: String,
    #[serde(rename = "E2")]
    pub e2: String,
    #[serde(rename = "S2")]
    pub s2: String,
    #[serde(rename = "E3")]
    pub e3: String,
    #[serde(rename = "S3")]
    pub s3: String,
    #[serde(rename = "E4")]
    pub e4: String,
    #[serde(rename = "S4")]
    pub s4: String,
    #[serde(rename = "Justificação")]
    pub justification: String,
    pub extra_punches: String,
    pub day_type_resolved: String,
    pub punches_valid: bool,
    pub punch_warning: String,
    pub morning_period: String,
    pub afternoon_period: String,
    pub lunch_break: String,
    pub morning_break: String,
    pub afternoon_break: String,
    pub total_work: String,
    pub total_break: String,
    pub effective_hours: String,
    pub shortfall: String,
    pub overtime: String,
    pub problem_type: String,
    pub suggested_time: String,
    pub suggested_fix: String,
    pub suggestion_confidence: f64,
    pub delay_minutes: i64,
    pub early_departure_minutes: i64,
    pub needs_manual_review: bool,
    pub interval_compliant: bool,
    pub interval_alerts: String,
}

/// Column headers for CSV / XLSX
pub(crate) const HEADERS: [&str; 37] = [
    "Numero",
    "Nome",
    "Departamento",
    "Data",
    "Tipo",
    "E1",
    "S1",
    "E2",
    "S2",
    "E3",
    "S3",
    "E4",
    "S4",
    "Justificação",
    "extra_punches",
    "day_type_resolved",
    "punches_valid",
    "punch_warning",
    "morning_period",
    "afternoon_period",
    "lunch_break",
    "morning_break",
    "afternoon_break",
    "total_work",
    "total_break",
    "effective_hours",
    "shortfall",
    "overtime",
    "problem_type",
    "suggested_time",
    "suggested_fix",
    "suggestion_confidence",
    "delay_minutes",
    "early_departure_minutes",
    "needs_manual_review",
    "interval_compliant",
    "interval_alerts",
];

impl From<&DailyPunchRecord> for RecordExport {
    fn from(r: &DailyPunchRecord) -> Self {
        let slot = |s: Slot| r.raw_slots.display(s);
        let d = &r.durations;

        Self {
            number: r.employee_id.clone(),
            name: r.employee_name.clone(),
            department: r.department.clone(),
            date: format_export_date(&r.date),
            day_type: DayType::from_label(&r.day_label)
                .map(|dt| dt.label().to_string())
                .unwrap_or_else(|| r.day_label.trim().to_string()),
            e1: slot(Slot::E1),
            s1: slot(Slot::S1),
            e2: slot(Slot::E2),
            s2: slot(Slot::S2),
            e3: slot(Slot::E3),
            s3: slot(Slot::S3),
            e4: slot(Slot::E4),
            s4: slot(Slot::S4),
            justification: r.justification.clone(),
            extra_punches: r
                .extra_punches
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            day_type_resolved: r.day_type.label().to_string(),
            punches_valid: r.punches_valid,
            punch_warning: r.punch_warning.clone(),
            morning_period: format_minutes(d.morning_period),
            afternoon_period: format_minutes(d.afternoon_period),
            lunch_break: format_minutes(d.lunch_break),
            morning_break: format_minutes(d.morning_break),
            afternoon_break: format_minutes(d.afternoon_break),
            total_work: format_minutes(d.total_work),
            total_break: format_minutes(d.total_break),
            effective_hours: format_minutes(r.effective_minutes),
            shortfall: format_minutes(r.shortfall_minutes),
            overtime: format_minutes(r.overtime_minutes),
            problem_type: r.anomaly.problem_type.clone(),
            suggested_time: r
                .anomaly
                .suggested_time
                .map(|t| t.to_string())
                .unwrap_or_default(),
            suggested_fix: r.anomaly.suggested_fix.clone(),
            suggestion_confidence: r.anomaly.suggestion_confidence,
            delay_minutes: r.anomaly.delay_minutes,
            early_departure_minutes: r.anomaly.early_departure_minutes,
            needs_manual_review: r.anomaly.needs_manual_review,
            interval_compliant: r.intervals.compliant,
            interval_alerts: r.intervals.alerts_text(),
        }
    }
}

impl RecordExport {
    /// Cells as strings, in `HEADERS` order (for XLSX).
    pub(crate) fn to_row(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.name.clone(),
            self.department.clone(),
            self.date.clone(),
            self.day_type.clone(),
            self.e1.clone(),
            self.s1.clone(),
            self.e2.clone(),
            self.s2.clone(),
            self.e3.clone(),
            self.s3.clone(),
            self.e4.clone(),
            self.s4.clone(),
            self.justification.clone(),
            self.extra_punches.clone(),
            self.day_type_resolved.clone(),
            self.punches_valid.to_string(),
            self.punch_warning.clone(),
            self.morning_period.clone(),
            self.afternoon_period.clone(),
            self.lunch_break.clone(),
            self.morning_break.clone(),
            self.afternoon_break.clone(),
            self.total_work.clone(),
            self.total_break.clone(),
            self.effective_hours.clone(),
            self.shortfall.clone(),
            self.overtime.clone(),
            self.problem_type.clone(),
            self.suggested_time.clone(),
            self.suggested_fix.clone(),
            format!("{:.2}", self.suggestion_confidence),
            self.delay_minutes.to_string(),
            self.early_departure_minutes.to_string(),
            self.needs_manual_review.to_string(),
            self.interval_compliant.to_string(),
            self.interval_alerts.clone(),
        ]
    }
}

pub(crate) fn records_to_rows(records: &[DailyPunchRecord]) -> Vec<RecordExport> {
    records.iter().map(RecordExport::from).collect()
}
