//! One reconciled day for one employee.

use super::day_type::DayType;
use super::problem::ProblemType;
use super::slot::SlotMap;
use crate::utils::time::ClockTime;
use chrono::NaiveDate;
use serde::Serialize;

/// Work and break spans in minutes. Always non-negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Durations {
    pub morning_period: i64,
    pub afternoon_period: i64,
    pub lunch_break: i64,
    pub morning_break: i64,
    pub afternoon_break: i64,
    pub total_work: i64,
    pub total_break: i64,
}

impl Durations {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Punctuality classification with its suggested correction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anomaly {
    pub problem: ProblemType,
    /// Display label, may carry details (e.g. the punch count).
    pub problem_type: String,
    pub suggested_time: Option<ClockTime>,
    pub suggested_fix: String,
    pub suggestion_confidence: f64,
    pub delay_minutes: i64,
    pub early_departure_minutes: i64,
    pub needs_manual_review: bool,
}

impl Default for Anomaly {
    fn default() -> Self {
        Self {
            problem: ProblemType::None,
            problem_type: String::new(),
            suggested_time: None,
            suggested_fix: String::new(),
            suggestion_confidence: 1.0,
            delay_minutes: 0,
            early_departure_minutes: 0,
            needs_manual_review: false,
        }
    }
}

/// Break durations as labelled by the interval analyzer (lunch is the
/// longest break of an 8-punch day, not necessarily S2→E3).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BreakDurations {
    pub lunch: i64,
    pub morning: i64,
    pub afternoon: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalReport {
    pub breaks: BreakDurations,
    pub compliant: bool,
    pub alerts: Vec<String>,
    pub detail: String,
}

impl Default for IntervalReport {
    fn default() -> Self {
        Self {
            breaks: BreakDurations::default(),
            compliant: true,
            alerts: Vec::new(),
            detail: String::new(),
        }
    }
}

impl IntervalReport {
    pub fn alerts_text(&self) -> String {
        self.alerts.join("; ")
    }
}

/// Daily punch record.
///
/// `raw_slots`, `extra_punches`, `day_label` and the identity fields are
/// inputs. Everything else is derived by `core::pipeline` and is always
/// recomputed as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPunchRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub date: NaiveDate,
    /// `Tipo` as read (or as set by an edit). Empty means auto-classify.
    pub day_label: String,
    pub justification: String,

    /// Slots exactly as read from the file columns.
    pub raw_slots: SlotMap,
    /// Punches that did not fit into the eight slots (manual insertions).
    pub extra_punches: Vec<ClockTime>,

    // derived
    pub sector: String,
    pub day_type: DayType,
    pub slots: SlotMap,
    pub punches_valid: bool,
    pub punch_warning: String,
    pub durations: Durations,
    pub effective_minutes: i64,
    pub shortfall_minutes: i64,
    pub overtime_minutes: i64,
    pub anomaly: Anomaly,
    pub intervals: IntervalReport,
}

impl DailyPunchRecord {
    /// A record with inputs only; derived fields hold neutral values until
    /// the pipeline runs.
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        department: impl Into<String>,
        date: NaiveDate,
        day_label: impl Into<String>,
        raw_slots: SlotMap,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            department: department.into(),
            date,
            day_label: day_label.into(),
            justification: String::new(),
            raw_slots,
            extra_punches: Vec::new(),
            sector: String::new(),
            day_type: DayType::Normal,
            slots: SlotMap::new(),
            punches_valid: false,
            punch_warning: String::new(),
            durations: Durations::zero(),
            effective_minutes: 0,
            shortfall_minutes: 0,
            overtime_minutes: 0,
            anomaly: Anomaly::default(),
            intervals: IntervalReport::default(),
        }
    }

    pub fn key(&self) -> (&str, NaiveDate) {
        (self.employee_id.as_str(), self.date)
    }

    /// Raw punches in column order, extra punches last.
    pub fn timestamps(&self) -> Vec<ClockTime> {
        let mut out = self.raw_slots.times();
        out.extend(self.extra_punches.iter().copied());
        out
    }

    pub fn punch_count(&self) -> usize {
        self.raw_slots.count() + self.extra_punches.len()
    }

    pub fn has_problem(&self) -> bool {
        self.anomaly.problem.is_problem()
    }
}
