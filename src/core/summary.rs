//! Aggregates over a reconciled table.

use crate::config::Config;
use crate::models::day_type::DayType;
use crate::models::problem::ProblemType;
use crate::models::record::DailyPunchRecord;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_days: usize,
    /// Days with a valid punch set.
    pub work_days: usize,
    pub absence_days: usize,
    pub total_work_minutes: i64,
    pub avg_daily_minutes: i64,
    /// % of valid days with the entry delay within tolerance.
    pub punctuality_rate: f64,
    pub avg_delay_minutes: f64,
    pub longest_delay_minutes: i64,
    pub overtime_minutes: i64,
    pub shortfall_minutes: i64,
    /// % of days with valid (or no expected) punches, no anomaly and
    /// compliant breaks.
    pub compliance_rate: f64,
    pub active_alerts: usize,
    pub perfect_days: usize,
    pub problematic_days: usize,
    pub needs_review: usize,
    pub invalid_punch_days: usize,
    pub skipped_rows: usize,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
}

fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

fn is_compliant(r: &DailyPunchRecord) -> bool {
    let punches_ok = r.punches_valid || r.anomaly.problem == ProblemType::ExpectedNoData;
    punches_ok && !r.has_problem() && r.intervals.compliant
}

fn alert_count(r: &DailyPunchRecord) -> usize {
    [
        !r.punch_warning.is_empty(),
        !r.intervals.alerts.is_empty(),
        !r.anomaly.problem_type.is_empty(),
    ]
    .iter()
    .filter(|b| **b)
    .count()
}

pub fn summarize(records: &[DailyPunchRecord], cfg: &Config, skipped_rows: usize) -> Summary {
    let mut s = Summary {
        total_days: records.len(),
        skipped_rows,
        period_start: records.iter().map(|r| r.date).min(),
        period_end: records.iter().map(|r| r.date).max(),
        ..Summary::default()
    };

    let mut punctual = 0;
    let mut delays: Vec<i64> = Vec::new();
    let mut compliant = 0;

    for r in records {
        if r.punches_valid {
            s.work_days += 1;
            s.total_work_minutes += r.durations.total_work;

            let (_, sector) = cfg.sector_for(&r.sector);
            if r.anomaly.delay_minutes <= sector.tolerancia_entrada {
                punctual += 1;
            }
            if r.anomaly.delay_minutes > 0 {
                delays.push(r.anomaly.delay_minutes);
            }
        }

        if matches!(r.day_type, DayType::FullAbsence | DayType::PartialAbsence) {
            s.absence_days += 1;
        }

        s.overtime_minutes += r.overtime_minutes;
        s.shortfall_minutes += r.shortfall_minutes;
        s.active_alerts += alert_count(r);

        if is_compliant(r) {
            compliant += 1;
            if r.punches_valid {
                s.perfect_days += 1;
            }
        }
        if r.has_problem() {
            s.problematic_days += 1;
        }
        if r.anomaly.needs_manual_review {
            s.needs_review += 1;
        }
        if !r.punches_valid && r.anomaly.problem != ProblemType::ExpectedNoData {
            s.invalid_punch_days += 1;
        }
    }

    if s.work_days > 0 {
        s.avg_daily_minutes = s.total_work_minutes / s.work_days as i64;
    }
    s.punctuality_rate = rate(punctual, s.work_days);
    s.compliance_rate = rate(compliant, s.total_days);
    if !delays.is_empty() {
        s.avg_delay_minutes = delays.iter().sum::<i64>() as f64 / delays.len() as f64;
    }
    s.longest_delay_minutes = delays.iter().copied().max().unwrap_or(0);

    s
}
