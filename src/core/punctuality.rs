//! Punctuality and punch-pattern anomalies.
//!
//! One day is walked through a fixed sequence of checks; the first one that
//! fires decides the problem type, its suggested correction and how much
//! that suggestion can be trusted.

use crate::config::SectorConfig;
use crate::core::distributor::first_order_violation;
use crate::models::day_type::DayType;
use crate::models::problem::ProblemType;
use crate::models::punch_kind::PunchKind;
use crate::models::record::Anomaly;
use crate::models::slot::{Slot, SlotMap};
use crate::utils::time::ClockTime;

/// Below this confidence a detected problem is left to a human.
pub const REVIEW_THRESHOLD: f64 = 0.9;

const TWO_HOURS: i64 = 120;
const FOUR_HOURS: i64 = 240;

/// What the analyzer looks at for one day.
#[derive(Debug, Clone, Copy)]
pub struct DayPunches<'a> {
    /// Slots as read; their E/S kind drives the missing-entry/exit checks.
    pub raw_slots: &'a SlotMap,
    /// Punches in column order.
    pub timestamps: &'a [ClockTime],
    pub day_type: DayType,
    /// Whether `day_type` came from an explicit `Tipo` label. A guessed
    /// absence never excuses a working day.
    pub labelled: bool,
    /// Whether the date is in the sector's working week.
    pub work_day: bool,
}

impl DayPunches<'_> {
    /// False when the date is off the working week or labelled as a day
    /// without punches.
    pub fn punches_expected(&self) -> bool {
        self.work_day && !(self.labelled && !self.day_type.expects_punches())
    }
}

fn finding(
    problem: ProblemType,
    label: impl Into<String>,
    suggested_time: Option<ClockTime>,
    suggested_fix: impl Into<String>,
    confidence: f64,
) -> Anomaly {
    Anomaly {
        problem,
        problem_type: label.into(),
        suggested_time,
        suggested_fix: suggested_fix.into(),
        suggestion_confidence: confidence,
        delay_minutes: 0,
        early_departure_minutes: 0,
        needs_manual_review: confidence < REVIEW_THRESHOLD && problem.is_problem(),
    }
}

fn is_e1_s1_e2(raw: &SlotMap) -> bool {
    let filled: Vec<Slot> = raw.filled().into_iter().map(|(s, _)| s).collect();
    filled == [Slot::E1, Slot::S1, Slot::E2]
}

/// Entry suggestion when the first punch is an exit.
fn suggest_missing_entry(first: ClockTime, sector: &SectorConfig) -> ClockTime {
    let two_before = ClockTime::clamped(first.minutes() - TWO_HOURS);
    if first.hour() >= 10 || sector.entrada_padrao >= first {
        two_before
    } else {
        sector.entrada_padrao
    }
}

pub fn analyze(day: &DayPunches<'_>, sector: &SectorConfig) -> Anomaly {
    let t = day.timestamps;
    let n = t.len();

    // -----------------------------
    // Gate: no punches expected
    // -----------------------------
    if !day.punches_expected() {
        if n == 0 {
            return finding(ProblemType::ExpectedNoData, "", None, "", 1.0);
        }
        let what = if day.labelled && !day.day_type.expects_punches() {
            day.day_type.label().to_string()
        } else {
            "non-working day".to_string()
        };
        return finding(
            ProblemType::UnexpectedPunchesOnNonWorkDay,
            ProblemType::UnexpectedPunchesOnNonWorkDay.label(),
            None,
            format!("{n} punch(es) recorded on a {what}: check the day type"),
            0.8,
        );
    }

    if n == 0 {
        return finding(
            ProblemType::NoData,
            ProblemType::NoData.label(),
            None,
            "no punches on a working day: insert them or set the day type",
            0.0,
        );
    }

    // -----------------------------
    // Pattern checks
    // -----------------------------
    if (n % 2 == 1 && n != 3) || n > 8 {
        let confidence = if n == 1 || n == 5 { 0.5 } else { 0.3 };
        let adjective = if n % 2 == 1 { "odd" } else { "irregular" };
        return finding(
            ProblemType::OddTimestamps,
            format!("{adjective} number of punches: {n} (expected 4, 6 or 8)"),
            None,
            format!("check the {n} recorded punches manually"),
            confidence,
        );
    }

    let filled = day.raw_slots.filled();
    let first_kind = filled.first().map(|(s, _)| s.kind());
    let last_kind = filled.last().map(|(s, _)| s.kind());
    let first = t[0];
    let last = t[n - 1];

    if first_kind == Some(PunchKind::Exit) {
        let s = suggest_missing_entry(first, sector);
        return finding(
            ProblemType::MissingEntry,
            ProblemType::MissingEntry.label(),
            Some(s),
            format!("first punch {first} is an exit: add entry at {s}"),
            0.8,
        );
    }

    if last_kind == Some(PunchKind::Entry) {
        let four_after = ClockTime::clamped(last.minutes() + FOUR_HOURS);

        if n == 3 && is_e1_s1_e2(day.raw_slots) {
            let s = if sector.saida_padrao > last {
                sector.saida_padrao
            } else {
                four_after
            };
            return finding(
                ProblemType::MissingFinalExit,
                ProblemType::MissingFinalExit.label(),
                Some(s),
                format!("incomplete pattern E1-S1-E2: add final exit (S2) at {s}"),
                0.8,
            );
        }

        let s = if last.hour() >= 14 || sector.saida_padrao <= last {
            four_after
        } else {
            sector.saida_padrao
        };
        return finding(
            ProblemType::MissingExit,
            ProblemType::MissingExit.label(),
            Some(s),
            format!("last punch {last} is an entry: add exit at {s}"),
            0.7,
        );
    }

    if n == 3 {
        return finding(
            ProblemType::OddTimestamps,
            "invalid 3-punch pattern",
            None,
            "check the 3 recorded punches manually",
            0.3,
        );
    }

    if let Some((prev, next)) = first_order_violation(t) {
        return finding(
            ProblemType::SequenceError,
            format!("{}: {prev} >= {next}", ProblemType::SequenceError.label()),
            None,
            format!("correct {next}: it must be later than {prev}"),
            0.9,
        );
    }

    // -----------------------------
    // Timing against the schedule
    // -----------------------------
    let delay = sector.entrada_padrao.minutes_until(first);
    let early = if day.day_type == DayType::HalfDay {
        0
    } else {
        last.minutes_until(sector.saida_padrao)
    };

    let mut out = if delay > sector.tolerancia_entrada {
        if delay > sector.tolerancia_esquecimento {
            let s = ClockTime::clamped(first.minutes() - TWO_HOURS);
            finding(
                ProblemType::PossibleForgottenEntry,
                ProblemType::PossibleForgottenEntry.label(),
                Some(s),
                format!(
                    "{delay} min late (over {} min): check for a missed entry at {s}",
                    sector.tolerancia_esquecimento
                ),
                0.8,
            )
        } else {
            finding(
                ProblemType::LateEntry,
                ProblemType::LateEntry.label(),
                None,
                format!(
                    "{delay} min late (entry {first}, expected {})",
                    sector.entrada_padrao
                ),
                1.0,
            )
        }
    } else if early > sector.tolerancia_saida {
        finding(
            ProblemType::EarlyExit,
            ProblemType::EarlyExit.label(),
            None,
            format!(
                "left {early} min early (exit {last}, expected {})",
                sector.saida_padrao
            ),
            1.0,
        )
    } else {
        Anomaly::default()
    };

    out.delay_minutes = delay.max(0);
    out.early_departure_minutes = early.max(0);
    out
}
