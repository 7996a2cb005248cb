//! Break analysis: labels lunch and the short breaks, checks them against
//! the sector thresholds and builds a readable breakdown of the day.

use crate::config::SectorConfig;
use crate::core::distributor::{Distribution, INCOMPLETE_PATTERN};
use crate::models::record::{BreakDurations, IntervalReport};
use crate::utils::time::ClockTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BreakKind {
    Morning,
    Afternoon,
}

impl BreakKind {
    fn label(self) -> &'static str {
        match self {
            BreakKind::Morning => "morning break",
            BreakKind::Afternoon => "afternoon break",
        }
    }
}

fn work_line(label: &str, a: ClockTime, b: ClockTime) -> String {
    format!("{label} {a}-{b}")
}

fn break_line(label: &str, a: ClockTime, b: ClockTime, standard: i64) -> String {
    format!("{label} {a}-{b} ({} min, standard {standard})", a.span_to(b))
}

struct Checker<'a> {
    sector: &'a SectorConfig,
    alerts: Vec<String>,
}

impl Checker<'_> {
    fn lunch(&mut self, minutes: i64) {
        if minutes < self.sector.alerta_almoco_curto {
            self.alerts.push(format!(
                "short lunch: {minutes} min (minimum {})",
                self.sector.alerta_almoco_curto
            ));
        } else if minutes > self.sector.alerta_almoco_longo {
            self.alerts.push(format!(
                "long lunch: {minutes} min (maximum {})",
                self.sector.alerta_almoco_longo
            ));
        }
    }

    fn short_break(&mut self, kind: BreakKind, minutes: i64) {
        if minutes > self.sector.alerta_pausa_longa {
            self.alerts.push(format!(
                "long {}: {minutes} min (maximum {})",
                kind.label(),
                self.sector.alerta_pausa_longa
            ));
        }
    }
}

fn lunch_standard(sector: &SectorConfig) -> String {
    format!(
        "standard lunch {} for {}±{} min",
        sector.almoco_inicio, sector.almoco_duracao, sector.tolerancia_intervalo
    )
}

/// Analyse the breaks of one distributed day.
///
/// `punches_expected` is false for days on which no punches are due; an
/// empty such day is compliant and gets no detail.
pub fn analyze(dist: &Distribution, sector: &SectorConfig, punches_expected: bool) -> IntervalReport {
    let t = dist.slots.times();
    let mut checker = Checker {
        sector,
        alerts: Vec::new(),
    };
    let mut breaks = BreakDurations::default();
    let mut detail: Vec<String> = Vec::new();

    match dist.punch_count {
        0 if !punches_expected => {
            return IntervalReport::default();
        }
        0 => {
            checker.alerts.push("no punches recorded".to_string());
        }
        1 | 2 => {
            checker
                .alerts
                .push("insufficient punches for interval analysis".to_string());
            detail.push(format!("only {} punch(es)", dist.punch_count));
        }
        3 => {
            checker.alerts.push(INCOMPLETE_PATTERN.to_string());
            breaks.lunch = t[1].span_to(t[2]);
            checker.lunch(breaks.lunch);
            detail.push(work_line("morning", t[0], t[1]));
            detail.push(break_line("lunch", t[1], t[2], sector.almoco_duracao));
            detail.push("pattern: 3 of 4 punches, final exit missing".to_string());
        }
        4 => {
            breaks.lunch = t[1].span_to(t[2]);
            checker.lunch(breaks.lunch);
            detail.push(work_line("morning", t[0], t[1]));
            detail.push(break_line("lunch", t[1], t[2], sector.almoco_duracao));
            detail.push(work_line("afternoon", t[2], t[3]));
            detail.push("pattern: 4 punches (lunch only)".to_string());
        }
        6 => {
            breaks.morning = t[1].span_to(t[2]);
            breaks.lunch = t[3].span_to(t[4]);
            checker.short_break(BreakKind::Morning, breaks.morning);
            checker.lunch(breaks.lunch);
            detail.push(work_line("morning", t[0], t[1]));
            detail.push(break_line("morning break", t[1], t[2], sector.intervalo_manha));
            detail.push(work_line("late morning", t[2], t[3]));
            detail.push(break_line("lunch", t[3], t[4], sector.almoco_duracao));
            detail.push(work_line("afternoon", t[4], t[5]));
            detail.push("pattern: 6 punches (morning break + lunch)".to_string());
        }
        8 => {
            // the longest break is lunch, the others keep chronological order
            let candidates = [(1, 2), (3, 4), (5, 6)];
            let spans: Vec<i64> = candidates.iter().map(|&(a, b)| t[a].span_to(t[b])).collect();
            let lunch_idx = (0..3)
                .max_by_key(|&i| (spans[i], i == 1))
                .unwrap_or(1);

            breaks.lunch = spans[lunch_idx];
            checker.lunch(breaks.lunch);

            let first_other = if lunch_idx == 0 { 1 } else { 0 };
            for i in (0..3).filter(|&i| i != lunch_idx) {
                if i == first_other {
                    breaks.morning = spans[i];
                    checker.short_break(BreakKind::Morning, spans[i]);
                } else {
                    breaks.afternoon = spans[i];
                    checker.short_break(BreakKind::Afternoon, spans[i]);
                }
            }

            detail.push(work_line("morning", t[0], t[1]));
            for (i, &(a, b)) in candidates.iter().enumerate() {
                let (label, standard) = if i == lunch_idx {
                    ("lunch", sector.almoco_duracao)
                } else if i == first_other {
                    (BreakKind::Morning.label(), sector.intervalo_manha)
                } else {
                    (BreakKind::Afternoon.label(), sector.intervalo_tarde)
                };
                detail.push(break_line(label, t[a], t[b], standard));
                detail.push(work_line("work", t[b], t[b + 1]));
            }
            detail.push("pattern: 8 punches (morning break + lunch + afternoon break)".to_string());
        }
        n => {
            checker.alerts.push(format!("irregular pattern: {n} punches"));
            detail.push(format!("no interval analysis for {n} punches"));
        }
    }

    if breaks.lunch > 0 {
        detail.push(lunch_standard(sector));
    }

    IntervalReport {
        breaks,
        compliant: checker.alerts.is_empty(),
        alerts: checker.alerts,
        detail: detail.join(" | "),
    }
}
