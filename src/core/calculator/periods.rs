//! Work and break spans for the canonical shift patterns.

use crate::models::day_type::DayType;
use crate::models::record::Durations;
use crate::models::slot::SlotMap;
use crate::utils::time::ClockTime;

/// Zero-floored span between the i-th and j-th punch.
fn span(t: &[ClockTime], i: usize, j: usize) -> i64 {
    t[i].span_to(t[j])
}

/// Durations from the filled slots.
///
/// 4: E1→S1 morning, S1→E2 lunch, E2→S2 afternoon.
/// 6: two morning spans with a break between, S2→E3 lunch, E3→S3 afternoon.
/// 8: as 6, plus S3→E4 afternoon break and E4→S4 afternoon.
/// 3 (final exit missing): morning and lunch only, afternoon stays zero.
/// 2: a single morning span.
pub fn compute(slots: &SlotMap) -> Durations {
    let t = slots.times();
    let mut d = Durations::zero();

    match t.len() {
        8 => {
            d.morning_period = span(&t, 0, 1) + span(&t, 2, 3);
            d.morning_break = span(&t, 1, 2);
            d.lunch_break = span(&t, 3, 4);
            d.afternoon_break = span(&t, 5, 6);
            d.afternoon_period = span(&t, 4, 5) + span(&t, 6, 7);
        }
        6 | 7 => {
            d.morning_period = span(&t, 0, 1) + span(&t, 2, 3);
            d.morning_break = span(&t, 1, 2);
            d.lunch_break = span(&t, 3, 4);
            d.afternoon_period = span(&t, 4, 5);
        }
        4 | 5 => {
            d.morning_period = span(&t, 0, 1);
            d.lunch_break = span(&t, 1, 2);
            d.afternoon_period = span(&t, 2, 3);
        }
        3 => {
            d.morning_period = span(&t, 0, 1);
            d.lunch_break = span(&t, 1, 2);
        }
        2 => {
            d.morning_period = span(&t, 0, 1);
        }
        _ => {}
    }

    d.total_work = d.morning_period + d.afternoon_period;
    d.total_break = d.lunch_break + d.morning_break + d.afternoon_break;
    d
}

/// `compute`, with vacation, holiday and full absence forced to zero.
pub fn compute_for_day(slots: &SlotMap, day_type: DayType) -> Durations {
    if day_type.zeroes_durations() {
        Durations::zero()
    } else {
        compute(slots)
    }
}
