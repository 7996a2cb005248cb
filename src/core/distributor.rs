//! Punch sequence → canonical slots, plus count and order validation.

use crate::models::slot::{Slot, SlotMap};
use crate::utils::time::ClockTime;

/// Counts accepted as a complete day.
pub const VALID_COUNTS: [usize; 3] = [4, 6, 8];

pub const INCOMPLETE_PATTERN: &str = "incomplete pattern: missing final exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub slots: SlotMap,
    /// Number of punches in the input, before anything was dropped.
    pub punch_count: usize,
    pub punches_valid: bool,
    pub warning: String,
}

impl Distribution {
    /// E1, S1, E2 filled and nothing else.
    pub fn is_missing_final_exit(&self) -> bool {
        self.punch_count == 3
    }
}

pub fn invalid_count_warning(count: usize) -> String {
    format!("invalid number of punches: {count} (expected 4, 6 or 8)")
}

/// First adjacent pair that is not strictly increasing.
pub fn first_order_violation(times: &[ClockTime]) -> Option<(ClockTime, ClockTime)> {
    times.windows(2).find(|w| w[0] >= w[1]).map(|w| (w[0], w[1]))
}

pub fn order_warning(prev: ClockTime, next: ClockTime) -> String {
    format!("punches out of order: {prev} >= {next}")
}

/// Map punches, in column order, onto the eight slots.
///
/// * 4 / 6 / 8 punches fill E1.. positionally;
/// * 3 punches are the 4-punch day without its final exit (E1, S1, E2);
/// * any other count fills as many complete E/S pairs as it can and drops
///   the remainder.
///
/// The order check runs on the input sequence whatever the count.
pub fn distribute(timestamps: &[ClockTime]) -> Distribution {
    let n = timestamps.len();

    let (kept, mut valid, mut warning): (&[ClockTime], bool, String) = match n {
        0 => (&[], false, String::new()),
        n if VALID_COUNTS.contains(&n) => (timestamps, true, String::new()),
        3 => (timestamps, false, INCOMPLETE_PATTERN.to_string()),
        _ => {
            let pairs = (n / 2).min(Slot::ALL.len() / 2);
            (&timestamps[..pairs * 2], false, invalid_count_warning(n))
        }
    };

    let (slots, _) = SlotMap::positional(kept);

    if let Some((prev, next)) = first_order_violation(timestamps) {
        valid = false;
        if warning.is_empty() {
            warning = order_warning(prev, next);
        } else {
            warning = format!("{warning}; {}", order_warning(prev, next));
        }
    }

    Distribution {
        slots,
        punch_count: n,
        punches_valid: valid,
        warning,
    }
}
