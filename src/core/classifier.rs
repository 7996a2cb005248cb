//! Day type resolution: explicit `Tipo` label, or a guess from the punches.

use crate::models::day_type::DayType;
use crate::utils::time::ClockTime;
use tracing::debug;

const HALF_DAY_MIN: i64 = 210;
const HALF_DAY_MAX: i64 = 300;

/// Guess the type of an unlabelled day.
pub fn auto_classify(timestamps: &[ClockTime], work_day: bool) -> DayType {
    match timestamps {
        [] if work_day => DayType::FullAbsence,
        [] => DayType::Weekend,
        [a, b] if (HALF_DAY_MIN..=HALF_DAY_MAX).contains(&a.span_to(*b)) => DayType::HalfDay,
        _ => DayType::Normal,
    }
}

/// Day type from the label, falling back to `auto_classify` when empty.
/// An unrecognised label counts as a normal day.
pub fn classify(label: &str, timestamps: &[ClockTime], work_day: bool) -> DayType {
    if label.trim().is_empty() {
        return auto_classify(timestamps, work_day);
    }

    DayType::from_label(label).unwrap_or_else(|| {
        debug!(label, "unknown day type label, treating as Normal");
        DayType::Normal
    })
}
