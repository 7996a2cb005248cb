// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Export dates (`DD/MM/YYYY`) and clock/duration cells (`HH:MM`) as Excel
/// serials, with the number format to display them.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return Some(("dd/mm/yyyy", date_to_excel_serial(&d)?));
    }

    // durations are always below 24h for a single day
    if s.len() == 5
        && let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M")
    {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm", seconds / 86400.0));
    }

    None
}

fn date_to_excel_serial(d: &NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((*d - excel_epoch).num_days() as f64)
}
