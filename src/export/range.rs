// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Inclusive date interval selected with `--range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, d: &NaiveDate) -> bool {
        *d >= self.start && *d <= self.end
    }
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidRange(format!("{r}: {why}"))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    let (ny, nm) = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt().map(|d| d.day())
}

/// First and last day covered by one `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn bounds(part: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = part.trim();
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(p, "invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(p, "invalid year"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(p, "invalid year"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let (ys, ms) = p.split_once('-').ok_or_else(|| invalid(p, "expected YYYY-MM"))?;
            let y: i32 = ys.parse().map_err(|_| invalid(p, "invalid year"))?;
            let m: u32 = ms.parse().map_err(|_| invalid(p, "invalid month"))?;
            let last = month_last_day(y, m).ok_or_else(|| invalid(p, "invalid month"))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid(p, "invalid month"))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| invalid(p, "invalid month"))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid(p, "invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid(p, "unsupported format")),
    }
}

/// Parse `--range`.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any of the above as `start:end` (both sides in the same format)
pub fn parse_range(r: &str) -> AppResult<DateRange> {
    let (start, end) = match r.split_once(':') {
        Some((a, b)) => {
            if a.trim().len() != b.trim().len() {
                return Err(invalid(r, "start and end must have same format"));
            }
            (bounds(a)?.0, bounds(b)?.1)
        }
        None => bounds(r)?,
    };

    if start > end {
        return Err(invalid(r, "start is after end"));
    }
    Ok(DateRange { start, end })
}

/// `None` / `all` select everything.
pub fn parse_optional_range(r: &Option<String>) -> AppResult<Option<DateRange>> {
    match r {
        None => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => parse_range(s).map(Some),
    }
}
