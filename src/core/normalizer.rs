//! Raw time field → `ClockTime`.

use crate::errors::{AppError, AppResult};
use crate::utils::time::ClockTime;
use regex::Regex;
use std::sync::OnceLock;

fn hm_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("static time pattern"))
}

fn compact_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})(\d{2})$").expect("static compact pattern"))
}

/// Markers meaning "no punch here".
fn is_absent(s: &str) -> bool {
    s.is_empty() || s.eq_ignore_ascii_case("nan") || s == "00:00" || s == "0:00"
}

/// Parse one raw field.
///
/// * `Ok(Some(t))` for `H:MM`, `HH:MM` and compact `HMM`/`HHMM` ("830" → 08:30)
/// * `Ok(None)` for the absent markers (`""`, `nan`, midnight as `00:00`, `0:00`, `0000`, `000`)
/// * `Err(InvalidTime)` for anything else, including out-of-range values
pub fn try_normalize(raw: &str) -> AppResult<Option<ClockTime>> {
    let s = raw.trim();
    if is_absent(s) {
        return Ok(None);
    }

    let caps = hm_re()
        .captures(s)
        .or_else(|| compact_re().captures(s))
        .ok_or_else(|| AppError::InvalidTime(raw.to_string()))?;

    let hour: u32 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidTime(raw.to_string()))?;
    let minute: u32 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidTime(raw.to_string()))?;

    match ClockTime::from_hm(hour, minute) {
        // midnight in any spelling ("0000", "000") is the absent sentinel
        Some(ClockTime::MIDNIGHT) => Ok(None),
        Some(t) => Ok(Some(t)),
        None => Err(AppError::InvalidTime(raw.to_string())),
    }
}

/// Lenient form: malformed input is treated like an absent punch.
pub fn normalize(raw: &str) -> Option<ClockTime> {
    try_normalize(raw).ok().flatten()
}
