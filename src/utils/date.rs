use chrono::{Datelike, NaiveDate, Weekday};

/// Parse the export's `DD/MM/YYYY` date field. Anything after the first
/// whitespace (the weekday name some exports append) is ignored.
pub fn parse_export_date(raw: &str) -> Option<NaiveDate> {
    let first = raw.split_whitespace().next()?;
    NaiveDate::parse_from_str(first, "%d/%m/%Y").ok()
}

pub fn format_export_date(d: &NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// Portuguese weekday name, as used by the sector `dias_trabalho` lists.
pub fn weekday_name_pt(d: &NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "segunda",
        Weekday::Tue => "terça",
        Weekday::Wed => "quarta",
        Weekday::Thu => "quinta",
        Weekday::Fri => "sexta",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Short English weekday label for table output.
pub fn weekday_short(d: &NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Accepts `DD/MM/YYYY` (export format) or `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_export_date(s).or_else(|| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}
