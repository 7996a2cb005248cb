//! CSV rows → extracted punch days.
//!
//! Two layouts are recognised:
//! * the time-clock export, where every row repeats the employee identity at
//!   fixed positions followed by its own `Data … Justificação` header
//!   segment and then the values;
//! * the tabular layout written by `export` (first cell `Numero`), with one
//!   header row.
//!
//! A malformed row is skipped and counted, never fatal.

use crate::core::normalizer::try_normalize;
use crate::core::schema::{
    self, ColumnSpan, DATE_HEADER, DEPARTMENT_HEADER, EXTRA_PUNCHES_HEADER, JUSTIFICATION_HEADER,
    NAME_HEADER, NUMBER_HEADER,
};
use crate::errors::AppResult;
use crate::models::slot::SlotMap;
use crate::utils::date::parse_export_date;
use crate::utils::time::ClockTime;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Time-clock layout: identity fields sit at fixed positions.
const NUMBER_POS: usize = 2;
const NAME_POS: usize = 4;
const DEPARTMENT_POS: usize = 6;
const MIN_ROW_LEN: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedFields {
    pub number: String,
    pub name: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRow {
    pub fixed: FixedFields,
    pub date: NaiveDate,
    pub day_label: String,
    pub justification: String,
    /// Slot columns as read.
    pub slots: SlotMap,
    /// Non-empty punches in column order (not necessarily chronological).
    pub timestamps: Vec<ClockTime>,
    /// Punches beyond the eight slots (tabular layout only).
    pub extra: Vec<ClockTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub duplicates: usize,
    pub rejected_fields: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub rows: Vec<ExtractedRow>,
    pub report: ImportReport,
}

/// Run the normalizer over the candidate slot columns.
/// Returns the slot map as read, the ordered timestamps and the number of
/// malformed fields that were dropped.
pub fn extract_punches(values: &[String], span: &ColumnSpan) -> (SlotMap, Vec<ClockTime>, usize) {
    let mut slots = SlotMap::new();
    let mut timestamps = Vec::new();
    let mut rejected = 0;

    for (slot, idx) in &span.slots {
        let raw = values.get(*idx).map(String::as_str).unwrap_or("");
        match try_normalize(raw) {
            Ok(Some(t)) => {
                slots.set(*slot, Some(t));
                timestamps.push(t);
            }
            Ok(None) => {}
            Err(e) => {
                debug!(slot = %slot, error = %e, "rejected time field");
                rejected += 1;
            }
        }
    }

    (slots, timestamps, rejected)
}

/// Extract one day from a header slice and the matching value slice.
/// `None` when the headers do not resolve or the date is unparseable.
pub fn extract(
    fixed: FixedFields,
    headers: &[String],
    values: &[String],
) -> Option<(ExtractedRow, usize)> {
    let span = ColumnSpan::resolve(headers)?;
    let cell = |idx: usize| values.get(idx).map(|v| v.trim().to_string()).unwrap_or_default();

    let date = match parse_export_date(&cell(span.date)) {
        Some(d) => d,
        None => {
            debug!(raw = %cell(span.date), "unparseable date");
            return None;
        }
    };

    let (slots, timestamps, rejected) = extract_punches(values, &span);

    Some((
        ExtractedRow {
            fixed,
            date,
            day_label: span.day_type.map(cell).unwrap_or_default(),
            justification: cell(span.justification),
            slots,
            timestamps,
            extra: Vec::new(),
        },
        rejected,
    ))
}

/// Time-clock layout row.
pub fn extract_embedded(row: &[String]) -> Option<(ExtractedRow, usize)> {
    if row.len() < MIN_ROW_LEN {
        return None;
    }

    let canon = schema::canonical_headers(row);
    let start = canon.iter().position(|h| h == DATE_HEADER)?;
    let end = canon.iter().position(|h| h == JUSTIFICATION_HEADER)?;
    if end < start {
        return None;
    }

    let headers = &canon[start..=end];
    let mut values: Vec<String> = row[end + 1..].to_vec();
    if values.len() < headers.len() {
        values.resize(headers.len(), String::new());
    }

    let fixed = FixedFields {
        number: row[NUMBER_POS].trim().to_string(),
        name: row[NAME_POS].trim().to_string(),
        department: row[DEPARTMENT_POS].trim().to_string(),
    };

    extract(fixed, headers, &values)
}

/// Tabular layout row, `headers` being the canonical first row.
pub fn extract_tabular(headers: &[String], row: &[String]) -> Option<(ExtractedRow, usize)> {
    let field = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .and_then(|i| row.get(i))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };

    let fixed = FixedFields {
        number: field(NUMBER_HEADER),
        name: field(NAME_HEADER),
        department: field(DEPARTMENT_HEADER),
    };

    let (mut extracted, mut rejected) = extract(fixed, headers, row)?;

    for raw in field(EXTRA_PUNCHES_HEADER).split_whitespace() {
        match try_normalize(raw) {
            Ok(Some(t)) => {
                extracted.extra.push(t);
                extracted.timestamps.push(t);
            }
            Ok(None) => {}
            Err(e) => {
                debug!(error = %e, "rejected extra punch");
                rejected += 1;
            }
        }
    }

    Some((extracted, rejected))
}

/// UTF-8, falling back to Latin-1 (Windows-1252).
pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            debug!("input is not UTF-8, decoding as Windows-1252");
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}

fn to_fields(record: &StringRecord) -> Vec<String> {
    record.iter().map(|f| f.to_string()).collect()
}

fn is_blank(fields: &[String]) -> bool {
    fields.iter().all(|f| f.trim().is_empty())
}

/// Extract every parseable day from CSV text. Duplicate (employee, date)
/// rows keep the first occurrence.
pub fn extract_str(content: &str) -> AppResult<Extraction> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut out = Extraction::default();
    let mut tabular_headers: Option<Vec<String>> = None;
    let mut seen: HashSet<(String, NaiveDate)> = HashSet::new();

    for (line, result) in reader.records().enumerate() {
        let fields = match result {
            Ok(rec) => to_fields(&rec),
            Err(e) => {
                debug!(line = line + 1, error = %e, "unreadable CSV record");
                out.report.rows_skipped += 1;
                continue;
            }
        };

        if is_blank(&fields) {
            continue;
        }

        if tabular_headers.is_none()
            && out.report.rows_read == 0
            && fields
                .first()
                .map(|f| schema::canonical_header(f) == NUMBER_HEADER)
                .unwrap_or(false)
        {
            tabular_headers = Some(schema::canonical_headers(&fields));
            continue;
        }

        out.report.rows_read += 1;

        let extracted = match &tabular_headers {
            Some(headers) => extract_tabular(headers, &fields),
            None => extract_embedded(&fields),
        };

        let Some((row, rejected)) = extracted else {
            debug!(line = line + 1, "row skipped");
            out.report.rows_skipped += 1;
            continue;
        };

        out.report.rejected_fields += rejected;

        if !seen.insert((row.fixed.number.clone(), row.date)) {
            debug!(employee = %row.fixed.number, date = %row.date, "duplicate day dropped");
            out.report.duplicates += 1;
            continue;
        }

        out.rows.push(row);
    }

    info!(
        rows = out.rows.len(),
        skipped = out.report.rows_skipped,
        duplicates = out.report.duplicates,
        "extraction done"
    );

    Ok(out)
}

pub fn extract_file(path: &Path) -> AppResult<Extraction> {
    let bytes = fs::read(path)?;
    extract_str(&decode(&bytes))
}
