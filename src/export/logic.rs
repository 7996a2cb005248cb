// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::records_to_rows;
use crate::export::range::parse_optional_range;
use crate::export::xlsx::export_xlsx;
use crate::models::record::DailyPunchRecord;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// Export entry point shared by the CLI and library callers.
pub struct ExportLogic;

impl ExportLogic {
    /// Export reconciled records.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None`, `"all"` or a `--range` expression
    pub fn export(
        records: &[DailyPunchRecord],
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let bounds = parse_optional_range(range)?;
        let selected: Vec<DailyPunchRecord> = records
            .iter()
            .filter(|r| bounds.is_none_or(|b| b.contains(&r.date)))
            .cloned()
            .collect();

        if selected.is_empty() {
            warning("No records found for selected range.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&records_to_rows(&selected), &path)?,
            ExportFormat::Json => export_json(&selected, &path)?,
            ExportFormat::Xlsx => export_xlsx(&records_to_rows(&selected), &path)?,
        }

        Ok(selected.len())
    }
}
