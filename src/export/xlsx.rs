// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{HEADERS, RecordExport};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX export with a styled header and auto-sized columns.
pub(crate) fn export_xlsx(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Timesheet").map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);
    let flagged = Color::RGB(0xFCE4D6);

    // ---------------------------
    // Rows (invalid days highlighted)
    // ---------------------------
    for (row_index, rec) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if !rec.punches_valid || rec.needs_manual_review {
            flagged
        } else if row_index % 2 == 0 {
            band1
        } else {
            band2
        };

        for (col, value) in rec.to_row().iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, (*w).min(60) as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Date/time cells become native Excel values, numbers stay numeric,
/// everything else is text.
fn write_xlsx_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        let fmt = base.set_num_format(num_format);
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    if let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
