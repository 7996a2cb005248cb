//! Formatting utilities used for CLI and export outputs.

use crate::utils::time::format_minutes;

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // es: +02:25 oppure -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: +02h 25m oppure -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Balance column: overtime as `+HH:MM`, shortfall as `-HH:MM`, blank when even.
pub fn balance_label(overtime: i64, shortfall: i64) -> String {
    if overtime > 0 {
        mins2readable(overtime, true, true)
    } else if shortfall > 0 {
        mins2readable(-shortfall, true, true)
    } else {
        "--:--".to_string()
    }
}

/// Duration cell: `HH:MM`, or `--:--` for zero.
pub fn duration_cell(mins: i64) -> String {
    if mins == 0 {
        "--:--".to_string()
    } else {
        format_minutes(mins)
    }
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn confidence(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Lower-case and strip the Portuguese diacritics, for loose label matching
/// ("Produção" == "producao", "sábado" == "sabado").
pub fn fold_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
