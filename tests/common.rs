#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use punchsheet::config::Config;
use punchsheet::core::pipeline::{self, ReconciledTable};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ps() -> Command {
    cargo_bin_cmd!("punchsheet")
}

/// Header segment repeated in every row of a time-clock export.
pub const HEADER_SEGMENT: &str = "Data,Tipo,E1,S1,E2,S2,E3,S3,E4,S4,Obj,Justificação";

/// One time-clock row: identity at fixed positions, the header segment,
/// then the values. `punches` fill E1.. in order.
pub fn clock_row(number: &str, name: &str, dept: &str, date: &str, tipo: &str, punches: &[&str]) -> String {
    let mut slots: Vec<String> = punches.iter().map(|p| p.to_string()).collect();
    slots.resize(8, String::new());
    format!(
        ",,{number},,{name},,{dept},{HEADER_SEGMENT},{date},{tipo},{},08:00,",
        slots.join(",")
    )
}

/// Write `rows` (plus a period banner line) to a unique temp CSV and return its path.
pub fn write_export(name: &str, rows: &[String]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchsheet.csv", name));
    let mut content = String::from("\"Período : 01/04/2025 - 30/04/2025\"\n");
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A config path that does not exist: the built-in defaults apply.
pub fn no_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_missing_punchsheet.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Reconcile in-memory CSV text with the default configuration.
pub fn reconcile_rows(rows: &[String]) -> ReconciledTable {
    let content = rows.join("\n");
    pipeline::import_str(&content, &Config::default(), None).expect("parseable rows")
}

/// Tuesday 1 April 2025 (a Mon–Fri work day).
pub const WORK_DAY: &str = "01/04/2025";
/// Sunday 6 April 2025.
pub const SUNDAY: &str = "06/04/2025";
