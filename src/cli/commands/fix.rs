use crate::cli::commands::load_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::{self, ReconciledTable};
use crate::errors::{AppError, AppResult};
use crate::models::record::DailyPunchRecord;
use crate::models::slot::{Slot, SlotMap};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{color_for_problem, colorize_in_out, paint};
use crate::utils::date::{format_export_date, parse_date};
use crate::utils::formatting::{balance_label, duration_cell};
use crate::utils::table::Table;
use crate::utils::time::ClockTime;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fix {
        file,
        date,
        time,
        employee,
        problem,
        sector,
    } = cmd
    {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let at: ClockTime = time.parse()?;

        let table = load_table(file, cfg, sector)?;
        let record = pick_record(&table, employee.as_deref(), day)?;

        header(format!(
            "Correction preview: {} {} · {}",
            record.employee_id,
            record.employee_name,
            format_export_date(&record.date)
        ));

        if record.anomaly.problem.is_problem() {
            info(format!("Current anomaly: {}", record.anomaly.problem_type));
        }

        let (correction, updated) = pipeline::apply_correction(
            record,
            at,
            problem.as_deref(),
            cfg,
            sector.as_deref(),
        );

        println!(
            "Inserting {} at {}\n",
            correction.kind.label(),
            correction.time
        );

        let mut slots = Table::with_headers(&slot_headers());
        slots.add_row(slot_row("before", &correction.before));
        slots.add_row(slot_row("after", &correction.after));
        println!("{}", slots.render());

        if !correction.overflow.is_empty() {
            let extra: Vec<String> = correction.overflow.iter().map(|t| t.to_string()).collect();
            warning(format!(
                "More than eight punches: {} kept outside the slots",
                extra.join(", ")
            ));
        }

        print_outcome(&updated);
    }
    Ok(())
}

/// The day to correct. Without `--employee` the date must be unambiguous.
fn pick_record<'a>(
    table: &'a ReconciledTable,
    employee: Option<&str>,
    day: NaiveDate,
) -> AppResult<&'a DailyPunchRecord> {
    if employee.is_none() {
        let same_day = table.records.iter().filter(|r| r.date == day).count();
        if same_day > 1 {
            return Err(AppError::Other(format!(
                "{same_day} employees have punches on {}: use --employee",
                format_export_date(&day)
            )));
        }
    }

    table.find(employee, day).ok_or_else(|| {
        let who = employee.map(|e| format!("employee {e} on ")).unwrap_or_default();
        AppError::RecordNotFound(format!("{who}{}", format_export_date(&day)))
    })
}

fn slot_headers() -> Vec<&'static str> {
    let mut headers = vec![""];
    headers.extend(Slot::ALL.iter().map(|s| s.name()));
    headers
}

fn slot_row(label: &str, slots: &SlotMap) -> Vec<String> {
    let mut row = vec![label.to_string()];
    for slot in Slot::ALL {
        row.push(colorize_in_out(&slots.display(slot), slot.kind().is_entry()));
    }
    row
}

fn print_outcome(r: &DailyPunchRecord) {
    println!("Day type : {}", r.day_type.label());
    println!(
        "Worked   : {} | breaks: {} | balance: {}",
        duration_cell(r.durations.total_work),
        duration_cell(r.durations.total_break),
        balance_label(r.overtime_minutes, r.shortfall_minutes)
    );

    if !r.intervals.alerts.is_empty() {
        warning(format!("Breaks: {}", r.intervals.alerts_text()));
    }

    if !r.punches_valid {
        warning(format!("Punches still invalid: {}", r.punch_warning));
    } else if r.anomaly.problem.is_problem() {
        warning(format!(
            "Remaining anomaly: {}",
            paint(color_for_problem(r.anomaly.problem), &r.anomaly.problem_type)
        ));
    } else {
        success("Day is consistent after the correction.");
    }
}
