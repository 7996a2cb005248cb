use crate::cli::commands::load_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{Summary, summarize};
use crate::errors::AppResult;
use crate::export::range::parse_optional_range;
use crate::models::problem::ProblemType;
use crate::models::record::DailyPunchRecord;
use crate::models::slot::Slot;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{GREEN, RED, color_for_balance, color_for_problem, colorize_in_out, paint};
use crate::utils::date::{format_export_date, weekday_short};
use crate::utils::formatting::{balance_label, confidence, duration_cell, mins2readable, percent};
use crate::utils::table::Table;
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        file,
        sector,
        employee,
        range,
        problems,
        details,
    } = cmd
    {
        let table = load_table(file, cfg, sector)?;
        let bounds = parse_optional_range(range)?;

        let selected: Vec<&DailyPunchRecord> = table
            .records
            .iter()
            .filter(|r| employee.as_deref().is_none_or(|e| r.employee_id == e))
            .filter(|r| bounds.is_none_or(|b| b.contains(&r.date)))
            .filter(|r| !*problems || is_flagged(r))
            .collect();

        if selected.is_empty() {
            warning("No days match the selected filters.");
            return Ok(());
        }

        header(format!("{} day(s) from {}", selected.len(), file));
        println!("{}", day_table(&selected).render());

        if *details {
            for r in selected.iter().filter(|r| has_details(r)) {
                print_details(r);
            }
        }

        let owned: Vec<DailyPunchRecord> = selected.iter().map(|r| (*r).clone()).collect();
        let summary = summarize(&owned, cfg, table.skipped_rows);
        print_summary(&summary);

        if table.duplicate_rows > 0 {
            info(format!(
                "{} duplicate row(s) ignored (first occurrence kept)",
                table.duplicate_rows
            ));
        }
        if table.rejected_fields > 0 {
            info(format!(
                "{} punch field(s) could not be read as HH:MM",
                table.rejected_fields
            ));
        }
    }
    Ok(())
}

/// Days worth a look: an anomaly, or an unusable punch set on a day that
/// expected punches.
fn is_flagged(r: &DailyPunchRecord) -> bool {
    r.has_problem() || (!r.punches_valid && r.anomaly.problem != ProblemType::ExpectedNoData)
}

fn has_details(r: &DailyPunchRecord) -> bool {
    !r.punch_warning.is_empty()
        || !r.intervals.alerts.is_empty()
        || !r.anomaly.suggested_fix.is_empty()
        || r.anomaly.problem.is_problem()
}

fn day_table(records: &[&DailyPunchRecord]) -> Table {
    let mut headers = vec!["Numero", "Nome", "Data", "Dia", "Tipo"];
    headers.extend(Slot::ALL.iter().map(|s| s.name()));
    headers.extend(["Trabalho", "Pausas", "Saldo", "OK", "Problema"]);

    let mut table = Table::with_headers(&headers);

    for r in records {
        let mut row = vec![
            r.employee_id.clone(),
            r.employee_name.clone(),
            format_export_date(&r.date),
            weekday_short(&r.date).to_string(),
            r.day_type.label().to_string(),
        ];

        for slot in Slot::ALL {
            row.push(colorize_in_out(&r.slots.display(slot), slot.kind().is_entry()));
        }

        let balance = r.overtime_minutes - r.shortfall_minutes;
        row.push(duration_cell(r.durations.total_work));
        row.push(duration_cell(r.durations.total_break));
        row.push(paint(
            color_for_balance(balance),
            &balance_label(r.overtime_minutes, r.shortfall_minutes),
        ));
        row.push(if r.punches_valid {
            paint(GREEN, "✔")
        } else {
            paint(RED, "✘")
        });
        row.push(paint(
            color_for_problem(r.anomaly.problem),
            &r.anomaly.problem_type,
        ));

        table.add_row(row);
    }

    table
}

fn print_details(r: &DailyPunchRecord) {
    let title = format!(
        "{} {} · {}",
        r.employee_id,
        r.employee_name,
        format_export_date(&r.date)
    );
    println!("{}", Colour::Cyan.bold().paint(title));

    let mut lines: Vec<String> = Vec::new();

    if !r.punch_warning.is_empty() {
        lines.push(format!("punches: {}", r.punch_warning));
    }
    if r.anomaly.problem.is_problem() {
        let mut line = format!(
            "anomaly: {} (confidence {})",
            r.anomaly.problem_type,
            confidence(r.anomaly.suggestion_confidence)
        );
        if r.anomaly.needs_manual_review {
            line.push_str(", needs manual review");
        }
        lines.push(line);
    }
    if !r.anomaly.suggested_fix.is_empty() {
        lines.push(format!("suggestion: {}", r.anomaly.suggested_fix));
    }
    if !r.intervals.alerts.is_empty() {
        lines.push(format!("breaks: {}", r.intervals.alerts_text()));
    }
    if !r.intervals.detail.is_empty() {
        lines.push(format!("intervals: {}", r.intervals.detail));
    }

    let opts = textwrap::Options::new(100)
        .initial_indent("  • ")
        .subsequent_indent("    ");
    for line in lines {
        println!("{}", textwrap::fill(&line, &opts));
    }
    println!();
}

fn print_summary(s: &Summary) {
    let period = match (s.period_start, s.period_end) {
        (Some(a), Some(b)) => format!("{} → {}", format_export_date(&a), format_export_date(&b)),
        _ => "-".to_string(),
    };

    println!("{}", Colour::Blue.bold().paint(format!("Summary ({period})")));
    println!(
        "  Days: {} | with valid punches: {} | absences: {}",
        s.total_days, s.work_days, s.absence_days
    );
    println!(
        "  Worked: {} | daily average: {}",
        mins2readable(s.total_work_minutes, false, false),
        mins2readable(s.avg_daily_minutes, false, false)
    );
    println!(
        "  Overtime: {} | shortfall: {}",
        paint(GREEN, &mins2readable(s.overtime_minutes, false, true)),
        paint(RED, &mins2readable(s.shortfall_minutes, false, true))
    );
    println!(
        "  Punctuality: {} | average delay: {:.1} min | longest delay: {} min",
        percent(s.punctuality_rate),
        s.avg_delay_minutes,
        s.longest_delay_minutes
    );
    println!(
        "  Compliance: {} | perfect days: {} | problematic days: {}",
        percent(s.compliance_rate),
        s.perfect_days,
        s.problematic_days
    );
    println!(
        "  Alerts: {} | needs review: {}",
        s.active_alerts, s.needs_review
    );
    println!(
        "  Invalid punch days: {} | skipped rows: {}",
        s.invalid_punch_days, s.skipped_rows
    );
    println!();
}
