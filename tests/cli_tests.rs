use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{WORK_DAY, clock_row, no_config, ps, temp_out, write_export};

fn sample_file(name: &str) -> String {
    write_export(
        name,
        &[
            clock_row("1001", "Ana Silva", "Produção", WORK_DAY, "", &["08:00", "12:00", "13:00", "17:00"]),
            clock_row("1001", "Ana Silva", "Produção", "02/04/2025", "", &["08:00", "12:00", "13:00"]),
            clock_row("1001", "Ana Silva", "Produção", "03/04/2025", "", &["08:45", "12:00", "13:00", "17:00"]),
            clock_row("1002", "Rui Costa", "Vendas", WORK_DAY, "Férias", &[]),
        ],
    )
}

#[test]
fn test_analyze_prints_days_and_summary() {
    let file = sample_file("cli_analyze");
    let conf = no_config("cli_analyze");

    ps().args(["--config", &conf, "analyze", &file])
        .assert()
        .success()
        .stdout(contains("Ana Silva"))
        .stdout(contains("01/04/2025"))
        .stdout(contains("missing final exit"))
        .stdout(contains("possible forgotten entry"))
        .stdout(contains("Summary"))
        .stdout(contains("skipped rows: 1"));
}

#[test]
fn test_analyze_filters() {
    let file = sample_file("cli_analyze_filters");
    let conf = no_config("cli_analyze_filters");

    ps().args(["--config", &conf, "analyze", &file, "--employee", "1002"])
        .assert()
        .success()
        .stdout(contains("Rui Costa"))
        .stdout(contains("Ana Silva").not());

    ps().args(["--config", &conf, "analyze", &file, "--problems"])
        .assert()
        .success()
        .stdout(contains("02/04/2025"))
        .stdout(contains("03/04/2025"))
        .stdout(contains("Rui Costa").not());

    ps().args([
        "--config",
        &conf,
        "analyze",
        &file,
        "--range",
        "2025-04-02",
        "--details",
    ])
    .assert()
    .success()
    .stdout(contains("02/04/2025"))
    .stdout(contains("suggestion:"))
    .stdout(contains("03/04/2025").not());
}

#[test]
fn test_analyze_unreadable_file_fails() {
    let file = write_export("cli_garbage", &["nothing,to,see".to_string()]);
    let conf = no_config("cli_garbage");

    ps().args(["--config", &conf, "analyze", &file])
        .assert()
        .failure()
        .stderr(contains("No parseable rows"));
}

#[test]
fn test_fix_previews_correction() {
    let file = sample_file("cli_fix");
    let conf = no_config("cli_fix");

    ps().args([
        "--config",
        &conf,
        "fix",
        &file,
        "--date",
        "02/04/2025",
        "--time",
        "17:00",
    ])
    .assert()
    .success()
    .stdout(contains("Inserting exit at 17:00"))
    .stdout(contains("before"))
    .stdout(contains("after"))
    .stdout(contains("consistent"));
}

#[test]
fn test_fix_unknown_day() {
    let file = sample_file("cli_fix_unknown");
    let conf = no_config("cli_fix_unknown");

    ps().args([
        "--config", &conf, "fix", &file, "--date", "20/04/2025", "--time", "08:00",
    ])
    .assert()
    .failure()
    .stderr(contains("No record found"));

    ps().args([
        "--config", &conf, "fix", &file, "--date", "01/04/2025", "--time", "08:00",
    ])
    .assert()
    .failure()
    .stderr(contains("--employee"));

    ps().args([
        "--config", &conf, "fix", &file, "--date", "02/04/2025", "--time", "25:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time"));
}

#[test]
fn test_export_csv() {
    let file = sample_file("cli_export");
    let conf = no_config("cli_export");
    let out = temp_out("cli_export", "csv");

    ps().args([
        "--config", &conf, "export", &file, "--out", &out, "--format", "csv",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Ana Silva"));
    assert!(content.contains("missing final exit"));

    // existing file, no terminal, no --force
    ps().args(["--config", &conf, "export", &file, "--out", &out])
        .assert()
        .failure()
        .stderr(contains("--force"));

    ps().args(["--config", &conf, "export", &file, "--out", &out, "--force"])
        .assert()
        .success();
}

#[test]
fn test_export_rejects_relative_path() {
    let file = sample_file("cli_export_relative");
    let conf = no_config("cli_export_relative");

    ps().args(["--config", &conf, "export", &file, "--out", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[test]
fn test_sectors_lists_builtin_calibration() {
    let conf = no_config("cli_sectors");

    ps().args(["--config", &conf, "sectors"])
        .assert()
        .success()
        .stdout(contains("Administrativo"))
        .stdout(contains("Logística"))
        .stdout(contains("Vendas"))
        .stdout(contains("07:00"));
}

#[test]
fn test_init_check_and_migrate() {
    let conf = no_config("cli_init");

    ps().args(["--config", &conf, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Test mode"));
    assert!(!std::path::Path::new(&conf).exists());

    ps().args(["--config", &conf, "init"]).assert().success();
    assert!(std::path::Path::new(&conf).exists());

    ps().args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));

    fs::write(&conf, "daily_target_minutes: 450\n").expect("write partial config");

    ps().args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("default_sector"))
        .stdout(contains("sectors"));

    ps().args(["--config", &conf, "config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("+ default_sector"));

    let content = fs::read_to_string(&conf).expect("read migrated config");
    assert!(content.contains("daily_target_minutes: 450"));
    assert!(content.contains("tolerancia_esquecimento"));

    ps().args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("daily_target_minutes: 450"));
}
