mod common;
use common::{hl, isolated_config, sample_event, temp_path};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_unknown_job_fails() {
    let input = sample_event("unknown_job");
    let config = isolated_config("unknown_job");
    let out = temp_path("unknown_job_out", "xlsx");

    hl()
        .args(["--config", &config, "export", "-i", &input, "--file", &out, "--job", "Bar"])
        .assert()
        .failure()
        .stderr(contains("Job not found: Bar"));
}

#[test]
fn test_export_invalid_date_fails() {
    let input = sample_event("invalid_date");
    let config = isolated_config("invalid_date");
    let out = temp_path("invalid_date_out", "pdf");

    hl()
        .args([
            "--config", &config, "export", "-i", &input, "--format", "pdf", "--file", &out,
            "--date", "01.06.2024",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_export_invalid_column_fails() {
    let input = sample_event("invalid_column");
    let config = isolated_config("invalid_column");
    let out = temp_path("invalid_column_out", "xlsx");

    hl()
        .args([
            "--config", &config, "export", "-i", &input, "--file", &out, "--columns",
            "name,salary",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid column"));
}

#[test]
fn test_export_unsupported_input_fails() {
    let config = isolated_config("unsupported_input");
    let input = temp_path("unsupported_input", "csv");
    fs::write(&input, "name\nSummer Fest\n").expect("write input");
    let out = temp_path("unsupported_input_out", "xlsx");

    hl()
        .args(["--config", &config, "export", "-i", &input, "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Unsupported input file"));
}

#[test]
fn test_export_rejects_unknown_format() {
    let input = sample_event("unknown_format");

    hl()
        .args(["export", "-i", &input, "--format", "odt"])
        .assert()
        .failure();
}

#[test]
fn test_stats_prints_nutrition_and_occupancy() {
    let input = sample_event("stats");
    let config = isolated_config("stats");

    hl()
        .args(["--config", &config, "stats", "-i", &input])
        .assert()
        .success()
        .stdout(contains("Vegan"))
        .stdout(contains("=no nuts"))
        .stdout(contains("2/2"))
        .stdout(contains("2/unlimited"));
}

#[test]
fn test_init_writes_config_once() {
    let config = isolated_config("init_once");

    hl().args(["--config", &config, "init"]).assert().success();
    let content = fs::read_to_string(&config).expect("read config");
    assert!(content.contains("default_format"));

    hl()
        .args(["--config", &config, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    hl().args(["--config", &config, "init", "--force"]).assert().success();
}

#[test]
fn test_config_check_reports_missing_settings() {
    let config = isolated_config("config_check");
    fs::write(&config, "default_format: pdf\n").expect("write config");

    hl()
        .args(["--config", &config, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("include_sensitive"));

    hl()
        .args(["--config", &config, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_format: pdf"));
}

#[test]
fn test_config_default_format_is_used_for_export() {
    let input = sample_event("config_format");
    let config = isolated_config("config_format");
    fs::write(&config, "default_format: pdf\n").expect("write config");
    let out = temp_path("config_format_out", "pdf");

    hl()
        .args(["--config", &config, "export", "-i", &input, "--file", &out])
        .assert()
        .success();

    assert!(fs::read(&out).expect("read").starts_with(b"%PDF"));
}
