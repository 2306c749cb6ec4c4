mod common;
use common::{hl, isolated_config, sample_event, temp_path, xlsx_entry};
use std::fs;

#[test]
fn test_export_xlsx_one_sheet_per_job() {
    let input = sample_event("xlsx_sheets");
    let config = isolated_config("xlsx_sheets");
    let out = temp_path("xlsx_sheets_out", "xlsx");

    hl()
        .args(["--config", &config, "export", "-i", &input, "--format", "excel", "--file", &out])
        .assert()
        .success();

    let workbook = xlsx_entry(&out, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="Kitchen Crew Morning""#));
    assert!(workbook.contains(r#"name="Kitchen Crew Morning2""#));

    let sheet = xlsx_entry(&out, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains(r#"state="frozen""#));
    assert!(sheet.contains("<mergeCell "));

    let strings = xlsx_entry(&out, "xl/sharedStrings.xml");
    assert!(strings.contains("Coordinators"));
    assert!(strings.contains("2024-06-01, 07:00 - 10:00"));
    assert!(strings.contains("Anna"));
    assert!(strings.contains("T-shirt"));
    assert!(strings.contains("Food handling"));
}

#[test]
fn test_export_xlsx_alias_and_no_sensitive() {
    let input = sample_event("xlsx_no_sensitive");
    let config = isolated_config("xlsx_no_sensitive");
    let out = temp_path("xlsx_no_sensitive_out", "xlsx");

    hl()
        .args([
            "--config",
            &config,
            "export",
            "-i",
            &input,
            "--format",
            "xlsx",
            "--file",
            &out,
            "--no-sensitive",
        ])
        .assert()
        .success();

    let strings = xlsx_entry(&out, "xl/sharedStrings.xml");
    assert!(strings.contains("Anna"));
    assert!(!strings.contains("1234567"));
}

#[test]
fn test_export_xlsx_multi_assigned_helper_is_highlighted() {
    let input = sample_event("xlsx_highlight");
    let config = isolated_config("xlsx_highlight");
    let out = temp_path("xlsx_highlight_out", "xlsx");

    hl()
        .args(["--config", &config, "export", "-i", &input, "--format", "excel", "--file", &out])
        .assert()
        .success();

    let styles = xlsx_entry(&out, "xl/styles.xml");
    assert!(styles.to_uppercase().contains("FFFF99"));
}

#[test]
fn test_export_xlsx_single_job_by_name() {
    let input = sample_event("xlsx_single_job");
    let config = isolated_config("xlsx_single_job");
    let out = temp_path("xlsx_single_job_out", "xlsx");

    hl()
        .args([
            "--config",
            &config,
            "export",
            "-i",
            &input,
            "--format",
            "excel",
            "--file",
            &out,
            "--job",
            "Kitchen Crew Morning Shift B",
        ])
        .assert()
        .success();

    let workbook = xlsx_entry(&out, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="Kitchen Crew Morning""#));
    assert!(!workbook.contains(r#"name="Kitchen Crew Morning2""#));

    let strings = xlsx_entry(&out, "xl/sharedStrings.xml");
    assert!(strings.contains("Ben"));
    // coordinators banner only appears for jobs that have coordinators
    assert!(!strings.contains("Coordinators"));
}

#[test]
fn test_export_xlsx_date_filter_drops_coordinators() {
    let input = sample_event("xlsx_date");
    let config = isolated_config("xlsx_date");
    let out = temp_path("xlsx_date_out", "xlsx");

    hl()
        .args([
            "--config", &config, "export", "-i", &input, "--format", "excel", "--file", &out,
            "--date", "2024-06-01",
        ])
        .assert()
        .success();

    let strings = xlsx_entry(&out, "xl/sharedStrings.xml");
    assert!(!strings.contains("Coordinators"));
    assert!(strings.contains("2024-06-01, 07:00 - 10:00"));
    assert!(!strings.contains("2024-06-02"));
}

#[test]
fn test_export_pdf_document() {
    let input = sample_event("pdf_document");
    let config = isolated_config("pdf_document");
    let out = temp_path("pdf_document_out", "pdf");

    hl()
        .args(["--config", &config, "export", "-i", &input, "--format", "pdf", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    let text = String::from_utf8_lossy(&bytes);
    assert!(bytes.starts_with(b"%PDF"));
    assert!(text.contains("Kitchen Crew Morning Shift A"));
    assert!(text.contains("Coordinators"));
    assert!(text.contains("Nobody is registered for this shift."));
    assert!(text.contains("Summer Fest"));
    assert!(text.contains("Page 1"));
}

#[test]
fn test_export_pdf_date_without_shifts_keeps_heading() {
    let input = sample_event("pdf_date");
    let config = isolated_config("pdf_date");
    let out = temp_path("pdf_date_out", "pdf");

    hl()
        .args([
            "--config", &config, "export", "-i", &input, "--format", "pdf", "--file", &out,
            "--date", "2024-06-02",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Kitchen Crew Morning Shift B"));
    assert!(!text.contains("Coordinators"));
    assert!(!text.contains("Breakfast"));
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let input = sample_event("overwrite");
    let config = isolated_config("overwrite");
    let out = temp_path("overwrite_out", "pdf");
    fs::write(&out, b"keep me").expect("write existing file");

    hl()
        .args(["--config", &config, "export", "-i", &input, "--format", "pdf", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read(&out).expect("read"), b"keep me");

    hl()
        .args([
            "--config", &config, "export", "-i", &input, "--format", "pdf", "--file", &out, "-f",
        ])
        .assert()
        .success();
    assert!(fs::read(&out).expect("read").starts_with(b"%PDF"));
}
