//! Integration tests for the `sections` subcommand.

mod common;

use assert_cmd::Command;
use common::{entry, proposal_pdf, standard_proposal, temp_pdf};
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("propsplit").unwrap()
}

#[test]
fn sections_text_lists_every_section() {
    let pdf = temp_pdf(&standard_proposal());

    cmd()
        .args(["sections", pdf.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("section\tpages\tsource\tstatus"))
        .stdout(predicate::str::contains("summary\t1-1\tbookmark\textract"))
        .stdout(predicate::str::contains(
            "project-description\t2-16\tbookmark\textract",
        ))
        .stdout(predicate::str::contains("references\t17-20\tbookmark\textract"))
        .stdout(predicate::str::contains("data-mgmt-plan\t-\tdefault\tskipped"))
        .stdout(predicate::str::contains("mentoring-plan\t-\tdefault\tskipped"));
}

#[test]
fn sections_reports_default_out_of_range() {
    let pdf = temp_pdf(&proposal_pdf(10, &[entry("Summary", 1)]));

    cmd()
        .args(["sections", pdf.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "project-description\t2-16\tdefault\tout of range",
        ));
}

#[test]
fn sections_json_format() {
    let pdf = temp_pdf(&standard_proposal());

    let output = cmd()
        .args(["sections", pdf.path().to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 5);
    assert_eq!(arr[2]["section"], "references");
    assert_eq!(arr[2]["file"], "submit-references.pdf");
    assert_eq!(arr[2]["start_page"], 17);
    assert_eq!(arr[2]["end_page"], 20);
    assert_eq!(arr[2]["included"], true);
    assert_eq!(arr[3]["included"], false);
    assert!(arr[3].get("start_page").is_none());
}

#[test]
fn sections_does_not_write_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("main.pdf"), standard_proposal()).unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("sections")
        .assert()
        .success();

    assert!(!dir.path().join("submit-summary.pdf").exists());
}
