// CLI behavior through the compiled binary

use serde_json::Value;
use std::process::Command;

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::TestFixture;

fn salita() -> Command {
    Command::new(env!("CARGO_BIN_EXE_salita"))
}

#[test]
fn test_naturalize_command() {
    let output = salita()
        .args(["naturalize", "--hint", "english", "centro", "computer"])
        .output()
        .expect("Failed to run salita");

    assert!(output.status.success(), "salita failed: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "centro -> sentro\ncomputer -> kompyuter\n");
}

#[test]
fn test_naturalize_trace_lists_phases() {
    let output = salita()
        .args(["naturalize", "--trace", "baño"])
        .output()
        .expect("Failed to run salita");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("digraphs"));
    assert!(stdout.contains("banyo"));
    assert!(stdout.contains("ñ -> ny"));
    assert!(stdout.contains("triple-consonants"));
    assert!(!stdout.contains("spanish "));
}

#[test]
fn test_morphology_commands() {
    let run = |args: &[&str]| {
        let output = salita().args(args).output().expect("Failed to run salita");
        assert!(output.status.success());
        String::from_utf8_lossy(&output.stdout).trim_end().to_string()
    };

    assert_eq!(run(&["affix", "kain", "infix"]), "kumain");
    assert_eq!(run(&["affix", "aral", "nonsense"]), "aral");
    assert_eq!(run(&["reduplicate", "gising", "recent"]), "kagi-gising");
    assert_eq!(run(&["reduplicate", "magsulat", "partial", "--prefix", "mag"]), "magsu-sulat");
    assert_eq!(run(&["ligature", "maganda", "bahay"]), "magandang bahay");
    assert_eq!(run(&["particle", "Juan"]), "Juan din");
}

#[test]
fn test_invalid_hint_is_rejected() {
    let output = salita()
        .args(["naturalize", "--hint", "klingon", "centro"])
        .output()
        .expect("Failed to run salita");
    assert!(!output.status.success());
}

#[test]
fn test_evaluate_writes_report_and_stats() {
    let fixture = TestFixture::new();
    let table = fixture.create_table_file("table.tsv", &[("centro", "sentro"), ("Albuterol", "albiyuterol")]);
    let report_path = fixture.path("results.txt");
    let stats_path = fixture.path("stats.json");

    let output = salita()
        .arg("evaluate")
        .arg("--table")
        .arg(&table)
        .arg("--out")
        .arg(&report_path)
        .arg("--stats-out")
        .arg(&stats_path)
        .arg("--no-progress")
        .output()
        .expect("Failed to run salita");

    assert!(output.status.success(), "salita failed: {}", String::from_utf8_lossy(&output.stderr));

    let report = std::fs::read_to_string(&report_path).expect("Report should exist");
    assert_eq!(String::from_utf8_lossy(&output.stdout), report);
    assert!(report.contains("centro -> sentro ? sentro : true"));
    assert!(report.contains("Accuracy:   50.00%"));

    let stats: Value = serde_json::from_str(&std::fs::read_to_string(&stats_path).unwrap())
        .expect("Stats should be valid JSON");
    assert_eq!(stats["metrics"]["true_positives"], 1);
    assert_eq!(stats["metrics"]["accuracy"], stats["metrics"]["precision"]);
}

#[test]
fn test_evaluate_rejects_malformed_table() {
    let fixture = TestFixture::new();
    let table = fixture.create_raw_file("bad.tsv", "centro\tsentro\textra\n");

    let output = salita()
        .arg("evaluate")
        .arg("--table")
        .arg(&table)
        .arg("--out")
        .arg(fixture.path("results.txt"))
        .arg("--no-progress")
        .output()
        .expect("Failed to run salita");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 1"));
}
