use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn latin1(s: &str) -> Vec<u8> {
    s.chars().map(|c| c as u32 as u8).collect()
}

fn write_statement(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("umsatz.csv");
    std::fs::write(&path, latin1(content)).unwrap();
    path
}

fn checking_statement() -> String {
    "\"Umsätze Girokonto\";\"Zeitraum: 30 Tage\";\n\
     \"Neuer Kontostand\";\"1.234,56 EUR\";\n\
     \n\
     \"Buchungstag\";\"Wertstellung (Valuta)\";\"Vorgang\";\"Buchungstext\";\"Umsatz in EUR\";\n\
     \"01.03.2024\";\"01.03.2024\";\"Lastschrift\";\"Empfänger: Jane Doe Buchungstext: Miete\";\"-650,00\";\n"
        .to_string()
}

#[test]
fn formats_lists_catalog() {
    Command::cargo_bin("umsatz")
        .unwrap()
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("checking"))
        .stdout(predicate::str::contains("Girokonto"))
        .stdout(predicate::str::contains("Depot"));
}

#[test]
fn identify_recognizes_checking_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_statement(dir.path(), &checking_statement());
    Command::cargo_bin("umsatz")
        .unwrap()
        .args(["identify", path.to_str().unwrap(), "--format", "checking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recognized"));
}

#[test]
fn identify_rejects_other_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_statement(dir.path(), &checking_statement());
    Command::cargo_bin("umsatz")
        .unwrap()
        .args(["identify", path.to_str().unwrap(), "--format", "brokerage"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("not recognized"));
}

#[test]
fn unknown_format_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_statement(dir.path(), &checking_statement());
    Command::cargo_bin("umsatz")
        .unwrap()
        .args(["identify", path.to_str().unwrap(), "--format", "giro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn extract_prints_ledger_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_statement(dir.path(), &checking_statement());
    Command::cargo_bin("umsatz")
        .unwrap()
        .args([
            "extract",
            path.to_str().unwrap(),
            "--format",
            "checking",
            "--account",
            "Assets:EU:Comdirect:Checking",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2024-03-02 balance Assets:EU:Comdirect:Checking  1234.56 EUR",
        ))
        .stdout(predicate::str::contains("2024-03-01 * \"Jane Doe\" \"Miete\""))
        .stdout(predicate::str::contains(
            "Assets:EU:Comdirect:Checking  -650.00 EUR",
        ));
}

#[test]
fn extract_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_statement(dir.path(), &checking_statement());
    Command::cargo_bin("umsatz")
        .unwrap()
        .args([
            "extract",
            path.to_str().unwrap(),
            "--format",
            "checking",
            "--account",
            "Assets:EU:Comdirect:Checking",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"balance\""))
        .stdout(predicate::str::contains("\"payee\": \"Jane Doe\""));
}

#[test]
fn extract_with_rules_appends_counter_posting() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_statement(dir.path(), &checking_statement());
    let rules = dir.path().join("rules.json");
    std::fs::write(&rules, r#"{"Jane Doe": "Expenses:Rent"}"#).unwrap();
    Command::cargo_bin("umsatz")
        .unwrap()
        .args([
            "extract",
            path.to_str().unwrap(),
            "--format",
            "checking",
            "--account",
            "Assets:EU:Comdirect:Checking",
            "--rules",
            rules.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses:Rent  650.00 EUR"));
}

#[test]
fn extract_missing_file_reports_error() {
    Command::cargo_bin("umsatz")
        .unwrap()
        .args([
            "extract",
            "/nonexistent/umsatz.csv",
            "--format",
            "checking",
            "--account",
            "Assets:EU:Comdirect:Checking",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn preview_summarizes_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_statement(dir.path(), &checking_statement());
    Command::cargo_bin("umsatz")
        .unwrap()
        .args([
            "preview",
            path.to_str().unwrap(),
            "--format",
            "checking",
            "--account",
            "Assets:EU:Comdirect:Checking",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("1 transactions, 1 balance assertions"));
}
