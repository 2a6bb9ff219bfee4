use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn bin() -> Command {
    Command::cargo_bin("ploc").expect("binary built")
}

fn fixture() -> assert_fs::TempDir {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("src/main.c")
        .write_str("// a comment\nint main() {\n    return 0;\n}\n\n")
        .expect("write main.c");
    tmp.child("README.md")
        .write_str("# Demo\n\nSome text.\n")
        .expect("write README.md");
    tmp
}

#[test]
fn summary_reports_expected_languages() {
    let tmp = fixture();
    bin()
        .arg("summary")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("c"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn detect_prints_one_language_per_path() {
    let tmp = fixture();
    bin()
        .arg("detect")
        .arg(tmp.child("src/main.c").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("c"));
}

#[test]
fn unknown_subcommand_exits_nonzero() {
    bin().arg("bogus-command").assert().failure();
}

#[test]
fn help_flag_succeeds() {
    bin().arg("--help").assert().success();
}

#[test]
fn no_subcommand_defaults_to_summary() {
    let tmp = fixture();
    bin().arg(tmp.path()).assert().success();
}
