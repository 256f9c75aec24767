//! CLI end-to-end tests for `interp`: help/version output, running a
//! program against stdin, and the exit codes/diagnostics §6 and §7 specify.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn interp() -> Command {
    Command::cargo_bin("interp").expect("interp binary should build")
}

#[test]
fn help_output() {
    interp().arg("--help").assert().success().stdout(predicate::str::contains("interp"));
}

#[test]
fn version_output() {
    interp().arg("--version").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn runs_hello_world_to_stdout() {
    interp().arg(fixture("hello.eap")).assert().success().stdout("Γεια\n");
}

#[test]
fn missing_file_is_a_failure_with_exit_code_one() {
    interp().arg(fixture("does_not_exist.eap")).assert().code(1).stderr(predicate::str::contains("could not read"));
}

#[test]
fn array_out_of_bounds_is_a_runtime_error_with_exit_code_one() {
    interp()
        .arg(fixture("array_bounds.eap"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Runtime Error").and(predicate::str::contains("dimension 1")));
}

#[test]
fn read_consumes_one_line_per_variable_from_stdin() {
    interp().arg(fixture("read_loop.eap")).write_stdin("\nabc\n5\n").assert().success().stdout("5");
}

#[test]
fn debug_flag_emits_tagged_debug_lines_on_stderr() {
    interp()
        .arg(fixture("hello.eap"))
        .arg("--debug")
        .assert()
        .success()
        .stdout("Γεια\n")
        .stderr(predicate::str::contains("[DEBUG]"));
}
