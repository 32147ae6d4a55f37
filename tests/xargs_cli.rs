//! xargs 端到端测试

use assert_cmd::Command;
use predicates::prelude::*;

fn xargs() -> Command {
    let mut cmd = Command::cargo_bin("bashutils").unwrap();
    cmd.arg("xargs");
    cmd
}

#[test]
fn default_command_echoes_in_batches() {
    xargs()
        .args(["-n", "2"])
        .write_stdin("1 2 3")
        .assert()
        .success()
        .stdout("1 2\n3\n");
}

#[test]
fn default_command_single_batch() {
    xargs()
        .write_stdin("a\n  b\t\nc\n")
        .assert()
        .success()
        .stdout("a b c\n");
}

#[cfg(unix)]
#[test]
fn empty_input_runs_command_once() {
    xargs()
        .args(["printf", "done"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("done");
}

#[cfg(unix)]
#[test]
fn empty_input_with_no_run_if_empty() {
    xargs()
        .args(["-r", "printf", "done"])
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn placeholder_one_invocation_per_item() {
    xargs()
        .args(["-I", "{}", "bashutils", "echo", "item-{}"])
        .write_stdin("x y")
        .assert()
        .success()
        .stdout("item-x\nitem-y\n");
}

#[test]
fn null_delimited_items() {
    xargs()
        .args(["-0", "-n", "1"])
        .write_stdin("my file\0other\0")
        .assert()
        .success()
        .stdout("my file\nother\n");
}

#[test]
fn verbose_traces_to_stderr() {
    xargs()
        .env("BASHUTILS_COLOR", "never")
        .arg("-t")
        .write_stdin("hi")
        .assert()
        .success()
        .stdout("hi\n")
        .stderr(predicate::str::contains("bashutils echo hi"));
}

#[cfg(unix)]
#[test]
fn child_exit_code_propagates_and_stops() {
    xargs()
        .args(["-n", "1", "sh", "-c", "echo $0; exit 3"])
        .write_stdin("a b c")
        .assert()
        .code(3)
        .stdout("a\n");
}

#[test]
fn missing_program_exits_127() {
    xargs()
        .arg("bashutils-no-such-program-xyz")
        .write_stdin("a")
        .assert()
        .code(127)
        .stderr(predicate::str::contains("bashutils-no-such-program-xyz"));
}

#[test]
fn missing_program_stops_after_first_batch() {
    xargs()
        .args(["-n", "1", "bashutils-no-such-program-xyz"])
        .write_stdin("a b")
        .assert()
        .code(127)
        .stderr(predicate::str::contains("bashutils-no-such-program-xyz a"))
        .stderr(predicate::str::contains("bashutils-no-such-program-xyz b").not());
}

#[test]
fn leading_end_of_options_passes_flags_to_command() {
    xargs()
        .args(["--", "-n"])
        .write_stdin("x")
        .assert()
        .code(127)
        .stderr(predicate::str::contains("-n: cannot run"));

    xargs()
        .args(["--", "-t", "echo"])
        .write_stdin("x")
        .assert()
        .code(127)
        .stdout("")
        .stderr(predicate::str::contains("-t: cannot run '-t echo x'"));
}

#[test]
fn invalid_max_args_is_usage_error() {
    xargs()
        .args(["-n", "many", "echo"])
        .write_stdin("a")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid number"));
}

#[test]
fn help_lists_options() {
    xargs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-args"));
}
