use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csv2ucode"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csv2ucode"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn lc3_table() -> String {
    let mut src = String::from("state,a,b\n");
    for r in 0..64 {
        src.push_str(&format!("S{r},1, ,x"));
        src.push_str(&",1".repeat(46));
        src.push('\n');
    }
    src
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).into_owned()
}

#[test]
fn no_arguments_prints_usage() {
    let o = run(&[]);
    assert_eq!(o.status.code(), Some(1));
    assert_eq!(stdout(&o), "csv2ucode <csv path> <ucode output path>\n");
}

#[test]
fn one_argument_prints_usage() {
    let o = run(&["table.csv"]);
    assert_eq!(o.status.code(), Some(1));
    assert_eq!(stdout(&o), "csv2ucode <csv path> <ucode output path>\n");
}

#[test]
fn same_paths_exit_2() {
    let o = run(&["table.csv", "table.csv"]);
    assert_eq!(o.status.code(), Some(2));
    assert_eq!(stdout(&o), "input and output paths are the same\n");
}

#[test]
fn converts_and_ignores_extra_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("t.csv");
    let out = dir.path().join("t.ucode");

    std::fs::write(&csv, lc3_table()).unwrap();

    let o = run(&[csv.to_str().unwrap(), out.to_str().unwrap(), "ignored"]);
    assert_eq!(o.status.code(), Some(0));
    assert_eq!(stdout(&o), "");

    let text = std::fs::read_to_string(&out).unwrap();
    let expected = format!("10x{}\n", "1".repeat(46)).repeat(64);
    assert_eq!(text, expected);
}

#[test]
fn paths_may_start_with_a_hyphen() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("-table.csv"), lc3_table()).unwrap();

    let o = run_in(dir.path(), &["-table.csv", "-out.ucode"]);
    assert_eq!(o.status.code(), Some(0));
    assert_eq!(stdout(&o), "");

    let text = std::fs::read_to_string(dir.path().join("-out.ucode")).unwrap();
    assert_eq!(text.lines().count(), 64);
}

#[test]
fn missing_input_fails_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("absent.csv");
    let out = dir.path().join("absent.ucode");

    let o = run(&[csv.to_str().unwrap(), out.to_str().unwrap()]);
    assert_eq!(o.status.code(), Some(1));
    assert_eq!(stdout(&o), "");
    assert!(String::from_utf8_lossy(&o.stderr).contains("cannot read"));
    assert!(!out.exists());
}
