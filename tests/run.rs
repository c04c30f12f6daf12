//! End-to-end tests driving the built binary against a stub simulator.
//!
//! The stub is a shell script that prints the labeled address lines the
//! real tool would, so the full pipeline (parse, substitute, spawn,
//! extract, bind, persist) is exercised without a ledger simulator.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const STUB_TOOL: &str = r#"#!/bin/sh
case "$1" in
  new-account)
    echo "A new account has been created!"
    echo "Account component address: 02a1b2c3"
    echo "Public key: 04d5e6f7"
    ;;
  publish)
    echo "Success! New Package: 01beef00"
    ;;
  show)
    echo "Component: $2"
    ;;
  fail)
    echo "simulator exploded" >&2
    exit 1
    ;;
  *)
    echo "ok"
    ;;
esac
"#;

fn write_stub_tool(dir: &Path) -> PathBuf {
    let path = dir.join("resim-stub");
    fs::write(&path, STUB_TOOL).expect("write stub tool");
    let mut perms = fs::metadata(&path).expect("stat stub tool").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod stub tool");
    path
}

fn run_revup(dir: &Path, tool: &Path, directives: &str) -> Output {
    let input = dir.join("revup.rev");
    fs::write(&input, directives).expect("write directive file");
    Command::new(env!("CARGO_BIN_EXE_revup"))
        .args(["-f", "revup.rev", "-e", "out.env", "--tool"])
        .arg(tool)
        .current_dir(dir)
        .output()
        .expect("run revup")
}

#[test]
fn binds_addresses_and_persists_env_file() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let tool = write_stub_tool(temp.path());
    let directives = "\
// bootstrap a ledger
new-account -> acct key

show $acct -> seen
publish . -> pkg
fail hard -> nope
status -> too many names
";
    let output = run_revup(temp.path(), &tool, directives);
    assert!(output.status.success(), "revup failed: {output:?}");

    let env = fs::read_to_string(temp.path().join("out.env")).expect("read env file");
    // name-sorted map order; failed and mismatched directives bind nothing
    assert_eq!(
        env,
        "acct=02a1b2c3\nkey=04d5e6f7\npkg=01beef00\nseen=02a1b2c3\n"
    );
}

#[test]
fn comment_only_source_writes_empty_env_file() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let tool = write_stub_tool(temp.path());
    let output = run_revup(temp.path(), &tool, "// nothing\n\n\\\\ still nothing\n");
    assert!(output.status.success(), "revup failed: {output:?}");

    let env = fs::read_to_string(temp.path().join("out.env")).expect("read env file");
    assert!(env.is_empty());
}

#[test]
fn manifest_run_materializes_template() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let tool = write_stub_tool(temp.path());
    fs::write(
        temp.path().join("transfer.rtm"),
        "CALL_METHOD $acct \"withdraw\";\nTAKE $key $acct;\n",
    )
    .expect("write manifest template");

    let directives = "new-account -> acct key\nrun transfer.rtm\n";
    let output = run_revup(temp.path(), &tool, directives);
    assert!(output.status.success(), "revup failed: {output:?}");

    let materialized =
        fs::read_to_string(temp.path().join("transfer.rtm.dat")).expect("read materialized");
    assert_eq!(
        materialized,
        "CALL_METHOD 02a1b2c3 \"withdraw\";\nTAKE 04d5e6f7 02a1b2c3;\n"
    );
    // the template itself is untouched
    let template = fs::read_to_string(temp.path().join("transfer.rtm")).expect("read template");
    assert!(template.contains("$acct"));
}

#[test]
fn generate_writes_starter_file_once() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let run = |extra: &[&str]| {
        Command::new(env!("CARGO_BIN_EXE_revup"))
            .args(["--generate", "-f", "starter.rev"])
            .args(extra)
            .current_dir(temp.path())
            .output()
            .expect("run revup --generate")
    };

    let first = run(&[]);
    assert!(first.status.success(), "generate failed: {first:?}");
    let content =
        fs::read_to_string(temp.path().join("starter.rev")).expect("read starter file");
    assert!(content.contains("new-account -> account pubkey"));

    let second = run(&[]);
    assert!(!second.status.success(), "second generate should refuse");
}

#[test]
fn missing_tool_fails_preflight() {
    let temp = tempfile::tempdir().expect("create temp dir");
    fs::write(temp.path().join("revup.rev"), "reset\n").expect("write directive file");
    let output = Command::new(env!("CARGO_BIN_EXE_revup"))
        .args(["-f", "revup.rev", "--tool", "revup-no-such-tool"])
        .current_dir(temp.path())
        .output()
        .expect("run revup");
    assert!(!output.status.success());
}
