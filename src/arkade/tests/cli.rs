use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn arkade() -> Command {
    Command::cargo_bin("arkade").unwrap()
}

#[test]
fn firecracker_help() {
    arkade()
        .args(["system", "install", "firecracker", "--help"])
        .assert()
        .success()
        .stdout(contains("Install Firecracker and its Jailer."))
        .stdout(contains("ARKADE_FIRECRACKER_").not())
        .stdout(contains("--version"))
        .stdout(contains("--path"))
        .stdout(contains("--progress"))
        .stdout(contains("arkade system install firecracker --version v1.0.0"));
}

#[test]
fn install_lists_firecracker() {
    arkade()
        .args(["system", "install", "--help"])
        .assert()
        .success()
        .stdout(contains("firecracker"))
        .stdout(contains("Install Firecracker"));
}

#[test]
fn version_flag_requires_value() {
    arkade()
        .args(["system", "install", "firecracker", "--version"])
        .assert()
        .failure()
        .stderr(contains("a value is required"));
}

#[test]
fn progress_rejects_non_bool() {
    arkade()
        .args(["system", "install", "firecracker", "--progress=sometimes"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn unknown_app_fails() {
    arkade()
        .args(["system", "install", "qemu"])
        .assert()
        .failure();
}

#[test]
fn prints_version() {
    arkade()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}
