//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("farmboard").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("farmboard").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--skip-migrations"))
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("farmboard").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("farmboard").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_migrate_without_database_config_fails() {
    let mut cmd = Command::cargo_bin("farmboard").unwrap();
    cmd.arg("migrate")
        .env_remove("DATABASE_URL")
        .env_remove("DB_HOST")
        .env_remove("DB_NAME")
        .env_remove("DB_USER")
        .env_remove("DB_PASSWORD")
        .current_dir(std::env::temp_dir());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("database not configured"));
}
