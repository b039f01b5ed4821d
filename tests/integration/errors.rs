//! Integration tests for error reporting

use modmanager::constants::MODS_DIR_ENV;
use modmanager::test_utils::TestEnvironment;
use predicates::prelude::*;

use crate::modmanager;

#[test]
fn test_missing_catalog_reports_override() {
    let env = TestEnvironment::new().unwrap();
    let missing = env.temp_dir.path().join("no-mods-here");

    modmanager(&env)
        .env(MODS_DIR_ENV, &missing)
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Mod catalog directory not found"))
        .stderr(predicate::str::contains(MODS_DIR_ENV));
}

#[test]
fn test_invalid_search_pattern() {
    let env = TestEnvironment::with_catalog(["Foo"]).unwrap();

    modmanager(&env)
        .args(["search", "(unclosed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid search pattern"))
        .stderr(predicate::str::contains("--literal"));

    // The same query is fine as plain text
    modmanager(&env).args(["search", "--literal", "(unclosed"]).assert().success();
}

#[test]
fn test_unknown_subcommand() {
    let env = TestEnvironment::new().unwrap();

    modmanager(&env).arg("install").assert().failure();
}

#[test]
fn test_verbose_logs_to_stderr() {
    let env = TestEnvironment::new().unwrap();

    modmanager(&env)
        .args(["--verbose", "init"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created manifest"));
}

#[test]
fn test_quiet_suppresses_logs() {
    let env = TestEnvironment::new().unwrap();

    modmanager(&env).args(["--quiet", "init"]).assert().success().stderr(predicate::str::is_empty());
}
