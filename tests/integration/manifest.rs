//! Integration tests for `init` and `info`

use modmanager::test_utils::{ManifestFixture, TestEnvironment};
use predicates::prelude::*;

use crate::modmanager;

#[test]
fn test_init_creates_empty_manifest() {
    let env = TestEnvironment::new().unwrap();

    modmanager(&env)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    let content = env.read_project_file("modmanager.json").unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value, serde_json::json!({ "installed": [] }));
}

#[test]
fn test_init_twice_keeps_manifest() {
    let env = TestEnvironment::new().unwrap().with_manifest(&ManifestFixture::with_installed()).unwrap();
    let before = env.read_project_file("modmanager.json").unwrap();

    modmanager(&env)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(env.read_project_file("modmanager.json").unwrap(), before);
}

#[test]
fn test_init_with_path() {
    let env = TestEnvironment::new().unwrap();
    let target = env.temp_dir.path().join("elsewhere").join("game");

    modmanager(&env).arg("init").arg("--path").arg(&target).assert().success();

    assert!(target.join("modmanager.json").is_file());
    assert!(!env.project_dir.join("modmanager.json").exists());
}

#[test]
fn test_init_quiet_prints_nothing() {
    let env = TestEnvironment::new().unwrap();

    modmanager(&env).args(["--quiet", "init"]).assert().success().stdout(predicate::str::is_empty());

    assert!(env.project_dir.join("modmanager.json").exists());
}

#[test]
fn test_info_lists_installed_mods() {
    let env = TestEnvironment::new().unwrap().with_manifest(&ManifestFixture::with_installed()).unwrap();

    modmanager(&env)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed mods (2)"))
        .stdout(predicate::str::contains("foo"))
        .stdout(predicate::str::contains("bar"));
}

#[test]
fn test_info_json() {
    let env = TestEnvironment::new().unwrap().with_manifest(&ManifestFixture::with_installed()).unwrap();

    let output = modmanager(&env).args(["info", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "installed": ["foo", "bar"] }));
}

#[test]
fn test_info_without_manifest_is_not_an_error() {
    let env = TestEnvironment::new().unwrap();

    modmanager(&env)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("No usable modmanager.json"))
        .stdout(predicate::str::contains("modmanager init"));

    modmanager(&env)
        .args(["info", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn test_info_with_corrupt_manifest_degrades() {
    for fixture in [ManifestFixture::invalid(), ManifestFixture::raw("null")] {
        let env = TestEnvironment::new().unwrap().with_manifest(&fixture).unwrap();

        modmanager(&env)
            .arg("info")
            .assert()
            .success()
            .stdout(predicate::str::contains("No usable modmanager.json"));
    }
}

#[test]
fn test_info_after_init() {
    let env = TestEnvironment::new().unwrap();

    modmanager(&env).arg("init").assert().success();
    modmanager(&env)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("No mods installed"));
}

#[test]
fn test_info_shows_manifest_of_any_shape() {
    let fixture = ManifestFixture::raw(r#"{"installed": null, "game": "skyrim"}"#);
    let env = TestEnvironment::new().unwrap().with_manifest(&fixture).unwrap();

    modmanager(&env)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("No mods installed"));

    let output = modmanager(&env).args(["info", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "installed": null, "game": "skyrim" }));
}
