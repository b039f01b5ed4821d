//! Integration tests for `list` and `search`

use modmanager::test_utils::{CatalogFixture, TestEnvironment};
use predicates::prelude::*;

use crate::{modmanager, stdout_lines};

fn sorted(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    items
}

#[test]
fn test_list_shows_every_entry() {
    let env = TestEnvironment::with_catalog(["Foo", "bar", "fortune"]).unwrap();

    let output = modmanager(&env).arg("list").output().unwrap();
    assert!(output.status.success());
    assert_eq!(sorted(stdout_lines(&output)), vec!["Foo", "bar", "fortune"]);
}

#[test]
fn test_list_includes_plain_files() {
    let env = TestEnvironment::new().unwrap();
    CatalogFixture::new(["Foo"]).with_file("notes.txt").write_to(&env.mods_dir).unwrap();

    let output = modmanager(&env).args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(sorted(names), vec!["Foo", "notes.txt"]);
}

#[test]
fn test_list_empty_catalog() {
    let env = TestEnvironment::new().unwrap();

    modmanager(&env)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("is empty"));
}

#[test]
fn test_search_substring_case_insensitive() {
    let env = TestEnvironment::with_catalog(["Foo", "bar", "fortune"]).unwrap();

    let output = modmanager(&env).args(["search", "FO"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(sorted(stdout_lines(&output)), vec!["Foo", "fortune"]);
}

#[test]
fn test_search_wildcard_matches_list() {
    let env = TestEnvironment::with_catalog(["Foo", "bar", "fortune"]).unwrap();

    let listed = modmanager(&env).arg("list").output().unwrap();
    let searched = modmanager(&env).args(["search", "*"]).output().unwrap();

    assert_eq!(stdout_lines(&listed), stdout_lines(&searched));
}

#[test]
fn test_search_regex_anchors() {
    let env = TestEnvironment::with_catalog(["fortune", "misfortune"]).unwrap();

    let output = modmanager(&env).args(["search", "^fort"]).output().unwrap();
    assert_eq!(stdout_lines(&output), vec!["fortune"]);
}

#[test]
fn test_search_no_match() {
    let env = TestEnvironment::with_catalog(["Foo", "bar"]).unwrap();

    modmanager(&env)
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No mods match 'zzz'"));

    modmanager(&env)
        .args(["search", "zzz", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_search_literal() {
    let env = TestEnvironment::with_catalog(["C++ Tools", "ctools"]).unwrap();

    let output = modmanager(&env).args(["search", "--literal", "c++"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["C++ Tools"]);
}
