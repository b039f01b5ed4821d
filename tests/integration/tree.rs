//! Integration tests for `tree`

use modmanager::test_utils::TestEnvironment;
use predicates::prelude::*;
use std::fs;

use crate::{modmanager, stdout_lines};

#[test]
fn test_tree_lists_nested_paths_after_parent() {
    let env = TestEnvironment::new().unwrap();
    let root = env.temp_dir.path().join("walk");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join("sub").join("b.txt"), "b").unwrap();

    let output = modmanager(&env).arg("tree").arg(&root).output().unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    let expected = [root.join("a.txt"), root.join("sub"), root.join("sub").join("b.txt")]
        .map(|p| p.display().to_string());

    assert_eq!(lines.len(), 3);
    for path in &expected {
        assert!(lines.contains(path), "missing {path} in {lines:?}");
    }

    let position = |p: &str| lines.iter().position(|l| l == p).unwrap();
    assert!(position(&expected[1]) < position(&expected[2]));
}

#[test]
fn test_tree_json_paths_are_absolute() {
    let env = TestEnvironment::new().unwrap();
    fs::create_dir(env.project_dir.join("data")).unwrap();
    fs::write(env.project_dir.join("data").join("x.bin"), "").unwrap();

    // Relative to the project directory, which is the working directory
    let output = modmanager(&env).args(["tree", "data", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let paths: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(paths.len(), 1);
    assert!(std::path::Path::new(&paths[0]).is_absolute());
    assert!(paths[0].ends_with("x.bin"));
}

#[test]
fn test_tree_empty_directory() {
    let env = TestEnvironment::new().unwrap();

    modmanager(&env)
        .arg("tree")
        .arg(&env.mods_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("is empty"));
}

#[test]
fn test_tree_missing_directory_fails_without_output() {
    let env = TestEnvironment::new().unwrap();

    modmanager(&env)
        .args(["tree", "does-not-exist"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("listing directory"));
}
