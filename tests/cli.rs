use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Run the binary inside an empty directory so no stray config is picked up.
fn casefmt(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("casefmt").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .arg("--no-color");
    cmd
}

#[test]
fn test_positional_inputs() {
    let home = TempDir::new().unwrap();
    casefmt(&home)
        .args(["-c", "camel", "first name", "First-Name", "user 123_name"])
        .assert()
        .success()
        .stdout("firstName\nfirstName\nuser123Name\n");
}

#[test]
fn test_default_case_is_kebab() {
    let home = TempDir::new().unwrap();
    casefmt(&home)
        .arg("Hello World! ThisIsCamelCase--test")
        .assert()
        .success()
        .stdout("hello-world-this-is-camel-case-test\n");
}

#[test]
fn test_kebab_turns_punctuation_into_hyphens() {
    let home = TempDir::new().unwrap();
    casefmt(&home)
        .args(["user@example.com", "foo.bar"])
        .assert()
        .success()
        .stdout("user-example-com\nfoo-bar\n");

    casefmt(&home)
        .args(["-p", "strip", "user@example.com"])
        .assert()
        .success()
        .stdout("userexamplecom\n");
}

#[test]
fn test_camel_leading_separator() {
    let home = TempDir::new().unwrap();
    casefmt(&home)
        .args(["-c", "camel", "--", "-foo bar"])
        .assert()
        .success()
        .stdout("FooBar\n");
}

#[test]
fn test_stdin_lines() {
    let home = TempDir::new().unwrap();
    casefmt(&home)
        .args(["--case", "dot"])
        .write_stdin("user 123_name\nalreadyCamelCase\n\n")
        .assert()
        .success()
        .stdout("user.123.name\nalready.camel.case\n\n");
}

#[test]
fn test_punctuation_flag() {
    let home = TempDir::new().unwrap();
    casefmt(&home)
        .args(["-c", "dot", "-p", "split", "file.name"])
        .assert()
        .success()
        .stdout("file.name\n");
}

#[test]
fn test_json_input_rejects_non_strings() {
    let home = TempDir::new().unwrap();
    casefmt(&home)
        .args(["-c", "camel", "--json"])
        .write_stdin(r#"["user_id", 42, null] "user-id""#)
        .assert()
        .code(1)
        .stdout("userId\nuserId\n")
        .stderr(predicate::str::contains(
            "error: input 2: Input must be a non-null string",
        ))
        .stderr(predicate::str::contains(
            "error: input 3: Input must be a non-null string",
        ))
        .stderr(predicate::str::contains("2 of 4 inputs rejected"));
}

#[test]
fn test_no_fail() {
    let home = TempDir::new().unwrap();
    casefmt(&home)
        .args(["--json", "--no-fail"])
        .write_stdin("{}")
        .assert()
        .success();
}

#[test]
fn test_json_output() {
    let home = TempDir::new().unwrap();
    let assert = casefmt(&home)
        .args(["-c", "kebab", "--json", "-o", "json"])
        .write_stdin(r#"["fooBar", true]"#)
        .assert()
        .code(1);

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let rendered: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        rendered,
        serde_json::json!([
            { "input": "fooBar", "output": "foo-bar" },
            { "input": true, "error": "Input must be a non-null string" }
        ])
    );
}

#[test]
fn test_local_config_file() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".casefmt.toml"), "case = \"camel\"\n").unwrap();

    casefmt(&home)
        .arg("first_name")
        .assert()
        .success()
        .stdout("firstName\n");

    casefmt(&home)
        .args(["-c", "dot", "first_name"])
        .assert()
        .success()
        .stdout("first.name\n");
}

#[test]
fn test_explicit_config_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    fs::write(&path, "case = \"dot\"\npunctuation = \"split\"\n").unwrap();

    casefmt(&home)
        .arg("--config")
        .arg(&path)
        .arg("a@b")
        .assert()
        .success()
        .stdout("a.b\n");
}

#[test]
fn test_bad_config_file() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".casefmt.toml"), "case = \"snake\"\n").unwrap();

    casefmt(&home)
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_unknown_case() {
    let home = TempDir::new().unwrap();
    casefmt(&home)
        .args(["-c", "snake", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown case: snake"));
}

#[test]
fn test_completion() {
    let home = TempDir::new().unwrap();
    casefmt(&home)
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("casefmt"));
}
