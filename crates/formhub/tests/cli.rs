// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the `formhub` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn formhub() -> Command {
    let mut cmd = Command::cargo_bin("formhub").expect("binary should build");
    // Keep the run hermetic: no env overrides, no color escapes in output.
    cmd.env_remove("RUST_LOG");
    cmd.env("FORMHUB_OUTPUT_COLOR", "false");
    cmd
}

#[test]
fn show_prints_a_known_project() {
    formhub()
        .args(["addons", "show", "captcha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CAPTCHA"))
        .stdout(predicate::str::contains("spam"))
        .stdout(predicate::str::contains("recommended"));
}

#[test]
fn show_unknown_project_fails_with_not_found() {
    formhub()
        .args(["addons", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("add-on project not found: nope"));
}

#[test]
fn list_restricts_to_a_category() {
    formhub()
        .args(["addons", "list", "--category", "spam"])
        .assert()
        .success()
        .stdout(predicate::str::contains("antibot"))
        .stdout(predicate::str::contains("honeypot"))
        .stdout(predicate::str::contains("cleantalk"))
        .stdout(predicate::str::contains("5 project(s)"))
        .stdout(predicate::str::contains("address").not());
}

#[test]
fn list_rejects_unknown_category() {
    formhub()
        .args(["addons", "list", "--category", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category `bogus`"));
}

#[test]
fn list_filters_third_party_settings() {
    formhub()
        .args(["addons", "list", "--third-party-settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("antibot"))
        .stdout(predicate::str::contains("honeypot"))
        .stdout(predicate::str::contains("2 project(s)"))
        .stdout(predicate::str::contains("captcha").not());
}

#[test]
fn list_searches_across_fields() {
    formhub()
        .args(["addons", "list", "--search", "postcode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("webform_craftyclicks"))
        .stdout(predicate::str::contains("1 project(s)"));
}

#[test]
fn list_json_emits_the_full_catalog() {
    let output = formhub()
        .args(["addons", "list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("output should be valid JSON");
    let entries = parsed.as_array().expect("output should be a JSON array");
    assert_eq!(entries.len(), 76);
    assert_eq!(entries[0]["name"], "drush_cmi_tools");
}

#[test]
fn categories_lists_the_fixed_set() {
    formhub()
        .args(["addons", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration management"))
        .stdout(predicate::str::contains("SPAM Protection"))
        .stdout(predicate::str::contains("development"));
}
