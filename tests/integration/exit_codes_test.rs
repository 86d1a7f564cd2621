use crate::support::{orgctl, FakeGh};
use predicates::prelude::*;

#[test]
fn exit_code_127_without_gh() {
    let empty = tempfile::tempdir().unwrap();
    orgctl(empty.path())
        .args(["repo-list", "--org=acme"])
        .assert()
        .code(127)
        .stderr(predicate::str::contains("`gh` is not installed"))
        .stderr(predicate::str::contains("https://cli.github.com"));
}

#[test]
fn gh_is_not_needed_for_validation_errors() {
    let empty = tempfile::tempdir().unwrap();
    orgctl(empty.path())
        .args(["team-repo-list", "--org=acme"])
        .assert()
        .code(1);
}

#[test]
fn upstream_failure_is_propagated_verbatim() {
    let gh = FakeGh::install();
    gh.command("")
        .env("FAKE_GH_STATUS", "4")
        .env("FAKE_GH_STDERR", "gh: Not Found (HTTP 404)")
        .args(["team-get-id", "--org=acme", "nope"])
        .assert()
        .code(4)
        .stdout("")
        .stderr("gh: Not Found (HTTP 404)\n");
}

#[test]
fn upstream_error_body_reaches_stdout() {
    let gh = FakeGh::install();
    gh.command(r#"{"message":"Not Found","status":"404"}"#)
        .env("FAKE_GH_STATUS", "1")
        .env("FAKE_GH_STDERR", "gh: Not Found (HTTP 404)")
        .args(["user-get", "--org=acme", "nobody"])
        .assert()
        .code(1)
        .stdout(r#"{"message":"Not Found","status":"404"}"#)
        .stderr("gh: Not Found (HTTP 404)\n");
}

#[test]
fn environment_supplies_default_org() {
    let gh = FakeGh::install();
    gh.command("[]")
        .env("GITHUB_ORG", "envorg")
        .arg("repo-list")
        .assert()
        .code(0);
    assert!(gh.last_args().contains(&"orgs/envorg/repos".to_string()));
}

#[test]
fn org_flag_overrides_environment() {
    let gh = FakeGh::install();
    gh.command("[]")
        .env("GITHUB_ORG", "envorg")
        .args(["repo-list", "--format=tsv", "--org=acme"])
        .assert()
        .code(0);
    assert!(gh.last_args().contains(&"orgs/acme/repos".to_string()));
}

#[test]
fn usage_error_does_not_call_gh() {
    let gh = FakeGh::install();
    gh.command("{}")
        .args(["team-add-to-repo", "--org=acme", "a", "b", "c"])
        .assert()
        .code(1);
    assert!(!gh.was_called());
}
