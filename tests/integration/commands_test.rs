use crate::support::FakeGh;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn repo_list_plain() {
    let gh = FakeGh::install();
    gh.command(r#"[{"name":"alpha"},{"name":"beta"}]"#)
        .args(["repo-list", "--org=acme"])
        .assert()
        .code(0)
        .stdout("name\nalpha\nbeta\n\n");
    assert_eq!(
        gh.last_args(),
        vec!["api", "--method", "GET", "orgs/acme/repos", "--paginate"]
    );
}

#[test]
fn team_list_tsv_and_plain() {
    let gh = FakeGh::install();
    let body = r#"[{"slug":"engineering","id":42}][{"slug":"ops","id":7}]"#;
    gh.command(body)
        .args(["team-list", "--org=acme", "--format=tsv"])
        .assert()
        .code(0)
        .stdout("slug\tid\nengineering\t42\nops\t7\n\n");
    gh.command(body)
        .args(["team-list", "--org=acme"])
        .assert()
        .code(0)
        .stdout("slug         id\nengineering  42\nops          7\n\n");
}

#[test]
fn team_list_json() {
    let gh = FakeGh::install();
    let output = gh
        .command(r#"[{"slug":"engineering","id":42}]"#)
        .args(["team-list", "--org=acme", "--format=json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "slug": "engineering", "id": "42" }])
    );
}

#[test]
fn team_get_id() {
    let gh = FakeGh::install();
    gh.command(r#"{"id":42,"slug":"engineering"}"#)
        .args(["team-get-id", "--org=acme", "engineering"])
        .assert()
        .code(0)
        .stdout("42\n");
    assert_eq!(
        gh.last_args(),
        vec!["api", "--method", "GET", "orgs/acme/teams/engineering"]
    );
}

#[test]
fn user_invite_sends_email_and_role() {
    let gh = FakeGh::install();
    gh.command(r#"{"id":1,"email":"newhire@example.com"}"#)
        .args(["user-invite", "--org=acme", "newhire@example.com", "--role=admin"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("newhire@example.com"));
    assert_eq!(
        gh.last_args(),
        vec![
            "api",
            "--method",
            "POST",
            "orgs/acme/invitations",
            "-f",
            "email=newhire@example.com",
            "-f",
            "role=admin",
        ]
    );
}

#[test]
fn team_add_to_repo_puts_permission() {
    let gh = FakeGh::install();
    gh.command("")
        .args(["team-add-to-repo", "--org=acme", "core", "api"])
        .assert()
        .code(0)
        .stdout("");
    assert_eq!(
        gh.last_args(),
        vec![
            "api",
            "--method",
            "PUT",
            "orgs/acme/teams/core/repos/acme/api",
            "-f",
            "permission=push",
        ]
    );
}

#[test]
fn user_get_passes_json_through() {
    let gh = FakeGh::install();
    gh.command(r#"{"login":"octocat"}"#)
        .args(["user-get", "--org=acme", "octocat"])
        .assert()
        .code(0)
        .stdout("{\"login\":\"octocat\"}\n");
}

#[test]
fn user_remove_deletes_membership() {
    let gh = FakeGh::install();
    gh.command("")
        .args(["user-remove", "--org=acme", "octocat"])
        .assert()
        .code(0);
    assert_eq!(
        gh.last_args(),
        vec!["api", "--method", "DELETE", "orgs/acme/memberships/octocat"]
    );
}
