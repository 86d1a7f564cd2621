use crate::support::orgctl;
use predicates::prelude::*;

fn no_tools() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn version_prints_name_and_repository() {
    let dir = no_tools();
    for flag in ["-V", "--version", "version"] {
        orgctl(dir.path())
            .arg(flag)
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with(format!(
                "gh-orgctl v{}\nhttps://",
                env!("CARGO_PKG_VERSION")
            )));
    }
}

#[test]
fn no_arguments_prints_overview() {
    orgctl(no_tools().path())
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("Usage: gh-orgctl <command>"))
        .stdout(predicate::str::contains("team-add-to-repo"));
}

#[test]
fn piped_help_is_not_styled() {
    orgctl(no_tools().path())
        .args(["help", "repo-list"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\nOPTIONS\n"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn help_for_unknown_command() {
    orgctl(no_tools().path())
        .args(["--help", "repo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("command not found: repo"));
}

#[test]
fn command_usage_only() {
    orgctl(no_tools().path())
        .args(["team-get-id", "-h"])
        .assert()
        .code(0)
        .stdout("Usage: gh-orgctl team-get-id [--org=ORG] TEAM\n");
}

#[test]
fn invalid_command() {
    orgctl(no_tools().path())
        .arg("repos")
        .assert()
        .code(1)
        .stdout("")
        .stderr("gh-orgctl: invalid command: repos\n");
}

#[test]
fn invalid_top_level_option() {
    orgctl(no_tools().path())
        .arg("--org=acme")
        .assert()
        .code(1)
        .stderr("gh-orgctl: invalid option: --org=acme\n");
}

#[test]
fn invalid_command_option() {
    orgctl(no_tools().path())
        .args(["team-list", "--org=acme", "--verbose"])
        .assert()
        .code(1)
        .stderr("gh-orgctl: team-list: invalid option: --verbose\n");
}

#[test]
fn missing_org() {
    orgctl(no_tools().path())
        .arg("repo-list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("repo-list: must specify --org"));
}

#[test]
fn wrong_positional_count() {
    orgctl(no_tools().path())
        .args(["team-add-to-repo", "--org=acme", "core"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "team-add-to-repo: usage: gh-orgctl team-add-to-repo",
        ));
}
