use assert_cmd::Command;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stand-in for `gh`: records its arguments, prints `FAKE_GH_RESPONSE`
/// and exits with `FAKE_GH_STATUS`. Uses shell builtins only, so `PATH`
/// can point at the temp dir alone.
const FAKE_GH: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$FAKE_GH_LOG"
if [ -n "$FAKE_GH_STDERR" ]; then
    printf '%s\n' "$FAKE_GH_STDERR" >&2
fi
printf '%s' "$FAKE_GH_RESPONSE"
exit "${FAKE_GH_STATUS:-0}"
"#;

pub struct FakeGh {
    dir: TempDir,
}

impl FakeGh {
    pub fn install() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("gh");
        std::fs::write(&script, FAKE_GH).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir }
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("args.log")
    }

    /// The binary with only the fake `gh` on `PATH`, answering `response`.
    pub fn command(&self, response: &str) -> Command {
        let mut cmd = orgctl(self.dir.path());
        cmd.env("FAKE_GH_LOG", self.log_path())
            .env("FAKE_GH_RESPONSE", response);
        cmd
    }

    /// Arguments of the last `gh` invocation, one per element.
    pub fn last_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    pub fn was_called(&self) -> bool {
        self.log_path().exists()
    }
}

/// The binary with `path` as its whole `PATH` and no default organization.
pub fn orgctl(path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gh-orgctl").unwrap();
    cmd.env("PATH", path).env_remove("GITHUB_ORG").env_remove("RUST_LOG");
    cmd
}
