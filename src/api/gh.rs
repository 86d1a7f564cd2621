use crate::api::{ApiClient, ApiRequest, Field};
use crate::errors::{OrgctlError, Result};
use std::cell::OnceCell;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const GH: &str = "gh";
const INSTALL_HINT: &str = "install the GitHub CLI from https://cli.github.com and run `gh auth login`";

/// `ApiClient` backed by the authenticated `gh api` command.
///
/// The executable is looked up on `PATH` on first use, not at construction.
#[derive(Debug, Default)]
pub struct GhClient {
    program: OnceCell<PathBuf>,
}

impl GhClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn program(&self) -> Result<&PathBuf> {
        if let Some(path) = self.program.get() {
            return Ok(path);
        }
        let path = which::which(GH).map_err(|e| {
            tracing::debug!("{GH} lookup failed: {e}");
            OrgctlError::MissingTool {
                tool: GH,
                hint: INSTALL_HINT.to_string(),
            }
        })?;
        tracing::debug!(path = %path.display(), "found {GH}");
        Ok(self.program.get_or_init(|| path))
    }
}

impl ApiClient for GhClient {
    fn send(&self, request: &ApiRequest) -> Result<Vec<u8>> {
        let program = self.program()?;
        let args = build_args(request);
        tracing::debug!(?args, "running {GH}");

        let output = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()?;

        if !output.status.success() {
            let status = output.status.code().unwrap_or(1);
            tracing::debug!(status, "{GH} failed");
            return Err(OrgctlError::Upstream {
                tool: GH,
                status,
                output: output.stdout,
            });
        }

        Ok(output.stdout)
    }
}

/// Command-line arguments for `gh` that perform `request`.
pub fn build_args(request: &ApiRequest) -> Vec<String> {
    let mut args = vec![
        "api".to_string(),
        "--method".to_string(),
        request.method.as_str().to_string(),
        request.endpoint.clone(),
    ];
    if request.paginate {
        args.push("--paginate".to_string());
    }
    for field in &request.fields {
        let (flag, key, value) = match field {
            Field::Raw(k, v) => ("-f", k, v),
            Field::Typed(k, v) => ("-F", k, v),
        };
        args.push(flag.to_string());
        args.push(format!("{key}={value}"));
    }
    args
}
