use miette::Diagnostic;
use thiserror::Error;

/// Exit status when a required external tool is missing.
pub const EXIT_MISSING_TOOL: i32 = 127;

#[derive(Error, Diagnostic, Debug)]
pub enum OrgctlError {
    #[error("{}invalid option: {option}", scope(.command))]
    #[diagnostic(code(orgctl::invalid_option))]
    InvalidOption {
        command: Option<&'static str>,
        option: String,
    },

    #[error("invalid command: {0}")]
    #[diagnostic(code(orgctl::invalid_command))]
    InvalidCommand(String),

    #[error("{command}: must specify --org")]
    #[diagnostic(code(orgctl::missing_org), help("pass --org=ORG or set GITHUB_ORG"))]
    MissingOrg { command: &'static str },

    #[error("{command}: usage: {synopsis}")]
    #[diagnostic(code(orgctl::usage))]
    Usage {
        command: &'static str,
        synopsis: String,
    },

    #[error("command not found: {0}")]
    #[diagnostic(code(orgctl::help_not_found))]
    HelpNotFound(String),

    #[error("required tool `{tool}` is not installed")]
    #[diagnostic(code(orgctl::missing_tool))]
    MissingTool {
        tool: &'static str,
        #[help]
        hint: String,
    },

    /// `output` is what the tool wrote to stdout before failing.
    #[error("`{tool}` exited with status {status}")]
    #[diagnostic(code(orgctl::upstream))]
    Upstream {
        tool: &'static str,
        status: i32,
        output: Vec<u8>,
    },

    #[error("{command}: unexpected response: {message}")]
    #[diagnostic(code(orgctl::response))]
    Response {
        command: &'static str,
        message: String,
    },

    #[error(transparent)]
    #[diagnostic(code(orgctl::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(orgctl::json))]
    Json(#[from] serde_json::Error),
}

impl OrgctlError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            OrgctlError::MissingTool { .. } => EXIT_MISSING_TOOL,
            OrgctlError::Upstream { status, .. } => *status,
            _ => 1,
        }
    }

    /// Upstream failures have already been reported by the child process.
    pub fn is_reported(&self) -> bool {
        matches!(self, OrgctlError::Upstream { .. })
    }
}

fn scope(command: &Option<&'static str>) -> String {
    command.map(|c| format!("{c}: ")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, OrgctlError>;
