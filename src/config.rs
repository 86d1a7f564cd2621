/// Environment variable holding the default organization.
pub const ORG_ENV_VAR: &str = "GITHUB_ORG";

/// Where a configuration value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    EnvVar(&'static str),
    CliFlag(&'static str),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::EnvVar(name) => write!(f, "env var ({})", name),
            Source::CliFlag(name) => write!(f, "CLI flag ({})", name),
        }
    }
}

/// A configuration value together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: Source,
}

/// Process-wide settings read once at startup.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub default_org: Option<String>,
}

impl Environment {
    /// Read settings from the current process environment.
    pub fn from_process() -> Self {
        Self {
            default_org: std::env::var(ORG_ENV_VAR).ok(),
        }
    }

    #[cfg(test)]
    pub fn with_default_org(org: impl Into<String>) -> Self {
        Self {
            default_org: Some(org.into()),
        }
    }

    /// Resolve the organization: an explicit `--org=` flag wins over the
    /// environment, even when its value is empty.
    pub fn resolve_org(&self, flag: Option<&str>) -> Option<Resolved<String>> {
        let resolved = match flag {
            Some(value) => Resolved {
                value: value.to_string(),
                source: Source::CliFlag("--org"),
            },
            None => Resolved {
                value: self.default_org.clone()?,
                source: Source::EnvVar(ORG_ENV_VAR),
            },
        };
        tracing::debug!(org = %resolved.value, source = %resolved.source, "resolved organization");
        Some(resolved)
    }
}
