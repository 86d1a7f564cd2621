//! Flag parsing shared by every command.
//!
//! Each command declares its flags as a clap `Args` struct. Flags take their
//! value after `=` only. Flag recognition ends at a literal `--`, and (for
//! commands whose positional list is a trailing var arg) at the first token
//! that does not start with `-`; every later token is positional.

use crate::cli::CommandName;
use crate::config::Environment;
use crate::errors::{OrgctlError, Result};
use crate::help;
use crate::output::OutputFormat;
use clap::error::{ContextKind, ContextValue};
use clap::{Arg, Args, FromArgMatches};
use std::ops::RangeInclusive;

/// Result of parsing a command line: either a help request or arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<T> {
    Help { full: bool },
    Args(T),
}

impl<T> Parsed<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        match self {
            Parsed::Help { full } => Parsed::Help { full },
            Parsed::Args(args) => Parsed::Args(f(args)),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U>) -> Result<Parsed<U>> {
        match self {
            Parsed::Help { full } => Ok(Parsed::Help { full }),
            Parsed::Args(args) => Ok(Parsed::Args(f(args)?)),
        }
    }
}

/// Flags every command accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct CommonFlags {
    /// Organization to operate on
    #[arg(long, require_equals = true, value_name = "ORG")]
    pub org: Option<String>,

    /// Output format: plain, tsv, csv or json
    #[arg(long, require_equals = true, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Flags of a command that takes nothing beyond the common ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct Flags {
    #[command(flatten)]
    pub common: CommonFlags,

    #[arg(trailing_var_arg = true, num_args = 0..)]
    pub positionals: Vec<String>,
}

/// Common flags after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonArgs {
    pub org: String,
    pub format: OutputFormat,
}

/// Parse `args` for `command` into its flag struct `T`.
///
/// `-h` and `--help` in flag position short-circuit to a help request once
/// the flags before them have parsed.
pub fn parse<T: Args + FromArgMatches>(command: CommandName, args: &[String]) -> Result<Parsed<T>> {
    let cmd = T::augment_args(
        clap::Command::new(command.as_str())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true),
    );
    let stops_at_positional = cmd.get_positionals().any(Arg::is_trailing_var_arg_set);

    let help = help_request(args, stops_at_positional);
    let flags_end = help.map_or(args.len(), |(index, _)| index);

    let matches = cmd
        .try_get_matches_from(&args[..flags_end])
        .map_err(|err| invalid_option(command, args, &err))?;
    let flags = T::from_arg_matches(&matches).map_err(|err| invalid_option(command, args, &err))?;

    Ok(match help {
        Some((_, full)) => Parsed::Help { full },
        None => Parsed::Args(flags),
    })
}

/// Position of the first `-h` or `--help` still in flag position, and
/// whether it asks for the full record.
fn help_request(args: &[String], stops_at_positional: bool) -> Option<(usize, bool)> {
    for (index, arg) in args.iter().enumerate() {
        match arg.as_str() {
            "--" => return None,
            "-h" => return Some((index, false)),
            "--help" => return Some((index, true)),
            positional if !positional.starts_with('-') && stops_at_positional => return None,
            _ => {}
        }
    }
    None
}

/// Report a clap rejection as the command-line token that caused it.
fn invalid_option(command: CommandName, args: &[String], err: &clap::Error) -> OrgctlError {
    tracing::debug!(kind = ?err.kind(), "{} rejected its flags", command.as_str());
    let name = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.split([' ', '=']).next().unwrap_or_default(),
        _ => "",
    };
    let token = args.iter().find(|arg| !name.is_empty() && *arg == name).or_else(|| {
        args.iter().find(|arg| {
            !name.is_empty() && arg.strip_prefix(name).is_some_and(|rest| rest.starts_with('='))
        })
    });
    let option = match (token, name) {
        (Some(token), _) => token.clone(),
        (None, "") => args
            .iter()
            .find(|arg| arg.starts_with('-'))
            .cloned()
            .unwrap_or_default(),
        (None, name) => name.to_string(),
    };
    OrgctlError::InvalidOption {
        command: Some(command.as_str()),
        option,
    }
}

impl CommonFlags {
    /// Check the organization, then the positional count.
    pub fn finish(
        self,
        command: CommandName,
        env: &Environment,
        positionals: &[String],
        arity: RangeInclusive<usize>,
    ) -> Result<CommonArgs> {
        let org = env
            .resolve_org(self.org.as_deref())
            .map(|resolved| resolved.value)
            .filter(|org| !org.is_empty())
            .ok_or(OrgctlError::MissingOrg {
                command: command.as_str(),
            })?;

        if !arity.contains(&positionals.len()) {
            return Err(usage_error(command));
        }

        Ok(CommonArgs {
            org,
            format: self.format.as_deref().map(OutputFormat::from).unwrap_or_default(),
        })
    }
}

pub fn usage_error(command: CommandName) -> OrgctlError {
    OrgctlError::Usage {
        command: command.as_str(),
        synopsis: help::command_doc(command).usage().to_string(),
    }
}
