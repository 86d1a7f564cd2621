pub mod args;
pub mod repo;
pub mod team;
pub mod user;

use crate::api::query::{self, FieldPath};
use crate::api::{ApiClient, ApiRequest};
use crate::config::Environment;
use crate::errors::{OrgctlError, Result};
use crate::help;
use crate::output::{self, OutputFormat, Table};
use args::Parsed;
use clap::Parser;
use std::io::Write;

pub const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Names of the commands the dispatcher knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    RepoList,
    UserList,
    UserGet,
    UserInvite,
    UserRemove,
    TeamList,
    TeamGetId,
    TeamAddToRepo,
    TeamRepoList,
}

impl CommandName {
    pub const ALL: [CommandName; 9] = [
        CommandName::RepoList,
        CommandName::UserList,
        CommandName::UserGet,
        CommandName::UserInvite,
        CommandName::UserRemove,
        CommandName::TeamList,
        CommandName::TeamGetId,
        CommandName::TeamAddToRepo,
        CommandName::TeamRepoList,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::RepoList => "repo-list",
            CommandName::UserList => "user-list",
            CommandName::UserGet => "user-get",
            CommandName::UserInvite => "user-invite",
            CommandName::UserRemove => "user-remove",
            CommandName::TeamList => "team-list",
            CommandName::TeamGetId => "team-get-id",
            CommandName::TeamAddToRepo => "team-add-to-repo",
            CommandName::TeamRepoList => "team-repo-list",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

/// A fully parsed command with its typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RepoList(repo::RepoListArgs),
    UserList(user::UserListArgs),
    UserGet(user::UserGetArgs),
    UserInvite(user::UserInviteArgs),
    UserRemove(user::UserRemoveArgs),
    TeamList(team::TeamListArgs),
    TeamGetId(team::TeamGetIdArgs),
    TeamAddToRepo(team::TeamAddToRepoArgs),
    TeamRepoList(team::TeamRepoListArgs),
}

impl Command {
    /// Parse the arguments that follow `name` on the command line.
    pub fn parse(name: CommandName, args: &[String], env: &Environment) -> Result<Invocation> {
        let parsed = match name {
            CommandName::RepoList => repo::RepoListArgs::parse(args, env)?.map(Command::RepoList),
            CommandName::UserList => user::UserListArgs::parse(args, env)?.map(Command::UserList),
            CommandName::UserGet => user::UserGetArgs::parse(args, env)?.map(Command::UserGet),
            CommandName::UserInvite => {
                user::UserInviteArgs::parse(args, env)?.map(Command::UserInvite)
            }
            CommandName::UserRemove => {
                user::UserRemoveArgs::parse(args, env)?.map(Command::UserRemove)
            }
            CommandName::TeamList => team::TeamListArgs::parse(args, env)?.map(Command::TeamList),
            CommandName::TeamGetId => {
                team::TeamGetIdArgs::parse(args, env)?.map(Command::TeamGetId)
            }
            CommandName::TeamAddToRepo => {
                team::TeamAddToRepoArgs::parse(args, env)?.map(Command::TeamAddToRepo)
            }
            CommandName::TeamRepoList => {
                team::TeamRepoListArgs::parse(args, env)?.map(Command::TeamRepoList)
            }
        };
        Ok(match parsed {
            Parsed::Help { full } => Invocation::CommandHelp {
                command: name,
                full,
            },
            Parsed::Args(command) => Invocation::Run(command),
        })
    }

    pub fn run<W: Write>(&self, client: &dyn ApiClient, out: &mut W) -> Result<()> {
        match self {
            Command::RepoList(args) => args.run(client, out),
            Command::UserList(args) => args.run(client, out),
            Command::UserGet(args) => args.run(client, out),
            Command::UserInvite(args) => args.run(client, out),
            Command::UserRemove(args) => args.run(client, out),
            Command::TeamList(args) => args.run(client, out),
            Command::TeamGetId(args) => args.run(client, out),
            Command::TeamAddToRepo(args) => args.run(client, out),
            Command::TeamRepoList(args) => args.run(client, out),
        }
    }
}

/// Options accepted in place of a command.
#[derive(Debug, Parser)]
#[command(
    name = PROGRAM,
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct ProgramFlags {
    /// Print the version and repository
    #[arg(short = 'V', long)]
    version: bool,

    /// Print documentation for an optional topic
    #[arg(short = 'h', long)]
    help: bool,
}

/// What a command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Version,
    Help { topic: Option<String> },
    CommandHelp { command: CommandName, full: bool },
    Run(Command),
}

impl Invocation {
    /// Interpret the argument vector, program name excluded.
    pub fn parse(argv: &[String], env: &Environment) -> Result<Self> {
        let Some((first, rest)) = argv.split_first() else {
            return Ok(Invocation::Help { topic: None });
        };
        let help = Invocation::Help {
            topic: rest.first().cloned(),
        };
        if first.starts_with('-') {
            // Only the leading token is a program option.
            let invalid = || OrgctlError::InvalidOption {
                command: None,
                option: first.clone(),
            };
            let flags = ProgramFlags::try_parse_from([first]).map_err(|err| {
                tracing::debug!(kind = ?err.kind(), "rejected program option");
                invalid()
            })?;
            return match (flags.version, flags.help) {
                (true, _) => Ok(Invocation::Version),
                (_, true) => Ok(help),
                _ => Err(invalid()),
            };
        }
        match first.as_str() {
            "version" => Ok(Invocation::Version),
            "help" => Ok(help),
            name => match CommandName::from_name(name) {
                Some(command) => Command::parse(command, rest, env),
                None => Err(OrgctlError::InvalidCommand(name.to_string())),
            },
        }
    }

    /// Carry out the invocation, writing results to `out`.
    pub fn execute<W: Write>(&self, client: &dyn ApiClient, out: &mut W, styled: bool) -> Result<()> {
        match self {
            Invocation::Version => {
                writeln!(out, "{PROGRAM} v{}", env!("CARGO_PKG_VERSION"))?;
                writeln!(out, "{}", env!("CARGO_PKG_REPOSITORY"))?;
                Ok(())
            }
            Invocation::Help { topic } => help::print(out, topic.as_deref(), false, styled),
            Invocation::CommandHelp { command, full } => {
                help::print(out, Some(command.as_str()), !full, styled)
            }
            Invocation::Run(command) => command.run(client, out),
        }
    }
}

/// Parse `argv` and run it.
pub fn dispatch<W: Write>(
    argv: &[String],
    env: &Environment,
    client: &dyn ApiClient,
    out: &mut W,
    styled: bool,
) -> Result<()> {
    let invocation = Invocation::parse(argv, env)?;
    tracing::debug!(?invocation, "dispatching");
    let result = invocation.execute(client, out, styled);
    if let Err(OrgctlError::Upstream { output, .. }) = &result {
        out.write_all(output)?;
    }
    result
}

/// Fetch a paginated list and write the projected table.
fn write_list<W: Write>(
    client: &dyn ApiClient,
    out: &mut W,
    format: &OutputFormat,
    request: ApiRequest,
    columns: &[(&'static str, &'static str)],
) -> Result<()> {
    let body = client.send(&request)?;
    let items = query::items(&body)?;

    let header: Vec<&'static str> = columns.iter().map(|(name, _)| *name).collect();
    let paths: Vec<FieldPath> = columns.iter().map(|(_, path)| FieldPath::new(*path)).collect();

    let mut table = Table::new(&header);
    table.extend(query::project(&items, &paths));
    output::write_table(out, format, &table)
}

/// Copy a raw response body to `out` byte for byte, ending it with a newline.
fn write_raw<W: Write>(out: &mut W, body: &[u8]) -> Result<()> {
    out.write_all(body)?;
    if body.last().is_some_and(|&last| last != b'\n') {
        writeln!(out)?;
    }
    Ok(())
}
