use crate::api::query::{self, FieldPath};
use crate::api::{ApiClient, ApiRequest};
use crate::cli::args::{self, CommonArgs, CommonFlags, Flags, Parsed};
use crate::cli::CommandName;
use crate::config::Environment;
use crate::errors::{OrgctlError, Result};
use clap::Args;
use std::io::Write;

const DEFAULT_PERMISSION: &str = "push";

/// `team-list`: teams of the organization with their ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamListArgs {
    pub common: CommonArgs,
}

impl TeamListArgs {
    pub fn parse(argv: &[String], env: &Environment) -> Result<Parsed<Self>> {
        const NAME: CommandName = CommandName::TeamList;
        args::parse::<Flags>(NAME, argv)?.and_then(|flags| {
            let common = flags.common.finish(NAME, env, &flags.positionals, 0..=0)?;
            Ok(Self { common })
        })
    }

    pub fn run<W: Write>(&self, client: &dyn ApiClient, out: &mut W) -> Result<()> {
        let request = ApiRequest::get(format!("orgs/{}/teams", self.common.org)).paginated();
        super::write_list(
            client,
            out,
            &self.common.format,
            request,
            &[("slug", "slug"), ("id", "id")],
        )
    }
}

/// `team-get-id`: the numeric id behind a team slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamGetIdArgs {
    pub common: CommonArgs,
    pub team: String,
}

impl TeamGetIdArgs {
    pub fn parse(argv: &[String], env: &Environment) -> Result<Parsed<Self>> {
        const NAME: CommandName = CommandName::TeamGetId;
        args::parse::<Flags>(NAME, argv)?.and_then(|flags| {
            let common = flags.common.finish(NAME, env, &flags.positionals, 1..=1)?;
            Ok(Self {
                common,
                team: flags.positionals.into_iter().next().unwrap_or_default(),
            })
        })
    }

    pub fn run<W: Write>(&self, client: &dyn ApiClient, out: &mut W) -> Result<()> {
        let request = ApiRequest::get(format!("orgs/{}/teams/{}", self.common.org, self.team));
        let id = query::single(&client.send(&request)?)?
            .map(|team| FieldPath::new("id").text(&team))
            .filter(|id| !id.is_empty())
            .ok_or_else(|| OrgctlError::Response {
                command: CommandName::TeamGetId.as_str(),
                message: format!("team `{}` has no id", self.team),
            })?;
        writeln!(out, "{id}")?;
        Ok(())
    }
}

#[derive(Debug, Args)]
struct TeamAddToRepoFlags {
    #[command(flatten)]
    common: CommonFlags,

    /// Permission to grant: pull, triage, push, maintain or admin
    #[arg(long, require_equals = true, default_value = DEFAULT_PERMISSION)]
    permission: String,

    #[arg(trailing_var_arg = true, num_args = 0..)]
    positionals: Vec<String>,
}

/// `team-add-to-repo`: grant a team a permission on a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamAddToRepoArgs {
    pub common: CommonArgs,
    pub team: String,
    pub repo: String,
    pub permission: String,
}

impl TeamAddToRepoArgs {
    pub fn parse(argv: &[String], env: &Environment) -> Result<Parsed<Self>> {
        const NAME: CommandName = CommandName::TeamAddToRepo;
        args::parse::<TeamAddToRepoFlags>(NAME, argv)?.and_then(|flags| {
            let common = flags.common.finish(NAME, env, &flags.positionals, 2..=2)?;
            let mut positionals = flags.positionals.into_iter();
            Ok(Self {
                common,
                team: positionals.next().unwrap_or_default(),
                repo: positionals.next().unwrap_or_default(),
                permission: flags.permission,
            })
        })
    }

    pub fn run<W: Write>(&self, client: &dyn ApiClient, out: &mut W) -> Result<()> {
        let org = &self.common.org;
        let request = ApiRequest::put(format!(
            "orgs/{org}/teams/{}/repos/{org}/{}",
            self.team, self.repo
        ))
        .field("permission", &self.permission);
        super::write_raw(out, &client.send(&request)?)
    }
}

/// `team-repo-list`: repositories a team has access to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRepoListArgs {
    pub common: CommonArgs,
    pub team: String,
}

impl TeamRepoListArgs {
    pub fn parse(argv: &[String], env: &Environment) -> Result<Parsed<Self>> {
        const NAME: CommandName = CommandName::TeamRepoList;
        args::parse::<Flags>(NAME, argv)?.and_then(|flags| {
            let common = flags.common.finish(NAME, env, &flags.positionals, 1..=1)?;
            Ok(Self {
                common,
                team: flags.positionals.into_iter().next().unwrap_or_default(),
            })
        })
    }

    pub fn run<W: Write>(&self, client: &dyn ApiClient, out: &mut W) -> Result<()> {
        let request =
            ApiRequest::get(format!("orgs/{}/teams/{}/repos", self.common.org, self.team))
                .paginated();
        super::write_list(client, out, &self.common.format, request, &[("name", "name")])
    }
}
