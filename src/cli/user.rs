use crate::api::query::{self, FieldPath};
use crate::api::{ApiClient, ApiRequest};
use crate::cli::args::{self, CommonArgs, CommonFlags, Flags, Parsed};
use crate::cli::CommandName;
use crate::config::Environment;
use crate::errors::Result;
use crate::output::{self, Table};
use clap::Args;
use std::io::Write;

/// Shown for members whose profile has no display name.
pub const NO_NAME: &str = "(No Name)";

const DEFAULT_ROLE: &str = "direct_member";

#[derive(Debug, Args)]
struct UserListFlags {
    #[command(flatten)]
    common: CommonFlags,

    /// Add a column with each member's display name
    #[arg(long)]
    names: bool,

    #[arg(trailing_var_arg = true, num_args = 0..)]
    positionals: Vec<String>,
}

/// `user-list`: organization members, optionally with display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListArgs {
    pub common: CommonArgs,
    pub names: bool,
}

impl UserListArgs {
    pub fn parse(argv: &[String], env: &Environment) -> Result<Parsed<Self>> {
        const NAME: CommandName = CommandName::UserList;
        args::parse::<UserListFlags>(NAME, argv)?.and_then(|flags| {
            let common = flags.common.finish(NAME, env, &flags.positionals, 0..=0)?;
            Ok(Self {
                common,
                names: flags.names,
            })
        })
    }

    pub fn run<W: Write>(&self, client: &dyn ApiClient, out: &mut W) -> Result<()> {
        let request = ApiRequest::get(format!("orgs/{}/members", self.common.org)).paginated();
        if !self.names {
            return super::write_list(
                client,
                out,
                &self.common.format,
                request,
                &[("username", "login")],
            );
        }

        let members = query::items(&client.send(&request)?)?;
        let login = FieldPath::new("login");
        let display_name = FieldPath::new("name");

        let mut table = Table::new(&["username", "name"]);
        for member in &members {
            let username = login.text(member);
            tracing::debug!(%username, "looking up display name");
            let profile = query::single(&client.send(&ApiRequest::get(format!("users/{username}")))?)?;
            let name = profile
                .map(|p| display_name.text(&p))
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| NO_NAME.to_string());
            table.push(vec![username, name]);
        }
        output::write_table(out, &self.common.format, &table)
    }
}

/// `user-get`: the authenticated user, or a named one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGetArgs {
    pub common: CommonArgs,
    pub username: Option<String>,
}

impl UserGetArgs {
    pub fn parse(argv: &[String], env: &Environment) -> Result<Parsed<Self>> {
        const NAME: CommandName = CommandName::UserGet;
        args::parse::<Flags>(NAME, argv)?.and_then(|flags| {
            let common = flags.common.finish(NAME, env, &flags.positionals, 0..=1)?;
            Ok(Self {
                common,
                username: flags.positionals.into_iter().next(),
            })
        })
    }

    pub fn run<W: Write>(&self, client: &dyn ApiClient, out: &mut W) -> Result<()> {
        let endpoint = match &self.username {
            Some(username) => format!("users/{username}"),
            None => "user".to_string(),
        };
        super::write_raw(out, &client.send(&ApiRequest::get(endpoint))?)
    }
}

/// Flags may follow the email address, so there is no trailing var arg.
#[derive(Debug, Args)]
struct UserInviteFlags {
    #[command(flatten)]
    common: CommonFlags,

    /// Organization role for the invitee
    #[arg(long, require_equals = true, default_value = DEFAULT_ROLE)]
    role: String,

    /// Comma-separated ids of teams to add the invitee to
    #[arg(long, require_equals = true, value_name = "IDS")]
    team_ids: Option<String>,

    positionals: Vec<String>,
}

/// `user-invite`: invite an email address to the organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInviteArgs {
    pub common: CommonArgs,
    pub email: String,
    pub role: String,
    pub team_ids: Vec<String>,
}

impl UserInviteArgs {
    pub fn parse(argv: &[String], env: &Environment) -> Result<Parsed<Self>> {
        const NAME: CommandName = CommandName::UserInvite;
        args::parse::<UserInviteFlags>(NAME, argv)?.and_then(|flags| {
            let common = flags.common.finish(NAME, env, &flags.positionals, 1..=1)?;
            Ok(Self {
                common,
                email: flags.positionals.into_iter().next().unwrap_or_default(),
                role: flags.role,
                team_ids: flags.team_ids.as_deref().map(split_ids).unwrap_or_default(),
            })
        })
    }

    pub fn run<W: Write>(&self, client: &dyn ApiClient, out: &mut W) -> Result<()> {
        let mut request = ApiRequest::post(format!("orgs/{}/invitations", self.common.org))
            .field("email", &self.email)
            .field("role", &self.role);
        for id in &self.team_ids {
            request = request.typed_field("team_ids[]", id);
        }
        super::write_raw(out, &client.send(&request)?)
    }
}

fn split_ids(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

/// `user-remove`: drop a member from the organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRemoveArgs {
    pub common: CommonArgs,
    pub username: String,
}

impl UserRemoveArgs {
    pub fn parse(argv: &[String], env: &Environment) -> Result<Parsed<Self>> {
        const NAME: CommandName = CommandName::UserRemove;
        args::parse::<Flags>(NAME, argv)?.and_then(|flags| {
            let common = flags.common.finish(NAME, env, &flags.positionals, 1..=1)?;
            Ok(Self {
                common,
                username: flags.positionals.into_iter().next().unwrap_or_default(),
            })
        })
    }

    pub fn run<W: Write>(&self, client: &dyn ApiClient, out: &mut W) -> Result<()> {
        let request = ApiRequest::delete(format!(
            "orgs/{}/memberships/{}",
            self.common.org, self.username
        ));
        super::write_raw(out, &client.send(&request)?)
    }
}
