use crate::api::{ApiClient, ApiRequest};
use crate::cli::args::{self, CommonArgs, Flags, Parsed};
use crate::cli::CommandName;
use crate::config::Environment;
use crate::errors::Result;
use std::io::Write;

/// `repo-list`: every repository of the organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoListArgs {
    pub common: CommonArgs,
}

impl RepoListArgs {
    pub fn parse(argv: &[String], env: &Environment) -> Result<Parsed<Self>> {
        const NAME: CommandName = CommandName::RepoList;
        args::parse::<Flags>(NAME, argv)?.and_then(|flags| {
            let common = flags.common.finish(NAME, env, &flags.positionals, 0..=0)?;
            Ok(Self { common })
        })
    }

    pub fn run<W: Write>(&self, client: &dyn ApiClient, out: &mut W) -> Result<()> {
        let request = ApiRequest::get(format!("orgs/{}/repos", self.common.org)).paginated();
        super::write_list(client, out, &self.common.format, request, &[("name", "name")])
    }
}
