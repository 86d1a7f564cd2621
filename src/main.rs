mod api;
mod cli;
mod config;
mod errors;
mod help;
mod output;

use errors::OrgctlError;
use miette::Diagnostic;
use std::io::Write;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let env = config::Environment::from_process();
    let client = api::GhClient::new();
    let styled = help::stdout_is_terminal();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = cli::dispatch(&argv, &env, &client, &mut out, styled) {
        let _ = out.flush();
        report(&err);
        std::process::exit(err.exit_code());
    }
}

/// Print a one-line diagnostic for `err` on stderr.
fn report(err: &OrgctlError) {
    if err.is_reported() {
        return;
    }
    match err.help() {
        Some(help) => eprintln!("{}: {err} ({help})", cli::PROGRAM),
        None => eprintln!("{}: {err}", cli::PROGRAM),
    }
}
