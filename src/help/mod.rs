//! Built-in documentation for the program and each command.

use crate::cli::CommandName;
use crate::errors::{OrgctlError, Result};
use colored::Colorize;
use std::io::{IsTerminal, Write};

/// A documentation record. The first line is the usage synopsis.
#[derive(Debug)]
pub struct HelpDoc {
    pub topic: Option<&'static str>,
    pub text: &'static str,
}

impl HelpDoc {
    pub fn synopsis(&self) -> &'static str {
        self.text.lines().next().unwrap_or_default()
    }

    /// The synopsis without its `Usage:` label.
    pub fn usage(&self) -> &'static str {
        let synopsis = self.synopsis();
        synopsis.strip_prefix("Usage:").unwrap_or(synopsis).trim_start()
    }
}

macro_rules! doc {
    ($file:literal) => {
        HelpDoc {
            topic: None,
            text: include_str!(concat!("docs/", $file, ".txt")),
        }
    };
    ($topic:literal, command) => {
        HelpDoc {
            topic: Some($topic),
            text: include_str!(concat!("docs/", $topic, ".txt")),
        }
    };
}

/// The overview, then one record per command in `CommandName` order.
static DOCS: &[HelpDoc] = &[
    doc!("main"),
    doc!("repo-list", command),
    doc!("user-list", command),
    doc!("user-get", command),
    doc!("user-invite", command),
    doc!("user-remove", command),
    doc!("team-list", command),
    doc!("team-get-id", command),
    doc!("team-add-to-repo", command),
    doc!("team-repo-list", command),
];

/// Find the record for `topic`, or the program overview when `None`.
/// Names must match exactly.
pub fn lookup(topic: Option<&str>) -> Result<&'static HelpDoc> {
    DOCS.iter()
        .find(|doc| doc.topic == topic)
        .ok_or_else(|| OrgctlError::HelpNotFound(topic.unwrap_or_default().to_string()))
}

/// Record for `command`.
pub fn command_doc(command: CommandName) -> &'static HelpDoc {
    &DOCS[command as usize + 1]
}

/// A line made only of uppercase words, such as `OPTIONS`.
pub fn is_heading(line: &str) -> bool {
    let mut letters = false;
    for c in line.chars() {
        if c.is_ascii_uppercase() {
            letters = true;
        } else if c != ' ' {
            return false;
        }
    }
    letters
}

/// Render documentation text, emboldening headings when `styled`.
pub fn render(text: &str, styled: bool) -> String {
    if !styled {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 64);
    for line in text.lines() {
        if is_heading(line) {
            out.push_str(&line.bold().to_string());
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Print documentation for `topic`; only the synopsis when `usage_only`.
pub fn print<W: Write>(
    writer: &mut W,
    topic: Option<&str>,
    usage_only: bool,
    styled: bool,
) -> Result<()> {
    let doc = lookup(topic)?;
    if usage_only {
        writeln!(writer, "{}", doc.synopsis())?;
    } else {
        writer.write_all(render(doc.text, styled).as_bytes())?;
    }
    Ok(())
}

pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}
