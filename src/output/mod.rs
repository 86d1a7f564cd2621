pub mod json;
pub mod table;
pub mod text;

pub use table::Table;

use crate::errors::Result;
use std::io::Write;

/// Output format selected with `--format=`.
///
/// Unrecognised values are kept as `Other` and behave like passthrough.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    Tsv,
    Csv,
    Json,
    Other(String),
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s {
            "plain" => OutputFormat::Plain,
            "tsv" => OutputFormat::Tsv,
            "csv" => OutputFormat::Csv,
            "json" => OutputFormat::Json,
            other => OutputFormat::Other(other.to_string()),
        }
    }
}

/// Turn tab-delimited rows into final text for the given format.
pub fn format_output(format: &OutputFormat, input: &str) -> String {
    match format {
        OutputFormat::Plain => text::align_columns(input),
        _ => input.to_string(),
    }
}

/// Write a table in the requested format.
pub fn write_table<W: Write>(writer: &mut W, format: &OutputFormat, table: &Table) -> Result<()> {
    match format {
        OutputFormat::Json => json::write_table_json(writer, table),
        _ => {
            writer.write_all(format_output(format, &table.to_tsv()).as_bytes())?;
            Ok(())
        }
    }
}
