use crate::errors::Result;
use crate::output::Table;
use std::io::Write;

/// Write a table as a pretty-printed JSON array.
pub fn write_table_json<W: Write>(writer: &mut W, table: &Table) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, table)?;
    writeln!(writer)?;
    Ok(())
}
