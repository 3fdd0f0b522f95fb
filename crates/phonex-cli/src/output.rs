//! Rendering encoded names

use std::io::Write;

use phonex_core::EncodedName;

use crate::config::OutputFormat;
use crate::error::Result;

/// Write records in the requested format.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[EncodedName],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                writeln!(out, "{}\t{}", record.name, record.code)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
