use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes report rows as a pretty-printed JSON array followed by a newline.
pub fn write_rows<W: Write, T: Serialize>(mut destination: W, rows: &[T]) -> Result<()> {
    serde_json::to_writer_pretty(&mut destination, rows)?;
    writeln!(destination)?;
    Ok(())
}
