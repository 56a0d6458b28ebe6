//! Writing the collection out as delimited text or JSON.

use std::io::Write;

use crate::error::Result;
use crate::input::Delimiter;
use crate::schema::Record;

/// Write records as delimited text with an `id,name,phone,email` header.
pub fn write_delimited<W: Write>(records: &[Record], writer: W, delimiter: Delimiter) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .from_writer(writer);

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write records as a pretty-printed JSON array.
pub fn write_json<W: Write>(records: &[Record], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush().map_err(serde_json::Error::io)?;
    Ok(())
}
