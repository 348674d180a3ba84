use std::io::{self, Write};

use crate::model::Batch;

/// One row per line, values separated by tabs.
pub fn write_batch_text<W: Write>(mut writer: W, batch: &Batch) -> io::Result<()> {
    for row in &batch.rows {
        writeln!(writer, "{}", row.join("\t"))?;
    }
    writer.flush()
}
