use std::io::{BufRead, Write};

use hotcol::Table;

/// Read JSONL records, one object per line; blank lines are skipped.
pub fn read_records(
    reader: &mut dyn BufRead,
) -> Result<Vec<serde_json::Value>, Box<dyn std::error::Error>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}

/// Write a table as JSONL records, one object per row.
pub fn write_records(
    table: &Table,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for row in 0..table.n_rows() {
        let mut record = serde_json::Map::new();
        for (name, values) in table.columns() {
            record.insert(name.to_string(), values[row].to_json());
        }
        serde_json::to_writer(&mut *writer, &serde_json::Value::Object(record))?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
