use std::io::Read;

use csv::ReaderBuilder;
use tracing::debug;

use crate::core::record::{RawRecord, ValidatedRecord};
use crate::error::{ChartError, ChartResult};

/// Parses one delimited source into validated records.
///
/// The first row names the columns. Rows are filtered during parsing: any row
/// missing a recognized field, or leaving it empty, is dropped silently and
/// never reaches the dataset. Only total parse failure (unreadable input) is
/// an error, and it is fatal to this source alone.
pub fn parse_records<R: Read>(name: &str, reader: R) -> ChartResult<Vec<ValidatedRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| ChartError::SourceUnreadable {
            name: name.to_owned(),
            source,
        })?
        .clone();

    let mut kept = Vec::new();
    let mut dropped = 0usize;
    for row in csv_reader.records() {
        let row = row.map_err(|source| ChartError::SourceUnreadable {
            name: name.to_owned(),
            source,
        })?;

        let mut raw = RawRecord::default();
        for (column, value) in headers.iter().zip(row.iter()) {
            raw.insert(column, value);
        }

        match raw.validate() {
            Some(record) => kept.push(record),
            None => dropped += 1,
        }
    }

    debug!(source = name, kept = kept.len(), dropped, "parsed source");
    Ok(kept)
}
