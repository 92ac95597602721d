use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::model::{Attribute, ElementRecord, ElementTable, ATTRIBUTE_COUNT};
use crate::error::{DataFault, Error, Result};

/// Bracketed Roman-numeral footnotes such as `[IV]` found in the raw data.
static FOOTNOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[IVX]+\]").expect("footnote pattern is valid"));

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the element table from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<ElementTable> {
    let origin = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|e| Error::unavailable(&origin, e))?;
    let table = parse(file, &origin)?;
    if table.is_empty() {
        log::warn!("{origin} contains no element rows");
    } else {
        log::info!("loaded {} elements from {origin}", table.len());
    }
    Ok(table)
}

/// Load the element table from any reader carrying the CSV rows.
#[cfg(test)]
pub fn load_reader<R: Read>(reader: R) -> Result<ElementTable> {
    parse(reader, "<reader>")
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One data row, fields in file order. No header row is present, so fields
/// are matched positionally.
#[derive(Debug, Deserialize)]
struct RawRow(
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
);

impl From<RawRow> for [String; ATTRIBUTE_COUNT] {
    fn from(r: RawRow) -> Self {
        [
            r.0, r.1, r.2, r.3, r.4, r.5, r.6, r.7, r.8, r.9, r.10, r.11, r.12,
        ]
    }
}

fn parse<R: Read>(reader: R, origin: &str) -> Result<ElementTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table = ElementTable::default();

    for (idx, result) in reader.records().enumerate() {
        let row_no = idx + 1;
        let mut record = result.map_err(|e| Error::unavailable(origin, e))?;

        if record.len() < ATTRIBUTE_COUNT {
            return Err(Error::unavailable(
                origin,
                DataFault::ShortRow {
                    row: row_no,
                    found: record.len(),
                    expected: ATTRIBUTE_COUNT,
                },
            ));
        }
        if record.len() > ATTRIBUTE_COUNT {
            log::warn!(
                "{origin}: row {row_no} has {} fields, ignoring all after the first {ATTRIBUTE_COUNT}",
                record.len()
            );
            record.truncate(ATTRIBUTE_COUNT);
        }

        let raw: RawRow = record
            .deserialize(None)
            .map_err(|e| Error::unavailable(origin, e))?;
        let element = build_record(raw.into());

        if let Some(previous) = table.insert(element) {
            log::warn!(
                "{origin}: row {row_no} replaces earlier entry for {} ({})",
                previous.name(),
                previous.symbol()
            );
        }
    }

    Ok(table)
}

/// Annotate units, then strip footnote markup from every field.
fn build_record(mut values: [String; ATTRIBUTE_COUNT]) -> ElementRecord {
    for (attr, value) in Attribute::ALL.iter().zip(values.iter_mut()) {
        if let Some(suffix) = attr.unit_suffix() {
            value.push_str(suffix);
        }
        *value = strip_footnotes(value);
    }
    ElementRecord::new(values)
}

fn strip_footnotes(value: &str) -> String {
    FOOTNOTE_RE.replace_all(value, "").into_owned()
}
