// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File collaborators around the core: distribution tables, vector dumps,
//! raw byte sources and the results table.
//!
//! Tables are plain CSV without a header row. Distribution files hold one
//! `"symbol","probability"` record per line; symbols that do not appear get
//! probability 0.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use ndarray::{Array1, ArrayBase, Data, Ix1};
use tracing::debug;

use crate::error::{Result, SourceError};
use crate::source::distribution::Distribution;

/// Parse a distribution table from any reader.
///
/// Aborts on the first malformed record; no partial distribution is returned.
/// A symbol listed twice keeps its last probability.
pub fn read_distribution<R: Read>(reader: R) -> Result<Distribution> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut map = BTreeMap::new();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let (symbol, p) = parse_record(&record, line)?;
        map.insert(symbol, p);
    }
    debug!(records = map.len(), "Read distribution table");
    Distribution::from_symbol_map(&map)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<(u8, f64)> {
    let malformed = |reason: String| SourceError::MalformedRecord { line, reason };
    if record.len() != 2 {
        return Err(malformed(format!("expected 2 fields, got {}", record.len())));
    }
    let symbol = record[0]
        .parse::<u8>()
        .map_err(|_| malformed(format!("symbol {:?} is not an integer in 0..=255", &record[0])))?;
    let p = record[1]
        .parse::<f64>()
        .map_err(|_| malformed(format!("probability {:?} is not a number", &record[1])))?;
    Ok((symbol, p))
}

/// Load a distribution table from disk.
pub fn load_distribution(path: impl AsRef<Path>) -> Result<Distribution> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading distribution");
    read_distribution(fs::File::open(path)?)
}

/// Write `"index","value"` records, the format [`read_distribution`] accepts.
pub fn write_probabilities<W, S>(writer: W, probs: &ArrayBase<S, Ix1>) -> Result<()>
where
    W: Write,
    S: Data<Elem = f64>,
{
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);
    for (i, p) in probs.iter().enumerate() {
        wtr.write_record([i.to_string(), p.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_distribution(path: impl AsRef<Path>, dist: &Distribution) -> Result<()> {
    write_probabilities(fs::File::create(path)?, &dist.probabilities())
}

/// Single-column dump, one value per record (CDF and random-draw exports).
pub fn save_column<S>(path: impl AsRef<Path>, values: &ArrayBase<S, Ix1>) -> Result<()>
where
    S: Data<Elem = f64>,
{
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(fs::File::create(path)?);
    for v in values.iter() {
        wtr.write_record([v.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// `index,value` dump (self-information export).
pub fn save_indexed<S>(path: impl AsRef<Path>, values: &ArrayBase<S, Ix1>) -> Result<()>
where
    S: Data<Elem = f64>,
{
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(fs::File::create(path)?);
    for (i, v) in values.iter().enumerate() {
        wtr.write_record([i.to_string(), v.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a symbol stream as raw bytes, one symbol per byte, no header.
pub fn save_byte_source(path: impl AsRef<Path>, symbols: &Array1<u8>) -> Result<()> {
    let mut file = fs::File::create(path)?;
    match symbols.as_slice() {
        Some(bytes) => file.write_all(bytes)?,
        None => file.write_all(&symbols.to_vec())?,
    }
    file.flush()?;
    Ok(())
}

/// Read any file as an 8-bit symbol stream.
pub fn read_byte_source(path: impl AsRef<Path>) -> Result<Array1<u8>> {
    Ok(Array1::from(fs::read(path)?))
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyRecord {
    pub input: String,
    pub size: usize,
    /// Bits per byte
    pub entropy: f64,
}

/// Append a record to the results table, creating it if absent.
pub fn append_result(path: impl AsRef<Path>, record: &EntropyRecord) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.write_record([
        record.input.clone(),
        record.size.to_string(),
        record.entropy.to_string(),
    ])?;
    wtr.flush()?;
    Ok(())
}
