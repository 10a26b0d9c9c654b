//! CSV decoding for matrix uploads.
//!
//! Turns raw bytes into [`RawRows`]. No header row, comma delimiter, and
//! every record must have the same number of fields as the first one.
//! Cells are kept verbatim (no trimming, no quote stripping beyond what
//! CSV itself defines).
//!
//! Quoting is strict: a quote may only open a field, close it, or be
//! doubled inside a quoted field. Anything else (a bare quote in an
//! unquoted field, text after a closing quote, a quote left open at the
//! end of input) is malformed.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{MatrixError, MatrixResult};
use crate::models::{Cell, RawRows};

/// Decode CSV bytes into rows of cells.
///
/// Unequal record lengths, bad quoting and invalid UTF-8 are reported as
/// [`MatrixError::MalformedInput`]. Empty input yields no rows.
///
/// # Example
/// ```ignore
/// use matrix::parse_grid;
///
/// let rows = parse_grid(b"1,2\n3,4").unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1][0].as_str(), "3");
/// ```
pub fn parse_grid(bytes: &[u8]) -> MatrixResult<RawRows> {
    check_quoting(bytes)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(bytes);

    reader
        .records()
        .map(|record| {
            record
                .map(|record| record.iter().map(Cell::from).collect())
                .map_err(|e| {
                    tracing::debug!(error = %e, "rejected csv upload");
                    MatrixError::MalformedInput
                })
        })
        .collect()
}

#[derive(Clone, Copy)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Reject quoting the `csv` reader would otherwise repair silently.
fn check_quoting(bytes: &[u8]) -> MatrixResult<()> {
    let mut state = QuoteState::FieldStart;

    for (offset, &byte) in bytes.iter().enumerate() {
        let separator = matches!(byte, b',' | b'\n' | b'\r');
        state = match (state, byte) {
            (QuoteState::FieldStart, b'"') => QuoteState::Quoted,
            (QuoteState::FieldStart | QuoteState::Unquoted, _) if separator => QuoteState::FieldStart,
            (QuoteState::FieldStart | QuoteState::Unquoted, b'"') => {
                tracing::debug!(offset, "bare quote in unquoted field");
                return Err(MatrixError::MalformedInput);
            }
            (QuoteState::FieldStart | QuoteState::Unquoted, _) => QuoteState::Unquoted,
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, _) if separator => QuoteState::FieldStart,
            (QuoteState::QuoteInQuoted, _) => {
                tracing::debug!(offset, "text after closing quote");
                return Err(MatrixError::MalformedInput);
            }
        };
    }

    if let QuoteState::Quoted = state {
        tracing::debug!("quoted field left open");
        return Err(MatrixError::MalformedInput);
    }
    Ok(())
}

/// Read a CSV file from disk and decode it.
///
/// A file that cannot be read maps to [`MatrixError::MissingInput`], the
/// same outcome as an upload with no file attached.
pub fn parse_grid_file<P: AsRef<Path>>(path: P) -> MatrixResult<RawRows> {
    let bytes = std::fs::read(path.as_ref()).map_err(|e| {
        tracing::debug!(path = %path.as_ref().display(), error = %e, "cannot read matrix file");
        MatrixError::MissingInput
    })?;

    parse_grid(&bytes)
}
