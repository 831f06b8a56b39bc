pub mod csv;
mod record;

use std::{fs, path::Path};

pub use self::record::{Column, Endpoint, HeaderMap};

use crate::error::{Error, Result};

use self::csv::{CsvError, Records};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("missing header row")]
    MissingHeader,

    #[error("content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Csv(#[from] CsvError),
}

fn is_skipped(record: &[String]) -> bool {
    match record.first() {
        Some(first) => first.trim().starts_with('#'),
        None => true,
    }
}

/// Reads every endpoint of a CSV document in source order.
///
/// The first record is the header. Comment rows (first field starting with `#`)
/// and rows without a url are dropped; any tokenizer error fails the whole document.
pub fn collect_endpoints(content: &str) -> Result<Vec<Endpoint>, ParseError> {
    let mut records = Records::new(content);

    let header = match records.next() {
        Some(header) => HeaderMap::new(&header?),
        None => return Err(ParseError::MissingHeader),
    };

    let mut endpoints = Vec::new();

    for record in records {
        let record = record?;

        if is_skipped(&record) {
            continue;
        }

        let endpoint = Endpoint::from_record(&record, &header);

        if endpoint.url.is_empty() {
            continue;
        }

        endpoints.push(endpoint);
    }

    Ok(endpoints)
}

pub fn read_endpoints(path: &Path) -> Result<Vec<Endpoint>> {
    let bytes = fs::read(path).map_err(|source| Error::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes)
        .map_err(ParseError::from)
        .and_then(|content| collect_endpoints(&content))
        .map_err(|source| Error::SourceParse {
            path: path.to_path_buf(),
            source,
        })
}
