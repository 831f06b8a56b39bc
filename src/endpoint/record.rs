use std::{collections::HashMap, str::FromStr};

use strum::EnumString;

/// Columns understood in the header row.
#[derive(Debug, EnumString, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Column {
    #[strum(serialize = "method")]
    Method,
    #[strum(serialize = "url")]
    Url,
    #[strum(serialize = "prefix")]
    Prefix,
    #[strum(serialize = "comment")]
    Comment,
}

/// Column name to field index, built from the header row.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    columns: HashMap<Column, usize>,
}

impl HeaderMap {
    /// Unknown columns are ignored. A repeated column resolves to its last occurrence.
    pub fn new<S: AsRef<str>>(header: &[S]) -> Self {
        let columns = header
            .iter()
            .enumerate()
            .filter_map(|(index, name)| {
                Column::from_str(name.as_ref().trim())
                    .ok()
                    .map(|column| (column, index))
            })
            .collect();

        Self { columns }
    }

    pub fn index(&self, column: Column) -> Option<usize> {
        self.columns.get(&column).copied()
    }

    fn field<S: AsRef<str>>(&self, record: &[S], column: Column) -> String {
        self.index(column)
            .and_then(|index| record.get(index))
            .map(|value| value.as_ref().trim().to_string())
            .unwrap_or_default()
    }
}

/// One routing intent read from a row.
///
/// `method` keeps the case written in the source; it is upper-cased when the match is built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: String,
    pub url: String,
    pub prefix: String,
    pub comment: String,
}

impl Endpoint {
    /// Fields beyond the end of the record are read as empty strings.
    pub fn from_record<S: AsRef<str>>(record: &[S], header: &HeaderMap) -> Self {
        Self {
            method: header.field(record, Column::Method),
            url: header.field(record, Column::Url),
            prefix: header.field(record, Column::Prefix),
            comment: header.field(record, Column::Comment),
        }
    }

    pub fn has_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }
}
