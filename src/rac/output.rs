// file: src/rac/output.rs
// version: 1.0.0
// guid: e8b41f7c-0d26-4a93-b5c8-17f6a3e9d024

//! Parser for the `key : value` block format printed by `rac`
//!
//! Each object is a block of lines separated from the next by one or more
//! blank lines:
//!
//! ```text
//! cluster : 1619820a-d36f-4d18-a754-8f6c9d6f8ab2
//! host    : srv-1c
//! port    : 1541
//! name    : "Main cluster"
//!
//! cluster : 6d6fa4a4-6b13-4f5f-bd6b-4d1c0a39c3a1
//! ...
//! ```
//!
//! A non-blank line without `:` is a parse error.

use crate::error::{AgentError, Result};

/// One parsed block: field names mapped to values, in output order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field; an existing key keeps its position and takes the new value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Value of a field
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Field names in output order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Fields in output order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

/// Lazy iterator over the records of a `rac` output text
///
/// A clone continues independently from the current position. Call
/// [`parse_records`] again to re-parse from the start.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    failed: bool,
}

/// Split `text` into records, one per blank-line separated block
pub fn parse_records(text: &str) -> Records<'_> {
    Records {
        lines: text.lines().enumerate(),
        failed: false,
    }
}

impl Iterator for Records<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut record = Record::new();
        for (index, line) in self.lines.by_ref() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                if record.is_empty() {
                    continue;
                }
                return Some(Ok(record));
            }

            match split_field(line) {
                Some((key, value)) => record.insert(key, value),
                None => {
                    self.failed = true;
                    return Some(Err(AgentError::parse(format!(
                        "line {}: expected `key : value`, got {:?}",
                        index + 1,
                        line.trim()
                    ))));
                }
            }
        }

        if record.is_empty() {
            None
        } else {
            Some(Ok(record))
        }
    }
}

fn split_field(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, unquote(value.trim())))
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
