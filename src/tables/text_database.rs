//! Line-oriented text database format
//!
//! One record per line: a decimal id followed by `|key=value` attributes.
//!
//! ```text
//! # comment
//! 92|name=Gold Mine|race=neutral
//! ```
//!
//! Blank lines and `#` comments are skipped. Values are trimmed and may contain
//! any character except `|`.

use indexmap::IndexMap;
use nom::{
    bytes::complete::{take_till, take_while1},
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res},
    multi::many0,
    sequence::{delimited, pair, preceded, separated_pair},
    IResult,
};
use std::path::Path;

use crate::error::{PudError, Result};

/// One parsed line: an id and its attributes in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    pub id: u16,
    pub attributes: IndexMap<String, String>,
}

impl TextRecord {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Remove and return an attribute.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.attributes.shift_remove(key)
    }

    /// Remove and return the mandatory `name` attribute.
    pub fn take_name(&mut self) -> std::result::Result<String, String> {
        match self.take("name") {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(format!("record {} has no name", self.id)),
        }
    }
}

fn record_id(input: &str) -> IResult<&str, u16> {
    delimited(space0, map_res(digit1, |s: &str| s.parse::<u16>()), space0)(input)
}

fn attribute_key(input: &str) -> IResult<&str, &str> {
    delimited(
        space0,
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
        space0,
    )(input)
}

fn attribute(input: &str) -> IResult<&str, (&str, &str)> {
    preceded(
        char('|'),
        separated_pair(attribute_key, char('='), take_till(|c: char| c == '|')),
    )(input)
}

fn record_line(input: &str) -> IResult<&str, (u16, Vec<(&str, &str)>)> {
    all_consuming(pair(record_id, many0(attribute)))(input)
}

/// Parse a single non-empty, non-comment line.
pub fn parse_line(line: &str) -> Option<TextRecord> {
    let (_, (id, attrs)) = record_line(line.trim()).ok()?;
    let mut attributes = IndexMap::with_capacity(attrs.len());
    for (key, value) in attrs {
        attributes.insert(key.to_string(), value.trim().to_string());
    }
    Some(TextRecord { id, attributes })
}

/// Parse a whole resource into `(line_number, record)` pairs.
pub fn parse_records(text: &str, origin: &Path) -> Result<Vec<(usize, TextRecord)>> {
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let record = parse_line(trimmed).ok_or_else(|| {
            PudError::asset(origin, format!("line {}: cannot parse `{}`", index + 1, trimmed))
        })?;
        records.push((index + 1, record));
    }
    Ok(records)
}
