//! Section-bounded scanning of MTL text.
//!
//! An MTL document is a sequence of `GROUP = <NAME>` ... `END_GROUP = <NAME>`
//! blocks holding `KEY = value` lines. A section is located by the first
//! `GROUP = <NAME>` marker and the first matching `END_GROUP = <NAME>` after it.
//! Nested or repeated sections with the same name are not supported: only the
//! first occurrence is ever seen.

use landsat_common::{CalibrationError, CalibrationResult, CoefficientTable};

const GROUP_PREFIX: &str = "GROUP = ";
const END_GROUP_PREFIX: &str = "END_GROUP = ";

/// Borrowed view over a complete MTL document.
#[derive(Debug, Clone, Copy)]
pub struct MtlDocument<'a> {
    text: &'a str,
}

impl<'a> MtlDocument<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Locate a named section.
    pub fn section(&self, name: &'a str) -> CalibrationResult<Section<'a>> {
        let body = section_text(self.text, name)?;
        Ok(Section { name, body })
    }

    /// Scan a named section for numeric values of the given keys.
    pub fn scan(&self, name: &'a str, keys: &[&str]) -> CalibrationResult<CoefficientTable> {
        self.section(name)?.scan(keys)
    }
}

/// The text between a section's start and end markers.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    name: &'a str,
    body: &'a str,
}

impl<'a> Section<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn body(&self) -> &'a str {
        self.body
    }

    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.body.lines()
    }

    /// Collect `key = number` entries for every line mentioning one of `keys`.
    ///
    /// Matching is by substring, so a target key must not be a substring of an
    /// unrelated key in the same section. The stored key is the trimmed text
    /// left of the first `=`. Keys that never appear are simply absent.
    pub fn scan(&self, keys: &[&str]) -> CalibrationResult<CoefficientTable> {
        let mut table = CoefficientTable::new();
        for line in self.lines() {
            if keys.iter().any(|key| line.contains(key)) {
                let (key, value) = parse_numeric_line(line)?;
                table.insert(key, value);
            }
        }
        Ok(table)
    }
}

/// Return the text of section `name`, excluding its marker lines.
pub fn section_text<'a>(document: &'a str, name: &str) -> CalibrationResult<&'a str> {
    let start_marker = format!("{}{}", GROUP_PREFIX, name);
    let end_marker = format!("{}{}", END_GROUP_PREFIX, name);

    let body_start = find_group_marker(document, &start_marker, 0)
        .map(|pos| pos + start_marker.len())
        .ok_or_else(|| CalibrationError::section_not_found(name))?;

    let body_end = find_marker(document, &end_marker, body_start)
        .ok_or_else(|| CalibrationError::section_not_found(name))?;

    Ok(&document[body_start..body_end])
}

/// Convenience wrapper: locate `name` and scan it for `keys`.
pub fn scan_section(document: &str, name: &str, keys: &[&str]) -> CalibrationResult<CoefficientTable> {
    let body = section_text(document, name)?;
    Section { name, body }.scan(keys)
}

/// Split a `KEY = value` line at the first `=` and parse the value.
pub fn parse_numeric_line(line: &str) -> CalibrationResult<(String, f64)> {
    let (key, value) = line
        .split_once('=')
        .ok_or_else(|| CalibrationError::format(line.trim(), "missing '='"))?;

    let value = value.trim();
    let parsed = value.parse::<f64>().map_err(|_| {
        CalibrationError::format(line.trim(), format!("'{}' is not a number", value))
    })?;

    Ok((key.trim().to_string(), parsed))
}

/// Find `marker` at or after `from`, only where it is a complete token.
fn find_marker(document: &str, marker: &str, from: usize) -> Option<usize> {
    let mut offset = from;
    while let Some(found) = document[offset..].find(marker) {
        let pos = offset + found;
        let after = pos + marker.len();
        if ends_token(document, after) {
            return Some(pos);
        }
        offset = after;
    }
    None
}

/// Like [`find_marker`], but skips the `GROUP = ` embedded in `END_GROUP = `.
fn find_group_marker(document: &str, marker: &str, from: usize) -> Option<usize> {
    let mut offset = from;
    while let Some(pos) = find_marker(document, marker, offset) {
        if !document[..pos].ends_with("END_") {
            return Some(pos);
        }
        offset = pos + marker.len();
    }
    None
}

fn ends_token(document: &str, at: usize) -> bool {
    document[at..]
        .chars()
        .next()
        .map_or(true, |c| c.is_whitespace())
}
