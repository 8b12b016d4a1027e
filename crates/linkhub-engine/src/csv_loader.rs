use std::borrow::Cow;
use std::collections::HashMap;

use csv::{ReaderBuilder, Trim};

use crate::Result;

/// One data line of the links file, keyed by header column name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source text
    pub line: u64,
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new(line: u64, fields: HashMap<String, String>) -> Self {
        Self { line, fields }
    }

    /// Value of `column`, or the empty string when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }
}

/// Split CSV text into rows keyed by the header line.
///
/// - Quoted fields may contain commas; quotes are stripped, and whitespace
///   before the opening quote is allowed
/// - Every field is trimmed
/// - Rows shorter than the header get empty strings for the missing columns
/// - Fields beyond the header are ignored
/// - Blank lines are skipped
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>> {
    let text = strip_space_before_quotes(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);

        let fields = headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let value = record.get(index).unwrap_or("");
                (header.clone(), value.to_string())
            })
            .collect();

        rows.push(RawRow::new(line, fields));
    }

    log::debug!("tokenized {} rows over {} columns", rows.len(), headers.len());
    Ok(rows)
}

/// Drop spaces and tabs between a field boundary and an opening quote.
///
/// The csv reader only recognizes a quote as the first byte of a field, so
/// `1, "a, b"` would otherwise split inside the quotes. Newlines are kept,
/// so record line numbers are unchanged.
fn strip_space_before_quotes(text: &str) -> Cow<'_, str> {
    if !text.contains('"') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();
    let mut in_quotes = false;
    let mut field_start = true;

    for c in text.chars() {
        if field_start {
            if c == ' ' || c == '\t' {
                pending.push(c);
                continue;
            }
            if c != '"' {
                out.push_str(&pending);
            }
            pending.clear();
            field_start = false;
        }

        match c {
            '"' => in_quotes = !in_quotes,
            ',' | '\n' if !in_quotes => field_start = true,
            _ => {}
        }
        out.push(c);
    }
    out.push_str(&pending);

    Cow::Owned(out)
}
