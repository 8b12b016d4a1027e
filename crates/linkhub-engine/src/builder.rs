use linkhub_types::{Glyph, Link};
use serde::Serialize;
use std::fmt;

use crate::csv_loader::{RawRow, parse_rows};
use crate::Result;

/// Something that was wrong with a row but did not stop it from loading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RowWarning {
    /// `id` column was empty
    MissingId,
    /// `id` column did not hold an integer
    InvalidId(String),
    /// `icon` column was empty or absent; the default glyph was used
    MissingIcon,
    /// `icon` column named a glyph that does not exist; the default glyph was used
    UnknownIcon(String),
    MissingTitle,
    MissingUrl,
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowWarning::MissingId => write!(f, "missing id"),
            RowWarning::InvalidId(raw) => write!(f, "id '{}' is not an integer", raw),
            RowWarning::MissingIcon => write!(f, "no icon, using {}", Glyph::default()),
            RowWarning::UnknownIcon(name) => {
                write!(f, "unknown icon '{}', using {}", name, Glyph::default())
            }
            RowWarning::MissingTitle => write!(f, "missing title"),
            RowWarning::MissingUrl => write!(f, "missing url"),
        }
    }
}

/// Outcome of turning one raw row into a [`Link`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    Ok(Link),
    /// The row loaded, but some fields fell back to defaults.
    Fallback(Link, Vec<RowWarning>),
}

impl ParseResult {
    pub fn link(&self) -> &Link {
        match self {
            ParseResult::Ok(link) | ParseResult::Fallback(link, _) => link,
        }
    }

    pub fn into_link(self) -> Link {
        match self {
            ParseResult::Ok(link) | ParseResult::Fallback(link, _) => link,
        }
    }

    pub fn warnings(&self) -> &[RowWarning] {
        match self {
            ParseResult::Ok(_) => &[],
            ParseResult::Fallback(_, warnings) => warnings,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ParseResult::Fallback(..))
    }
}

/// A built row together with its line in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub line: u64,
    pub result: ParseResult,
}

/// Build a [`Link`] from a raw row. Never rejects a row.
pub fn build_link(row: &RawRow) -> ParseResult {
    let mut warnings = Vec::new();

    let raw_id = row.get("id");
    let id = if raw_id.is_empty() {
        warnings.push(RowWarning::MissingId);
        None
    } else {
        match raw_id.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                warnings.push(RowWarning::InvalidId(raw_id.to_string()));
                None
            }
        }
    };

    let title = row.get("title").to_string();
    if title.is_empty() {
        warnings.push(RowWarning::MissingTitle);
    }

    let url = row.get("url").to_string();
    if url.is_empty() {
        warnings.push(RowWarning::MissingUrl);
    }

    let icon_name = row.get("icon");
    let icon = match Glyph::from_name(icon_name) {
        Some(glyph) => glyph,
        None => {
            if icon_name.is_empty() {
                warnings.push(RowWarning::MissingIcon);
            } else {
                warnings.push(RowWarning::UnknownIcon(icon_name.to_string()));
            }
            Glyph::default()
        }
    };

    let description = Some(row.get("description"))
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    let link = Link {
        id,
        title,
        url,
        icon,
        description,
        tags: split_tags(row.get("tags")),
    };

    if warnings.is_empty() {
        ParseResult::Ok(link)
    } else {
        log::warn!("line {}: {}", row.line, join_warnings(&warnings));
        ParseResult::Fallback(link, warnings)
    }
}

/// Tokenize `text` and build every row.
pub fn build_links(text: &str) -> Result<Vec<ParsedRow>> {
    Ok(parse_rows(text)?
        .iter()
        .map(|row| ParsedRow {
            line: row.line,
            result: build_link(row),
        })
        .collect())
}

/// Tokenize `text` and keep only the links, dropping per-row diagnostics.
pub fn parse_links(text: &str) -> Result<Vec<Link>> {
    Ok(build_links(text)?
        .into_iter()
        .map(|row| row.result.into_link())
        .collect())
}

/// Split a `;`-separated tag column. Empty column means no tags.
///
/// Empty pieces such as the middle of `a;;b` are dropped rather than kept as
/// blank tags.
fn split_tags(raw: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = raw
        .split(';')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    if tags.is_empty() { None } else { Some(tags) }
}

fn join_warnings(warnings: &[RowWarning]) -> String {
    warnings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
