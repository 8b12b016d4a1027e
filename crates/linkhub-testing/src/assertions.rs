//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Titles of `content.links`, in order.
pub fn link_titles(json: &Value) -> Result<Vec<String>> {
    let links = json["content"]["links"]
        .as_array()
        .context("Expected 'content.links' array in JSON")?;

    links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            link["title"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Link {} missing title", i))
        })
        .collect()
}

/// Assert that the listed links have exactly these titles, in order.
pub fn assert_link_titles(json: &Value, expected: &[&str]) -> Result<()> {
    let titles = link_titles(json)?;
    if titles != expected {
        anyhow::bail!("Expected links {:?}, got {:?}", expected, titles);
    }
    Ok(())
}

/// Assert the page block: current page, page count and paged flag.
pub fn assert_page(json: &Value, number: u64, total_pages: u64, paged: bool) -> Result<()> {
    let page = &json["content"]["page"];
    let actual = (
        page["number"].as_u64().context("Expected 'content.page.number'")?,
        page["total_pages"]
            .as_u64()
            .context("Expected 'content.page.total_pages'")?,
        page["paged"].as_bool().context("Expected 'content.page.paged'")?,
    );

    if actual != (number, total_pages, paged) {
        anyhow::bail!(
            "Expected page {}/{} (paged: {}), got {}/{} (paged: {})",
            number,
            total_pages,
            paged,
            actual.0,
            actual.1,
            actual.2
        );
    }
    Ok(())
}
