//! Aggregate counts from the summary table at the top of the page.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::error::ScrapeError;

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static TH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").unwrap());
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Pair the first table's header cells with its count cells by position.
/// Cells without a counterpart on the other side are ignored.
pub fn extract(doc: &Html) -> Result<HashMap<String, String>, ScrapeError> {
    let table = doc
        .select(&TABLE)
        .next()
        .ok_or(ScrapeError::MissingElement("summary table"))?;

    let labels = table.select(&TH).map(super::element_text);
    let counts = table.select(&TD).map(super::element_text);
    Ok(labels.zip(counts).collect())
}

// ── Tests ──
