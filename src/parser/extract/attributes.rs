//! Record metadata (`Fecha`, `Materia`, `Quorum`, ...) from the header
//! section of the page.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

static INFO_SECTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section#info-ficha").unwrap());
static AUXI: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.auxi").unwrap());
static FIELD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.datos-ficha").unwrap());
static LABEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.dato").unwrap());
static VALUE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.info").unwrap());

/// Label/value pairs from `section#info-ficha`. Trailing colons on labels
/// are dropped so keys read `Fecha`, not `Fecha:`.
pub fn extract(doc: &Html) -> Result<HashMap<String, String>, ScrapeError> {
    let section = doc
        .select(&INFO_SECTION)
        .next()
        .ok_or(ScrapeError::MissingElement("section#info-ficha"))?;
    let auxi = section
        .select(&AUXI)
        .next()
        .ok_or(ScrapeError::MissingElement("div.auxi"))?;

    let mut attributes = HashMap::new();
    for field in auxi.select(&FIELD) {
        let (name, value) = split_field(field)?;
        attributes.insert(name, value);
    }
    Ok(attributes)
}

fn split_field(field: ElementRef) -> Result<(String, String), ScrapeError> {
    let label = field
        .select(&LABEL)
        .next()
        .ok_or(ScrapeError::MissingElement("div.dato"))?;
    let value = field
        .select(&VALUE)
        .next()
        .ok_or(ScrapeError::MissingElement("div.info"))?;

    let mut name = super::element_text(label);
    if let Some(stripped) = name.strip_suffix(':') {
        name = stripped.to_string();
    }
    Ok((name, super::element_text(value)))
}

// ── Tests ──
