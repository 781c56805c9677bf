//! Turns one vote-detail page into structured data.
//!
//! Ids without a record behind them do not 404; the server answers with
//! its generic error page instead, so detection happens on page content.
//! Everything else is fixed-layout extraction handled by the `extract`
//! submodules.

mod extract;

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::error::ScrapeError;

pub use extract::{MemberVote, ParsedRecord};

const NOT_FOUND_BANNER: &str = "Error de servidor en la aplicación '/'.";

static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());
static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());
static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());

/// Parse one page. `Ok(None)` means the id has no record behind it.
pub fn parse(html: &str) -> Result<Option<ParsedRecord>, ScrapeError> {
    let doc = Html::parse_document(html);
    if is_error_page(&doc) {
        return Ok(None);
    }
    extract::extract_all(&doc).map(Some)
}

/// The banner sits in the first span under body, as that span's first h1.
/// Comparison is exact; pages without that structure are real records.
fn is_error_page(doc: &Html) -> bool {
    doc.select(&BODY)
        .next()
        .and_then(|body| body.select(&SPAN).next())
        .and_then(|span| span.select(&H1).next())
        .map(|h1| h1.text().collect::<String>() == NOT_FOUND_BANNER)
        .unwrap_or(false)
}

// ── Tests ──
