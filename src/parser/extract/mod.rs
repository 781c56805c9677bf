pub mod attributes;
pub mod members;
pub mod tally;

use std::collections::HashMap;

use scraper::{ElementRef, Html};

use crate::error::ScrapeError;

pub use members::MemberVote;

/// Everything pulled from one vote-detail page. Member lists keep the
/// on-page category order.
pub struct ParsedRecord {
    pub tally: HashMap<String, String>,
    pub attributes: HashMap<String, String>,
    pub members: Vec<(&'static str, Vec<MemberVote>)>,
}

pub fn extract_all(doc: &Html) -> Result<ParsedRecord, ScrapeError> {
    Ok(ParsedRecord {
        tally: tally::extract(doc)?,
        attributes: attributes::extract(doc)?,
        members: members::extract(doc)?,
    })
}

pub(crate) fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

// ── Tests ──
