//! Per-member vote lists from the four category tables.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static LI: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());

/// Table ids are ASP.NET control paths; only the control name differs
/// per category.
const TABLE_ID_PREFIX: &str = "ContentPlaceHolder1_ContentPlaceHolder1_PaginaContent_";

const CATEGORIES: [(&str, &str); 4] = [
    ("A Favor", "dtlAFavor"),
    ("En Contra", "dtlEnContra"),
    ("Abstención", "dtlAbstencion"),
    ("Pareos", "dtlPareos"),
];

/// One member entry. `pairing` is empty unless the member sat the vote
/// out under a pairing agreement, in which case it names the counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberVote {
    pub name: String,
    pub pairing: String,
}

/// Member lists per category, in fixed page order. A category whose table
/// is absent (unanimous votes render without the empty ones) yields an
/// empty list.
pub fn extract(doc: &Html) -> Result<Vec<(&'static str, Vec<MemberVote>)>, ScrapeError> {
    let mut categories = Vec::with_capacity(CATEGORIES.len());
    for (label, control) in CATEGORIES {
        let members = match table_by_id(doc, control) {
            Some(table) => members_of(table)?,
            None => Vec::new(),
        };
        categories.push((label, members));
    }
    Ok(categories)
}

fn table_by_id<'a>(doc: &'a Html, control: &str) -> Option<ElementRef<'a>> {
    doc.select(&TABLE).find(|table| {
        table
            .value()
            .id()
            .and_then(|id| id.strip_prefix(TABLE_ID_PREFIX))
            == Some(control)
    })
}

fn members_of(table: ElementRef) -> Result<Vec<MemberVote>, ScrapeError> {
    let mut members = Vec::new();
    for row in direct_children(rows_parent(table), "tr") {
        for cell in direct_children(row, "td") {
            // Filler cells at the end of the grid have no list item; the
            // row ends at the first one.
            let li = match cell.select(&LI).next() {
                Some(li) => li,
                None => break,
            };
            members.push(member_entry(li)?);
        }
    }
    Ok(members)
}

// html5ever hangs loose rows off an implicit tbody, not off the table
// element itself.
fn rows_parent(table: ElementRef) -> ElementRef {
    direct_children(table, "tbody").next().unwrap_or(table)
}

fn direct_children<'a>(
    el: ElementRef<'a>,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == name)
}

fn member_entry(li: ElementRef) -> Result<MemberVote, ScrapeError> {
    let mut anchors = direct_children(li, "a");
    let name = anchors
        .next()
        .map(super::element_text)
        .ok_or(ScrapeError::MissingElement("member anchor"))?;
    let pairing = anchors.next().map(super::element_text).unwrap_or_default();
    Ok(MemberVote { name, pairing })
}

// ── Tests ──
