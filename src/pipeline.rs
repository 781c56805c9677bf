//! Sequential driver: ids in, CSV rows out.

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::cache::PageCache;
use crate::fetch::Fetch;
use crate::input;
use crate::parser;
use crate::rows;
use crate::settings::Settings;
use crate::sink;
use crate::store::PageStore;

/// Counters for the end-of-run log line.
pub struct RunStats {
    pub processed: usize,
    pub skipped: usize,
}

/// Run the full pipeline. Every id in `input` is fetched (or served from
/// cache), parsed and appended to `output`. Ids without a record behind
/// them are reported and skipped; anything else that fails stops the run.
pub fn run<S, F>(
    input: &Path,
    output: &Path,
    cache: &PageCache<S, F>,
    settings: &Settings,
) -> Result<RunStats>
where
    S: PageStore,
    F: Fetch,
{
    let ids = input::load_ids(input)?;
    sink::initialize(output)?;

    let mut stats = RunStats {
        processed: 0,
        skipped: 0,
    };
    for (index, id) in ids.iter().enumerate() {
        println!("Processing ID: {} | {}/{}", id, index + 1, ids.len());
        let html = cache.get(&settings.record_url(id))?;
        let record = match parser::parse(&html)? {
            Some(record) => record,
            None => {
                println!("ID does not exist");
                warn!("no record behind id {}", id);
                stats.skipped += 1;
                continue;
            }
        };
        let rows = rows::flatten(id, &record);
        sink::append(output, &rows)?;
        info!("id {}: appended {} rows", id, rows.len());
        stats.processed += 1;
    }

    println!("Output created successfully");
    Ok(stats)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use tempfile::TempDir;

    use super::*;
    use crate::error::ScrapeError;

    const RECORD_PAGE: &str = r#"<!DOCTYPE html>
<html lang="es"><body>
<table><tr><th>A Favor</th><th>En Contra</th><th>Abstención</th></tr>
<tr><td>3</td><td>0</td><td>0</td></tr></table>
<section id="info-ficha"><div class="auxi">
<div class="datos-ficha"><div class="dato">Fecha:</div><div class="info">12 de mayo de 2021</div></div>
<div class="datos-ficha"><div class="dato">Resultado:</div><div class="info">Aprobado</div></div>
</div></section>
<table id="ContentPlaceHolder1_ContentPlaceHolder1_PaginaContent_dtlAFavor">
<tr><td><ul><li><a href='#'>Flores G., Iván</a></li></ul></td>
<td><ul><li><a href='#'>Núñez S., Paulina</a></li></ul></td>
<td><ul><li><a href='#'>Walker P., Matías</a></li></ul></td>
<td></td></tr></table>
</body></html>"#;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl PageStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, ScrapeError> {
            Ok(self.0.borrow().get(key).cloned())
        }

        fn put(&self, key: &str, body: &[u8]) -> Result<(), ScrapeError> {
            let text = String::from_utf8(body.to_vec()).unwrap();
            self.0.borrow_mut().insert(key.to_string(), text);
            Ok(())
        }
    }

    struct StaticPages(HashMap<String, String>);

    impl Fetch for StaticPages {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
            match self.0.get(url) {
                Some(body) => Ok(body.clone().into_bytes()),
                None => panic!("unexpected fetch: {}", url),
            }
        }
    }

    #[test]
    fn skips_missing_records_and_appends_the_rest() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("ids.txt");
        std::fs::write(&input, "100\n200\n").unwrap();
        let output = temp.path().join("out.csv");

        let settings = Settings::default();
        let error_page = std::fs::read_to_string("tests/fixtures/error_page.html").unwrap();
        let mut pages = HashMap::new();
        pages.insert(settings.record_url("100"), error_page);
        pages.insert(settings.record_url("200"), RECORD_PAGE.to_string());
        let cache = PageCache::new(MemoryStore::default(), StaticPages(pages));

        let stats = run(&input, &output, &cache, &settings).unwrap();
        assert_eq!(stats.processed, 1);
        assert_eq!(stats.skipped, 1);

        let content = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Congress Member Name,id,Date"));
        for line in &lines[1..] {
            assert!(line.contains(",200,"));
            assert!(line.contains("A Favor"));
        }
    }

    #[test]
    fn rerun_reuses_cached_pages() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("ids.txt");
        std::fs::write(&input, "200\n").unwrap();
        let output = temp.path().join("out.csv");

        let settings = Settings::default();
        let store = MemoryStore::default();
        store
            .put(
                &crate::store::page_key(&settings.record_url("200")),
                RECORD_PAGE.as_bytes(),
            )
            .unwrap();
        // Fetcher with no pages: any network call would panic.
        let cache = PageCache::new(store, StaticPages(HashMap::new()));

        let stats = run(&input, &output, &cache, &settings).unwrap();
        assert_eq!(stats.processed, 1);
        assert_eq!(stats.skipped, 0);
    }
}
