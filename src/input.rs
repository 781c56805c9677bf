use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read vote ids from a newline-delimited file. Blank lines are dropped
/// and a repeated id keeps its first position only.
pub fn load_ids(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read id list {}", path.display()))?;
    Ok(dedup_ids(text.lines()))
}

fn dedup_ids<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for line in lines {
        let id = line.trim();
        if !id.is_empty() && seen.insert(id.to_string()) {
            ids.push(id.to_string());
        }
    }
    ids
}

// ── Tests ──
