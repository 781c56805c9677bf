//! Writes batch files of vote ids for the scraper to chew through.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;

/// Id ranges known to have vote records behind them, inclusive on both
/// ends. Overlaps are kept; the scraper deduplicates its input anyway.
const ID_RANGES: [(u32, u32); 3] = [(31013, 37015), (31498, 31802), (32387, 32649)];

#[derive(Parser)]
#[command(
    name = "id_generator",
    about = "Partition the known vote id ranges into input files"
)]
struct Cli {
    /// Output filename prefix; files are numbered from 1
    #[arg(long, default_value = "input")]
    base: String,
    /// Ids per file
    #[arg(long, default_value_t = 1000)]
    size: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.size == 0 {
        bail!("size must be at least 1");
    }

    let ids = expand_ranges(&ID_RANGES);
    let files = write_partitions(&cli.base, cli.size, &ids)?;
    println!("Wrote {} ids across {} files", ids.len(), files);
    Ok(())
}

fn expand_ranges(ranges: &[(u32, u32)]) -> Vec<u32> {
    let mut ids = Vec::new();
    for &(start, end) in ranges {
        ids.extend(start..=end);
    }
    ids
}

fn partition_count(total: usize, size: usize) -> usize {
    let mut count = total / size;
    if total % size != 0 {
        count += 1;
    }
    count
}

/// Write `ids` into `{base}{n}.txt` files of at most `size` lines each
/// and return how many files were written.
fn write_partitions(base: &str, size: usize, ids: &[u32]) -> Result<usize> {
    for (index, chunk) in ids.chunks(size).enumerate() {
        let filename = format!("{}{}.txt", base, index + 1);
        let file = File::create(&filename)
            .with_context(|| format!("failed to create {}", filename))?;
        let mut writer = BufWriter::new(file);
        for id in chunk {
            writeln!(writer, "{}", id)?;
        }
        writer.flush()?;
    }
    Ok(partition_count(ids.len(), size))
}

// ── Tests ──
