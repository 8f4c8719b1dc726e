// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::pipeline::count_file;
use crate::utils::print_top;

/// How many entries to print when no count is given on the command line.
pub const DEFAULT_TOP: usize = 20;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to read
    pub file: PathBuf,

    /// Number of entries to print (defaults to 20 when absent or not a number)
    #[arg(value_name = "TOP")]
    pub top: Option<String>,
}

impl Args {
    /// Resolves the requested entry count. A missing or non-numeric
    /// argument falls back to the default rather than failing the run.
    #[must_use]
    pub fn top_n(&self) -> usize {
        self.top
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TOP)
    }
}

/// Counts word frequencies in the input file and prints the most
/// frequent words in descending order.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a read fails.
pub fn run(args: Args) -> Result<()> {
    let table = count_file(&args.file)?;
    print_top(&table.top_n(args.top_n()));
    Ok(())
}
