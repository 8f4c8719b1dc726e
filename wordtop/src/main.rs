// src/main.rs
use anyhow::Result;
use clap::Parser;

use wordtop::cli::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}
