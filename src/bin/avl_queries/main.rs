//! Reads a query count and that many `t x` queries, applies them to an AVL
//! set in order and prints the answer to every lower-bound query.

mod cli_options;
mod logger;

use std::fs;
use std::io::{self, BufWriter, Read};

use anyhow::{Context, Result};
use avl_set::query;
use clap::Parser;
use log::{info, trace};

use cli_options::CliOpts;

fn read_input(options: &CliOpts) -> Result<String> {
    match options.input_path() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read standard input")?;
            Ok(input)
        }
    }
}

fn main() -> Result<()> {
    logger::initialize_logger();

    let options = CliOpts::parse();
    trace!("Arguments: {:?}", options);

    let input = read_input(&options)?;
    let queries = query::parse_queries(&input)?;
    info!("running {} queries", queries.len());

    let stdout = io::stdout();
    query::run(&queries, BufWriter::new(stdout.lock()), options.not_found)
}
