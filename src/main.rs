//! siftql CLI - filter JSON-lines records by a query

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use clap::Parser as ClapParser;
use siftql::{Record, Value};

/// Filter JSON-lines records from stdin by a query
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Query to evaluate against each record, e.g. 'age > 30'
    query: String,

    /// Print records that do not match instead
    #[arg(short = 'v', long)]
    invert: bool,

    /// Treat evaluation errors as non-matches instead of aborting
    #[arg(short, long)]
    lenient: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let expr = siftql::parse(&args.query)
        .with_context(|| format!("failed to parse query {:?}", args.query))?;

    let stdin = io::stdin();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let record: Record = serde_json::from_str(&line)
            .with_context(|| format!("invalid record on line {}", index + 1))?;

        let matched = match expr.evaluate(&record) {
            Ok(Value::Boolean(b)) => b,
            Ok(_) if args.lenient => false,
            Ok(other) => bail!(
                "query produced {} instead of a boolean on line {}",
                other.data_type(),
                index + 1
            ),
            Err(_) if args.lenient => false,
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to evaluate record on line {}", index + 1));
            }
        };

        if matched != args.invert {
            println!("{}", line);
        }
    }

    Ok(())
}
