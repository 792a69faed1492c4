//! Fair-Draw: commit-then-reveal lucky draw CLI.
//!
//! Publish the list commitment before the signal exists, reveal the signal,
//! then anyone can re-run this tool and arrive at the same winners.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use draw_core::{load_roster, DrawOutcome, DrawService};

/// Fair-Draw: deterministic, publicly-verifiable lucky draws
#[derive(Parser, Debug)]
#[command(name = "fair-draw")]
#[command(version)]
#[command(about = "Commit-then-reveal lucky draw with a reproducible ranking")]
struct Args {
    /// Path to the roster file (one participant name per line)
    file: PathBuf,

    /// The revealed public signal (e.g. a closing price); treated as an
    /// opaque string, never parsed
    signal: String,

    /// Number of winners to display
    #[arg(short = 'n', long = "top", default_value = "3")]
    top: usize,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print the full ranking after the winners
    #[arg(long)]
    full: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();

    let names = load_roster(&args.file)?;
    info!(count = names.len(), file = %args.file.display(), "Loaded roster");

    let outcome = DrawService::new().run_draw(names, &args.signal, args.top)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_report(&outcome, args.full);
    }

    Ok(())
}

/// Render the textual report in its stable field order: signal, count,
/// commitment, digest, seed, winners.
fn print_report(outcome: &DrawOutcome, full: bool) {
    println!("--- Fair Lucky Draw Results ---");
    println!("Future Signal:   '{}'", outcome.signal);
    println!("Participants:    {}", outcome.total_count);
    println!("List Commitment: {}", outcome.list_commitment);
    println!("Draw Digest:     {}", outcome.digest);
    println!("Seed:            {}", outcome.seed);
    println!("{}", "-".repeat(30));

    println!("Top {} Winners:", outcome.winners.len());
    for (rank, winner) in outcome.winners.iter().enumerate() {
        println!("{}. {}", rank + 1, winner);
    }

    if full {
        println!("{}", "-".repeat(30));
        println!("Full Ranking:");
        for (rank, name) in outcome.ranking.iter().enumerate() {
            println!("{}. {}", rank + 1, name);
        }
    }

    println!("{}", "-".repeat(30));
}
