use anyhow::{Context, Result};
use clap::Parser;
use rust_buckets::RandomizedSet;
use rust_buckets::script::{self, Reply};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Replay insert/remove/getRandom scripts against a randomized set", long_about = None)]
struct Args {
    /// Script to replay, or `-` for stdin
    script: Option<PathBuf>,

    /// Seed for reproducible getRandom draws
    #[arg(short, long)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = script::read_script(args.script.as_ref())
        .context("failed to read script")?;
    let ops = script::parse_set_script(&text).context("failed to parse script")?;

    let mut set = match args.seed {
        Some(seed) => RandomizedSet::with_seed(seed),
        None => RandomizedSet::new(),
    };

    let replies = script::run_set(&mut set, &ops);
    for reply in &replies {
        println!("{}", reply);
    }

    if args.verbose {
        let failed = replies
            .iter()
            .filter(|r| matches!(r, Reply::Error(_)))
            .count();
        eprintln!(
            "{} ops, {} members, {} failed draws",
            ops.len(),
            set.len(),
            failed
        );
    }

    Ok(())
}
