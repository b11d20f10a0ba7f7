use anyhow::{Context, Result};
use clap::Parser;
use rust_buckets::script::{self, LookupStyle};
use rust_buckets::{ChainMap, resolve_capacity};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Replay put/get/remove scripts against a chained hash map", long_about = None)]
struct Args {
    /// Script to replay, or `-` for stdin
    script: Option<PathBuf>,

    /// Number of buckets [default: $CHAINMAP_CAPACITY or 10000]
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Report missing keys as -1 instead of null
    #[arg(long)]
    sentinel: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let capacity = resolve_capacity(args.capacity)?;
    let mut map = ChainMap::with_capacity(capacity)?;

    let text = script::read_script(args.script.as_ref())
        .context("failed to read script")?;
    let ops = script::parse_map_script(&text).context("failed to parse script")?;

    let style = if args.sentinel {
        LookupStyle::Sentinel
    } else {
        LookupStyle::Optional
    };

    for reply in script::run_map(&mut map, &ops, style) {
        println!("{}", reply);
    }

    if args.verbose {
        eprintln!(
            "{} ops, {} keys in {} buckets, longest chain {}",
            ops.len(),
            map.len(),
            map.capacity(),
            map.longest_chain()
        );
    }

    Ok(())
}
