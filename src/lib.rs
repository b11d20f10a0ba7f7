pub mod chain_map;
pub mod error;
pub mod random_set;
pub mod script;

pub use chain_map::{ChainMap, DEFAULT_CAPACITY, NOT_FOUND};
pub use error::{Error, Result};
pub use random_set::RandomizedSet;

use std::env::{self, VarError};

use anyhow::Context;

pub const CAPACITY_ENV: &str = "CHAINMAP_CAPACITY";

/// Bucket count for a new map, using the following priority:
/// 1. The explicit `--capacity` flag
/// 2. CHAINMAP_CAPACITY environment variable
/// 3. DEFAULT_CAPACITY
pub fn resolve_capacity(flag: Option<usize>) -> anyhow::Result<usize> {
    capacity_from(flag, env::var(CAPACITY_ENV))
}

fn capacity_from(
    flag: Option<usize>,
    env_value: std::result::Result<String, VarError>,
) -> anyhow::Result<usize> {
    // 1. Flag
    if let Some(cap) = flag {
        return check_capacity(cap).context("--capacity");
    }

    // 2. Environment
    let raw = match env_value {
        Ok(raw) => Some(raw),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            return Err(Error::InvalidCapacity(format!("not valid unicode: {:?}", raw)))
                .context(CAPACITY_ENV);
        }
    };
    if let Some(raw) = raw {
        let cap = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidCapacity(format!("not a positive integer: {:?}", raw)))
            .context(CAPACITY_ENV)?;
        return check_capacity(cap).context(CAPACITY_ENV);
    }

    // 3. Default
    Ok(DEFAULT_CAPACITY)
}

fn check_capacity(cap: usize) -> Result<usize> {
    if cap == 0 {
        return Err(Error::ZeroCapacity);
    }
    Ok(cap)
}
