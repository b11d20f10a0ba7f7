pub mod parse;
pub mod run;

pub use parse::{MapOp, SetOp, parse_map_script, parse_set_script};
pub use run::{LookupStyle, Reply, run_map, run_set};

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads a script from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_script<P: AsRef<Path>>(path: Option<P>) -> io::Result<String> {
    match path {
        Some(p) if p.as_ref() != Path::new("-") => fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
