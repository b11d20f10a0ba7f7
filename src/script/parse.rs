//! Line-oriented operation scripts.
//!
//! One command per line, whitespace separated, command names matched
//! case-insensitively. Blank lines and `#` comments are skipped.
//!
//! ```text
//! # map
//! put 7 100
//! get 7
//! remove 7
//!
//! # set
//! insert 1
//! getRandom
//! ```

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapOp {
    Put(i32, i32),
    Get(i32),
    Remove(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    Insert(i32),
    Remove(i32),
    GetRandom,
}

fn script_err(line: usize, message: impl Into<String>) -> Error {
    Error::Script {
        line,
        message: message.into(),
    }
}

/// Yields `(line_number, command, args)` for every non-blank, non-comment line.
fn commands(text: &str) -> impl Iterator<Item = (usize, String, Vec<&str>)> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let mut tokens = line.split_whitespace();
        let cmd = tokens.next()?.to_ascii_lowercase();
        Some((i + 1, cmd, tokens.collect()))
    })
}

fn int_args<const N: usize>(line: usize, cmd: &str, args: &[&str]) -> Result<[i32; N]> {
    if args.len() != N {
        return Err(script_err(
            line,
            format!("{} takes {} argument(s), got {}", cmd, N, args.len()),
        ));
    }
    let mut out = [0i32; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .map_err(|_| script_err(line, format!("{}: not a 32-bit integer: {}", cmd, arg)))?;
    }
    Ok(out)
}

pub fn parse_map_script(text: &str) -> Result<Vec<MapOp>> {
    let mut ops = Vec::new();
    for (line, cmd, args) in commands(text) {
        let op = match cmd.as_str() {
            "put" => {
                let [k, v] = int_args(line, &cmd, &args)?;
                MapOp::Put(k, v)
            }
            "get" => {
                let [k] = int_args(line, &cmd, &args)?;
                MapOp::Get(k)
            }
            "remove" => {
                let [k] = int_args(line, &cmd, &args)?;
                MapOp::Remove(k)
            }
            _ => return Err(script_err(line, format!("unknown map command: {}", cmd))),
        };
        ops.push(op);
    }
    Ok(ops)
}

pub fn parse_set_script(text: &str) -> Result<Vec<SetOp>> {
    let mut ops = Vec::new();
    for (line, cmd, args) in commands(text) {
        let op = match cmd.as_str() {
            "insert" => {
                let [v] = int_args(line, &cmd, &args)?;
                SetOp::Insert(v)
            }
            "remove" => {
                let [v] = int_args(line, &cmd, &args)?;
                SetOp::Remove(v)
            }
            "getrandom" | "random" => {
                int_args::<0>(line, &cmd, &args)?;
                SetOp::GetRandom
            }
            _ => return Err(script_err(line, format!("unknown set command: {}", cmd))),
        };
        ops.push(op);
    }
    Ok(ops)
}
