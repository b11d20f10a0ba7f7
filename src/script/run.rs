use std::fmt;

use log::debug;
use rand::Rng;

use crate::chain_map::{ChainMap, NOT_FOUND};
use crate::random_set::RandomizedSet;
use crate::script::parse::{MapOp, SetOp};

/// How a map lookup miss is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupStyle {
    /// `null` on a miss.
    #[default]
    Optional,
    /// `-1` on a miss, as classic map exercises expect.
    Sentinel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Null,
    Int(i32),
    Bool(bool),
    Error(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Null => write!(f, "null"),
            Reply::Int(v) => write!(f, "{}", v),
            Reply::Bool(b) => write!(f, "{}", b),
            Reply::Error(msg) => write!(f, "error: {}", msg),
        }
    }
}

pub fn run_map(map: &mut ChainMap, ops: &[MapOp], style: LookupStyle) -> Vec<Reply> {
    ops.iter()
        .map(|op| {
            let reply = match *op {
                MapOp::Put(k, v) => {
                    map.put(k, v);
                    Reply::Null
                }
                MapOp::Get(k) => match (map.get(k), style) {
                    (Some(v), _) => Reply::Int(v),
                    (None, LookupStyle::Optional) => Reply::Null,
                    (None, LookupStyle::Sentinel) => Reply::Int(NOT_FOUND),
                },
                MapOp::Remove(k) => {
                    map.remove(k);
                    Reply::Null
                }
            };
            debug!("{:?} -> {}", op, reply);
            reply
        })
        .collect()
}

/// Runs every op. A failed draw is recorded as a reply and the run continues.
pub fn run_set<R: Rng>(set: &mut RandomizedSet<R>, ops: &[SetOp]) -> Vec<Reply> {
    ops.iter()
        .map(|op| {
            let reply = match *op {
                SetOp::Insert(v) => Reply::Bool(set.insert(v)),
                SetOp::Remove(v) => Reply::Bool(set.remove(v)),
                SetOp::GetRandom => match set.get_random() {
                    Ok(v) => Reply::Int(v),
                    Err(e) => Reply::Error(e.to_string()),
                },
            };
            debug!("{:?} -> {}", op, reply);
            reply
        })
        .collect()
}
