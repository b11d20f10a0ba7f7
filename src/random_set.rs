use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

/// Integer set with O(1) average insert, remove and uniform random pick.
///
/// `dense` holds the members contiguously; `sparse` maps each member to its
/// slot in `dense`. Removal moves the last member into the freed slot, so
/// slots are not stable and are never handed out.
#[derive(Debug, Clone)]
pub struct RandomizedSet<R = StdRng> {
    dense: Vec<i32>,
    sparse: HashMap<i32, usize>,
    rng: R,
}

impl Default for RandomizedSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomizedSet {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic draws for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomizedSet<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            dense: Vec::new(),
            sparse: HashMap::new(),
            rng,
        }
    }

    /// Returns false if `val` was already present.
    pub fn insert(&mut self, val: i32) -> bool {
        if self.sparse.contains_key(&val) {
            return false;
        }
        self.sparse.insert(val, self.dense.len());
        self.dense.push(val);
        true
    }

    /// Returns false if `val` was not present.
    pub fn remove(&mut self, val: i32) -> bool {
        let Some(idx) = self.sparse.remove(&val) else {
            return false;
        };
        let last = self.dense.len() - 1;
        if idx != last {
            let moved = self.dense[last];
            self.dense[idx] = moved;
            self.sparse.insert(moved, idx);
        }
        self.dense.pop();
        true
    }

    /// Uniformly random member.
    pub fn get_random(&mut self) -> Result<i32> {
        if self.dense.is_empty() {
            return Err(Error::EmptySet);
        }
        let idx = self.rng.random_range(0..self.dense.len());
        Ok(self.dense[idx])
    }

    pub fn contains(&self, val: i32) -> bool {
        self.sparse.contains_key(&val)
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    pub fn clear(&mut self) {
        self.dense.clear();
        self.sparse.clear();
    }

    /// Members in no particular order. The order changes on removal.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.dense.iter().copied()
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert_eq!(self.dense.len(), self.sparse.len());
        for (i, v) in self.dense.iter().enumerate() {
            assert_eq!(self.sparse.get(v), Some(&i), "slot of {} is stale", v);
        }
    }
}
