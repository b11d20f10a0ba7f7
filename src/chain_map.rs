//! Fixed-capacity integer hash map with separate chaining.
//!
//! The bucket array is allocated once and never resized. Keys that land in
//! the same bucket share a chain that is scanned linearly, so a skewed key
//! distribution degrades lookups to O(n).

use log::trace;

use crate::error::{Error, Result};

pub const DEFAULT_CAPACITY: usize = 10000;

/// Returned by [`ChainMap::get_or_sentinel`] for absent keys.
pub const NOT_FOUND: i32 = -1;

/// Bucket for `key` among `capacity` buckets.
///
/// Uses the Euclidean remainder so negative keys map into `0..capacity`
/// instead of producing a negative index. Nonnegative keys hash exactly as
/// `key % capacity`.
pub fn bucket_index(key: i32, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    let cap = i64::try_from(capacity).unwrap_or(i64::MAX);
    i64::from(key).rem_euclid(cap) as usize
}

#[derive(Debug, Clone)]
pub struct ChainMap {
    buckets: Vec<Vec<(i32, i32)>>,
    len: usize,
}

impl Default for ChainMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainMap {
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); DEFAULT_CAPACITY],
            len: 0,
        }
    }

    /// Fails instead of aborting when the bucket array cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(capacity)
            .map_err(|e| Error::InvalidCapacity(format!("{} buckets: {}", capacity, e)))?;
        buckets.resize_with(capacity, Vec::new);
        Ok(Self { buckets, len: 0 })
    }

    /// Largest chain in the map.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of buckets. Fixed for the lifetime of the map.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn chain(&self, key: i32) -> &Vec<(i32, i32)> {
        &self.buckets[bucket_index(key, self.buckets.len())]
    }

    fn chain_mut(&mut self, key: i32) -> &mut Vec<(i32, i32)> {
        let idx = bucket_index(key, self.buckets.len());
        &mut self.buckets[idx]
    }

    /// Insert or overwrite. An existing pair keeps its place in the chain.
    /// Returns the previous value, if any.
    pub fn put(&mut self, key: i32, value: i32) -> Option<i32> {
        let chain = self.chain_mut(key);
        for pair in chain.iter_mut() {
            if pair.0 == key {
                return Some(std::mem::replace(&mut pair.1, value));
            }
        }
        if !chain.is_empty() {
            trace!("key {} collides, chain length now {}", key, chain.len() + 1);
        }
        chain.push((key, value));
        self.len += 1;
        None
    }

    pub fn get(&self, key: i32) -> Option<i32> {
        self.chain(key)
            .iter()
            .find(|pair| pair.0 == key)
            .map(|pair| pair.1)
    }

    /// Lookup that reports absence as [`NOT_FOUND`].
    ///
    /// A stored value of `-1` is indistinguishable from a missing key here;
    /// use [`ChainMap::get`] when that matters.
    pub fn get_or_sentinel(&self, key: i32) -> i32 {
        self.get(key).unwrap_or(NOT_FOUND)
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` and returns its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: i32) -> Option<i32> {
        let chain = self.chain_mut(key);
        let pos = chain.iter().position(|pair| pair.0 == key)?;
        let (_, value) = chain.swap_remove(pos);
        self.len -= 1;
        Some(value)
    }

    /// Length of the chain `key` hashes into, whether or not `key` is present.
    pub fn chain_len(&self, key: i32) -> usize {
        self.chain(key).len()
    }

    /// Drops every pair. The bucket count is unchanged.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }

    /// All `(key, value)` pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.buckets.iter().flat_map(|chain| chain.iter().copied())
    }
}
