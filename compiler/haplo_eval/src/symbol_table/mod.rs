//! Fixed-capacity symbol table with separate chaining.
//!
//! Keys hash with [`djb2`] modulo the capacity chosen at creation; the
//! table never resizes. Each bucket is a chain of entries in insertion
//! order, and a new key is appended at the tail of its chain.
//!
//! A table created with capacity 0 is uninitialised. Every operation on it
//! fails with [`ErrorCode::E7001`].

use haplo_diagnostic::ErrorCode;
use tracing::debug;

use crate::Symbol;

/// Capacity of the standard table and of [`SymbolTable::default`].
pub const DEFAULT_CAPACITY: usize = 128;

/// Whether [`SymbolTable::update`] added a key or replaced one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Inserted,
    Updated,
}

#[derive(Clone, Debug)]
struct Entry {
    key: String,
    symbol: Symbol,
}

/// Map from names to [`Symbol`]s.
///
/// `Clone` is a deep copy: chains, keys and symbol payloads are all
/// duplicated, so the copy can be mutated independently.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

impl SymbolTable {
    /// Create a table with `capacity` buckets.
    pub fn new(capacity: usize) -> Self {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        SymbolTable { buckets, len: 0 }
    }

    /// Number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `false` for a capacity-0 table.
    #[inline]
    pub fn is_initialised(&self) -> bool {
        !self.buckets.is_empty()
    }

    pub fn lookup(&self, key: &str) -> Result<&Symbol, ErrorCode> {
        let bucket = self.bucket_index(key)?;
        self.buckets[bucket]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.symbol)
            .ok_or(ErrorCode::E7002)
    }

    pub fn lookup_mut(&mut self, key: &str) -> Result<&mut Symbol, ErrorCode> {
        let bucket = self.bucket_index(key)?;
        self.buckets[bucket]
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.symbol)
            .ok_or(ErrorCode::E7002)
    }

    /// Insert `key`, or replace its symbol if present.
    ///
    /// The replaced symbol is dropped.
    pub fn update(
        &mut self,
        key: impl Into<String>,
        symbol: Symbol,
    ) -> Result<UpdateOutcome, ErrorCode> {
        let key = key.into();
        let bucket = self.bucket_index(&key)?;
        let chain = &mut self.buckets[bucket];

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            debug!(key = %key, kind = symbol.kind_name(), "symbol updated");
            entry.symbol = symbol;
            return Ok(UpdateOutcome::Updated);
        }

        debug!(key = %key, kind = symbol.kind_name(), bucket, "symbol inserted");
        chain.push(Entry { key, symbol });
        self.len += 1;
        Ok(UpdateOutcome::Inserted)
    }

    /// Remove `key`. Removing a missing key succeeds.
    pub fn delete(&mut self, key: &str) -> Result<(), ErrorCode> {
        let bucket = self.bucket_index(key)?;
        let chain = &mut self.buckets[bucket];
        if let Some(index) = chain.iter().position(|entry| entry.key == key) {
            chain.remove(index);
            self.len -= 1;
            debug!(key, "symbol deleted");
        }
        Ok(())
    }

    /// All entries, bucket by bucket, each chain in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| (entry.key.as_str(), &entry.symbol))
    }

    fn bucket_index(&self, key: &str) -> Result<usize, ErrorCode> {
        if self.buckets.is_empty() {
            return Err(ErrorCode::E7001);
        }
        Ok(djb2(key.as_bytes()) as usize % self.buckets.len())
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Bernstein's djb2 string hash: seed 5381, `hash * 33 + byte`.
#[inline]
pub fn djb2(bytes: &[u8]) -> u32 {
    bytes.iter().fold(5381u32, |hash, &byte| {
        hash.wrapping_mul(33).wrapping_add(u32::from(byte))
    })
}

#[cfg(test)]
mod tests;
