use std::{fmt, iter::Rev, num::NonZeroUsize, slice};

use crate::{
    config::DEFAULT_BUCKET_COUNT,
    djb2::bucket_index,
    error::{Error, Result},
};

/// A stored key-value pair
#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    /// The key, owned by the record
    key: String,
    /// The value associated with the key
    value: String,
}

/// The records that hash to one bucket.
///
/// Records are stored oldest first: prepending to the chain is a push, and chain order
/// (most recently inserted first) is the reverse of storage order.
#[derive(Debug, Clone, Default)]
struct Chain {
    /// Records in storage order
    records: Vec<Record>,
}

impl Chain {
    /// Iterates the chain from head to tail
    fn iter(&self) -> ChainIter<'_> {
        ChainIter { inner: self.records.iter().rev() }
    }

    /// Storage position of the first record in chain order holding `key`
    fn position(&self, key: &str) -> Option<usize> {
        self.records.iter().rposition(|record| record.key == key)
    }
}

/// Copies `s` into freshly reserved storage, reporting allocation failure
fn copy_str(s: &str) -> Result<String> {
    let mut owned = String::new();
    owned.try_reserve_exact(s.len()).map_err(|e| {
        log::warn!("failed to reserve {} bytes for a string copy: {e}", s.len());
        Error::from(e)
    })?;
    owned.push_str(s);
    Ok(owned)
}

/// Outcome of [`ChainedTable::remove`]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The record was unlinked; carries its value
    Removed(String),
    /// The key's bucket holds no records at all
    EmptyBucket,
    /// The key's bucket has records, none with this key
    NotFound,
}

impl Removal {
    /// Returns true if a record was removed
    #[must_use]
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }

    /// Returns the removed value, if any
    #[must_use]
    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Removed(value) => Some(value),
            Self::EmptyBucket | Self::NotFound => None,
        }
    }
}

/// A string-to-string hash table with a fixed number of buckets.
///
/// Keys are hashed with DJB2 and collisions are resolved by separate chaining. The
/// bucket count is chosen at construction and never changes: there is no resizing,
/// so chains grow as the table fills.
///
/// Note: This implementation is not thread-safe. Wrap it in a lock for shared use.
#[derive(Debug, Clone)]
pub struct ChainedTable {
    /// One chain per bucket
    buckets: Box<[Chain]>,
    /// Number of buckets, kept non-zero so indexing is always defined
    bucket_count: NonZeroUsize,
    /// Current number of records across all chains
    size: usize,
}

impl ChainedTable {
    /// Creates an empty table with the default bucket count of 101.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the bucket array cannot be reserved.
    pub fn new() -> Result<Self> {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Creates an empty table with `bucket_count` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroBuckets`] if `bucket_count` is zero, or
    /// [`Error::Allocation`] if the bucket array cannot be reserved.
    pub fn with_buckets(bucket_count: usize) -> Result<Self> {
        let bucket_count = NonZeroUsize::new(bucket_count).ok_or(Error::ZeroBuckets)?;
        Self::with_bucket_count(bucket_count)
    }

    /// Creates an empty table with `bucket_count` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the bucket array cannot be reserved.
    pub fn with_bucket_count(bucket_count: NonZeroUsize) -> Result<Self> {
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count.get()).map_err(|e| {
            log::warn!("failed to reserve {bucket_count} buckets: {e}");
            Error::from(e)
        })?;
        buckets.resize_with(bucket_count.get(), Chain::default);

        log::trace!("created table with {bucket_count} buckets");
        Ok(Self { buckets: buckets.into_boxed_slice(), bucket_count, size: 0 })
    }

    /// Gets the bucket index for a key
    fn index_of(&self, key: &str) -> usize {
        bucket_index(key, self.bucket_count)
    }

    /// Gets the chain for a key
    #[allow(clippy::indexing_slicing)]
    fn chain(&self, key: &str) -> &Chain {
        // bucket_index is always below bucket_count == buckets.len()
        &self.buckets[self.index_of(key)]
    }

    /// Gets the chain at a bucket index produced by `index_of`
    #[allow(clippy::indexing_slicing)]
    fn chain_at_mut(&mut self, index: usize) -> &mut Chain {
        &mut self.buckets[index]
    }

    /// Inserts a key-value pair, or replaces the value of an existing key.
    ///
    /// New keys become the head of their bucket's chain. Updating an existing key keeps the
    /// record where it is and returns the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the record or its string copies cannot be
    /// allocated. The table is left unchanged in that case.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<Option<String>> {
        let index = self.index_of(key);
        let chain = self.chain_at_mut(index);

        if let Some(record) = chain.records.iter_mut().rev().find(|record| record.key == key) {
            // Copy first so a failed allocation leaves the old value in place
            let value = copy_str(value)?;
            let old_value = std::mem::replace(&mut record.value, value);
            log::trace!("updated key {key:?} in bucket {index}");
            return Ok(Some(old_value));
        }

        chain.records.try_reserve(1).map_err(|e| {
            log::warn!("failed to reserve a record in bucket {index}: {e}");
            Error::from(e)
        })?;
        let record = Record { key: copy_str(key)?, value: copy_str(value)? };
        chain.records.push(record);
        self.size = self.size.saturating_add(1);

        log::trace!("inserted key {key:?} into bucket {index}");
        Ok(None)
    }

    /// Retrieves the value for a given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.chain(key).iter().find(|(k, _)| *k == key).map(|(_, value)| value)
    }

    /// Returns true if the table holds a record for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.chain(key).position(key).is_some()
    }

    /// Removes the record for `key`.
    ///
    /// Only the first match in chain order is unlinked. Absence is reported through
    /// [`Removal::EmptyBucket`] or [`Removal::NotFound`], never as an error.
    pub fn remove(&mut self, key: &str) -> Removal {
        let index = self.index_of(key);
        let chain = self.chain_at_mut(index);

        if chain.records.is_empty() {
            log::debug!("no records to delete in bucket {index}");
            return Removal::EmptyBucket;
        }

        let Some(position) = chain.position(key) else {
            log::debug!("key not found: {key}");
            return Removal::NotFound;
        };

        let record = chain.records.remove(position);
        self.size = self.size.saturating_sub(1);

        log::debug!("deleted key: {key}");
        Removal::Removed(record.value)
    }

    /// Returns the number of records in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets, fixed at construction
    #[must_use]
    pub fn bucket_count(&self) -> NonZeroUsize {
        self.bucket_count
    }

    /// Returns the average chain length
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.bucket_count.get() as f64
    }

    /// Returns the length of every chain, in bucket order
    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(|chain| chain.records.len())
    }

    /// Visits every bucket in ascending index order, empty ones included
    #[must_use]
    pub fn buckets(&self) -> Buckets<'_> {
        Buckets { inner: self.buckets.iter().enumerate() }
    }

    /// Returns an iterator over all key-value pairs, in bucket then chain order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buckets.iter().flat_map(Chain::iter)
    }

    /// Copies the table contents into an owned per-bucket listing
    #[must_use]
    pub fn snapshot(&self) -> Vec<(usize, Vec<(String, String)>)> {
        self.buckets()
            .map(|bucket| {
                let records = bucket
                    .records()
                    .map(|(key, value)| (key.to_owned(), value.to_owned()))
                    .collect();
                (bucket.index(), records)
            })
            .collect()
    }

    /// Removes every record, keeping the bucket count
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.records.clear();
        }
        self.size = 0;
    }

    /// Tears the table down, releasing every record.
    ///
    /// Returns the number of records released. The table is consumed, so it cannot be used
    /// afterwards.
    pub fn destroy(self) -> usize {
        let released = self.size;
        let bucket_count = self.bucket_count;
        drop(self);

        log::debug!("destroyed table with {bucket_count} buckets, released {released} records");
        released
    }
}

impl fmt::Display for ChainedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in self.buckets() {
            write!(f, "[{}]: ", bucket.index())?;
            for (key, value) in bucket.records() {
                write!(f, "({key}, {value}) -> ")?;
            }
            writeln!(f, "NULL")?;
        }
        Ok(())
    }
}

/// Iterator over the buckets of a [`ChainedTable`]
#[derive(Debug, Clone)]
pub struct Buckets<'a> {
    /// Chains paired with their bucket index
    inner: std::iter::Enumerate<slice::Iter<'a, Chain>>,
}

impl<'a> Iterator for Buckets<'a> {
    type Item = Bucket<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, chain)| Bucket { index, chain })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Buckets<'_> {}

/// Read-only view of one bucket
#[derive(Debug, Clone, Copy)]
pub struct Bucket<'a> {
    /// Position of the bucket in the table
    index: usize,
    /// The bucket's chain
    chain: &'a Chain,
}

impl<'a> Bucket<'a> {
    /// Returns the bucket index
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of records in the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.records.len()
    }

    /// Returns true if the bucket holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.records.is_empty()
    }

    /// Returns the chain's key-value pairs, most recently inserted first
    #[must_use]
    pub fn records(&self) -> ChainIter<'a> {
        self.chain.iter()
    }
}

/// Iterator over one chain, head to tail
#[derive(Debug, Clone)]
pub struct ChainIter<'a> {
    /// Records walked newest first
    inner: Rev<slice::Iter<'a, Record>>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|record| (record.key.as_str(), record.value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ChainIter<'_> {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet};

    #[derive(Debug, Clone)]
    enum Op {
        Insert(String, String),
        Remove(String),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            ("[a-e]{0,2}", "[a-z]{0,4}").prop_map(|(k, v)| Op::Insert(k, v)),
            "[a-e]{0,2}".prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn insert_then_get_round_trips(key in ".*", value in ".*", buckets in 1usize..64) {
            let mut table = ChainedTable::with_buckets(buckets).unwrap();
            table.insert(&key, &value).unwrap();
            prop_assert_eq!(table.get(&key), Some(value.as_str()));
        }

        #[test]
        fn last_write_wins(key in ".*", first in ".*", second in ".*") {
            let mut table = ChainedTable::with_buckets(11).unwrap();
            table.insert(&key, &first).unwrap();
            prop_assert_eq!(table.insert(&key, &second).unwrap(), Some(first));
            prop_assert_eq!(table.len(), 1);
            prop_assert_eq!(table.get(&key), Some(second.as_str()));
        }

        #[test]
        fn behaves_like_hash_map(ops in prop::collection::vec(op(), 0..64), buckets in 1usize..8) {
            let mut table = ChainedTable::with_buckets(buckets).unwrap();
            let mut model: HashMap<String, String> = HashMap::new();

            for op in ops {
                match op {
                    Op::Insert(key, value) => {
                        let old = table.insert(&key, &value).unwrap();
                        prop_assert_eq!(old, model.insert(key, value));
                    }
                    Op::Remove(key) => {
                        let before = table.len();
                        let removal = table.remove(&key);
                        match model.remove(&key) {
                            Some(value) => {
                                prop_assert_eq!(removal, Removal::Removed(value));
                                prop_assert_eq!(table.len(), before - 1);
                            }
                            None => {
                                prop_assert!(!removal.is_removed());
                                prop_assert_eq!(table.len(), before);
                            }
                        }
                    }
                }
            }

            prop_assert_eq!(table.len(), model.len());
            for (key, value) in &model {
                prop_assert_eq!(table.get(key), Some(value.as_str()));
            }

            // every key lives once, in the bucket its hash selects
            let bucket_count = table.bucket_count();
            for bucket in table.buckets() {
                let mut seen = HashSet::new();
                for (key, _) in bucket.records() {
                    prop_assert!(seen.insert(key));
                    prop_assert_eq!(bucket_index(key, bucket_count), bucket.index());
                }
            }
        }

        #[test]
        fn absent_keys_are_not_found(keys in prop::collection::vec("[a-z]{1,6}", 0..32), probe in "[A-Z]{1,6}") {
            let mut table = ChainedTable::with_buckets(11).unwrap();
            for key in &keys {
                table.insert(key, "v").unwrap();
            }
            prop_assert_eq!(table.get(&probe), None);
            prop_assert!(!table.remove(&probe).is_removed());
            prop_assert_eq!(table.len(), keys.iter().collect::<HashSet<_>>().len());
        }
    }
}
