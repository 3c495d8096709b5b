use std::num::NonZeroUsize;

use crate::{ChainedTable, Result};

/// Bucket count used when none is configured (101, a prime)
pub const DEFAULT_BUCKET_COUNT: NonZeroUsize = NonZeroUsize::MIN.saturating_add(100);

/// Table configuration
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Number of buckets the table is created with
    bucket_count: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self { bucket_count: DEFAULT_BUCKET_COUNT }
    }
}

impl Config {
    /// Creates a configuration with the default bucket count
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of buckets.
    ///
    /// The count is fixed for the lifetime of the table. Prime counts spread DJB2 hashes
    /// more evenly.
    ///
    /// Default = 101
    #[must_use]
    pub fn bucket_count(mut self, bucket_count: NonZeroUsize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Creates an empty table from the configuration.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the bucket array cannot be allocated.
    pub fn build(self) -> Result<ChainedTable> {
        ChainedTable::with_bucket_count(self.bucket_count)
    }
}
