//! Utility functions and traits for `ChainedTable`

use crate::{ChainedTable, Result};

/// Extension trait for tables that provides additional utility methods
pub trait TableExtensions {
    /// Returns the keys of the table as a Vec, in bucket then chain order
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the table as a Vec, in bucket then chain order
    fn values(&self) -> Vec<String>;
}

impl TableExtensions for ChainedTable {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    fn values(&self) -> Vec<String> {
        self.iter().map(|(_, v)| v.to_owned()).collect()
    }
}

/// Creates a `ChainedTable` with `bucket_count` buckets from an iterator of key-value pairs.
///
/// Later pairs overwrite earlier ones with the same key.
///
/// # Errors
///
/// Will return `Err` if `bucket_count` is zero or any allocation fails.
pub fn try_from_pairs<I, K, V>(bucket_count: usize, iter: I) -> Result<ChainedTable>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut table = ChainedTable::with_buckets(bucket_count)?;

    for (key, value) in iter {
        table.insert(key.as_ref(), value.as_ref())?;
    }

    Ok(table)
}
