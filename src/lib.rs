//! # Chain Table
//!
//! A Rust implementation of a fixed-size hash table from string keys to string values.
//!
//! Keys are hashed with DJB2 and each bucket holds a chain of records that collide there.
//! New records go to the head of their chain. The bucket count is set when the table is
//! created and never changes.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaintable::{ChainedTable, Removal};
//!
//! // Create a table with 11 buckets
//! let mut table = ChainedTable::with_buckets(11)?;
//!
//! // Insert values
//! table.insert("Charlie", "(634) 466-1630")?;
//! table.insert("Dennis", "(491) 584-6065")?;
//!
//! // Retrieve values
//! assert_eq!(table.get("Dennis"), Some("(491) 584-6065"));
//! assert_eq!(table.get("Agamemnon"), None);
//!
//! // Update values
//! table.insert("Dennis", "555-0100")?;
//! assert_eq!(table.get("Dennis"), Some("555-0100"));
//!
//! // Remove values
//! assert_eq!(table.remove("Dennis"), Removal::Removed("555-0100".to_string()));
//! assert_eq!(table.get("Dennis"), None);
//!
//! // Tear down
//! assert_eq!(table.destroy(), 1);
//! # Ok::<(), chaintable::Error>(())
//! ```
//!
//! ## Inspecting Buckets
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use chaintable::Config;
//!
//! let mut table = Config::new().bucket_count(NonZeroUsize::new(11).unwrap()).build()?;
//! table.insert("Charlie", "(634) 466-1630")?;
//! table.insert("Dee", "1-214-717-1808")?;
//!
//! // Both keys land in bucket 2, most recent first
//! let bucket = table.buckets().nth(2).unwrap();
//! let keys: Vec<&str> = bucket.records().map(|(key, _)| key).collect();
//! assert_eq!(keys, ["Dee", "Charlie"]);
//!
//! assert!(table.to_string().contains("[2]: (Dee, 1-214-717-1808) -> (Charlie, (634) 466-1630) -> NULL"));
//! # Ok::<(), chaintable::Error>(())
//! ```

/// Module implementing the chained hash table
mod chained_table;
/// Table configuration
mod config;
/// The DJB2 hash function
mod djb2;
/// Error types
mod error;
/// Utility functions and traits for the table
mod utils;

pub use chained_table::{Bucket, Buckets, ChainIter, ChainedTable, Removal};
pub use config::{Config, DEFAULT_BUCKET_COUNT};
pub use djb2::{DJB2_SEED, bucket_index, djb2};
pub use error::{Error, Result};
pub use utils::{TableExtensions, try_from_pairs};
