//! Split query sequences by their BLAST tabular hits.
//!
//! # Overview
//! After searching a set of query sequences with BLAST (`-outfmt 6`), `blastsplit` decides
//! which queries are already accounted for and which still need further analysis:
//! * **mapped** queries have at least one hit with an e-value at or below a cutoff. Those hits
//!   are written to a tab-separated table with a header of column names.
//! * **unmapped** queries have no such hit. Their records are copied from the query FASTA
//!   file, in their original order.
//!
//! ## Column names
//! A tabular hit table carries no header, so the columns are named from the format
//! specification that produced it. For example, `"6 qseqid sseqid evalue"` names three columns,
//! and `"6 std"` names the 12 standard fields:
//! ```text
//! qseqid sseqid pident length mismatch gapopen qstart qend sstart send evalue bitscore
//! ```
//! Tokens containing the version marker `6` are dropped. The number of resolved names must
//! equal the number of columns in the table, otherwise the run fails with
//! [`Error::ColumnMismatch`].
//!
//! ## Empty results
//! When the hit table does not exist or holds no rows, the mapped output is created as a
//! zero-byte marker file and every query is written to the unmapped output.
//!
//! ## Example
//! ```no_run
//! use blastsplit::*;
//!
//! let config = SplitConfig::new(
//!     "hits.tsv",
//!     "query.fa",
//!     "mapped.tsv",
//!     "unmapped.fa",
//!     1e-5,
//!     "6 std",
//! );
//! let summary = parse_blast(&config).unwrap_or_else(|e| panic!("{e}"));
//! println!("{} queries left unmapped", summary.unmapped_queries);
//! ```

pub mod config;
pub mod errors;
pub mod field;
pub mod hit_table;
pub mod logging;
pub mod ops;
pub mod outfmt;
mod split;

mod parse_utils;

// commonly used functions and types

pub use crate::config::SplitConfig;
pub use crate::errors::{Error, Result};
pub use crate::field::*;
pub use crate::hit_table::*;
pub use crate::outfmt::OutFmt;
pub use crate::split::*;
