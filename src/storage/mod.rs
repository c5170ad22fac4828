//! Storage Module
//!
//! File-backed record store with linear-scan semantics.
//!
//! ## Responsibilities
//! - Append fixed-width records to the data file
//! - Scan records in file order (lookup, listing, statistics)
//! - Delete by rewriting the file without the first matching record
//! - Treat a missing data file as an empty store
//!
//! ## Delete (copy-filter-swap)
//! ```text
//!  students.dat ──scan──▶ filter (skip first id match) ──write──▶ temp.dat
//!                                                                   │
//!        match: rename temp.dat over students.dat ◀─────────────────┤
//!     no match: remove temp.dat, students.dat untouched ◀───────────┘
//! ```

mod rewrite;
mod scan;
mod stats;
mod store;

pub use scan::RecordIter;
pub use stats::{Statistics, StatsAccumulator};
pub use store::RecordStore;
