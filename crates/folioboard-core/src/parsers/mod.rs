//! Parsers for portfolio measure exports

pub mod snapshot;

pub use snapshot::SnapshotParser;
