//! Punch reconciliation: extraction, slot distribution, durations,
//! break and punctuality analysis.

pub mod calculator;
pub mod classifier;
pub mod correction;
pub mod distributor;
pub mod extractor;
pub mod intervals;
pub mod normalizer;
pub mod pipeline;
pub mod punctuality;
pub mod schema;
pub mod summary;

pub use pipeline::{ReconciledTable, RecordEdit, import, reconcile};
