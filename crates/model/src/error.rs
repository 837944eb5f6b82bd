use thiserror::Error;

/// A raw dataset item that cannot become a valid record.
///
/// These are per-record failures: the batch ingest drops the record and
/// continues, it never aborts the batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedRecordError {
    /// Point record without a finite longitude/latitude pair.
    #[error("point record {0:?} has a missing or non-finite position")]
    BadPosition(String),

    /// Region record with an empty ring set.
    #[error("region record {0:?} has no geometry rings")]
    EmptyGeometry(String),
}
