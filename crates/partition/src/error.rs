//! Result and Error types for voltools-partition

/// Type alias for `Result<T, partition::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `voltools-partition` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to serialise or deserialise a partition document
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// Failure to parse a volume descriptor
    #[error("failed to parse volume descriptor: {0}")]
    ParseError(String),

    /// Partitions can only be generated for a positive count no larger than
    /// [MAX_PARTITIONS](crate::MAX_PARTITIONS)
    #[error("partition count {0} is out of range")]
    InvalidPartitionCount(i64),

    /// A box needs at least two points on every axis
    #[error("point count on axis {axis} must be at least 2 (found {count})")]
    InvalidPointCount { axis: usize, count: i64 },

    /// Grid origin must be finite
    #[error("origin on axis {axis} is not finite (found {origin})")]
    InvalidOrigin { axis: usize, origin: f64 },

    /// Grid spacing must be finite and positive
    #[error("spacing on axis {axis} must be positive (found {spacing})")]
    InvalidSpacing { axis: usize, spacing: f64 },

    /// Bounding box is empty, inverted, or not finite
    #[error("bounds on axis {axis} are invalid (min {min}, max {max})")]
    InvalidBounds { axis: usize, min: f64, max: f64 },

    /// An explicit factor triple could not be used
    #[error("invalid partition factors \"{0}\"")]
    InvalidFactors(String),

    /// Explicit factors disagree with the requested partition count
    #[error("factors give {found} partitions but {expected} were requested")]
    FactorMismatch { expected: i64, found: i64 },

    /// A partition document contains an inverted extent
    #[error("extent of part {part} is inverted on axis {axis}")]
    InvalidExtent { part: usize, axis: usize },

    /// Rank does not exist in the decomposition
    #[error("rank {rank} out of range for {total} partitions")]
    RankOutOfRange { rank: usize, total: usize },
}
