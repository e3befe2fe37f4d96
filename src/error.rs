//! Defines the error type shared across this crate.
use thiserror::Error;

/// A `Result` alias whose error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Enumeration of the failures this crate surfaces.
/// Anything else (a pure partition, an exhausted candidate set,
/// an attribute value never seen while growing) is normal control flow.
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced feature (column) does not exist in the sample.
    #[error("the feature named `{name}` does not exist")]
    MissingFeature {
        /// Name of the missing feature.
        name: String,
    },

    /// The sample carries no class column.
    /// Use `SampleReader::class_feature` or `Sample::set_class`.
    #[error("the class column is not set")]
    ClassNotSet,

    /// A CSV row whose cell count differs from the header.
    #[error("row at line {line} has {got} cells, expected {expected}")]
    RaggedRow {
        /// 1-based line number within the file.
        line: usize,
        /// Number of columns declared by the header.
        expected: usize,
        /// Number of cells found on this row.
        got: usize,
    },

    /// A cell that should be numeric could not be parsed.
    #[error("the feature `{feature}` holds a non-numeric value `{value}`")]
    NotNumeric {
        /// Name of the feature being discretized.
        feature: String,
        /// The offending cell content.
        value: String,
    },

    /// Tree induction was asked to learn from zero records.
    #[error("no training records to learn from")]
    NoTrainingData,

    /// I/O failure while reading a sample file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure while dumping or parsing a tree as JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
