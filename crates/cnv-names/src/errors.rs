use thiserror::Error;

/// Failures while loading the channel-name table. All of these are fatal:
/// resolution cannot run without a fully parsed table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("channel table CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    #[error("channel table row {row_index} is missing required field '{field}'")]
    MissingField {
        row_index: usize,
        field: &'static str,
    },

    #[error("channel table row {row_index} has malformed pattern '{pattern}': {message}")]
    MalformedPattern {
        row_index: usize,
        pattern: String,
        message: String,
    },
}
