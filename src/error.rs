use thiserror::Error;

/// Failures surfaced by loading and querying the element table.
#[derive(Debug, Error)]
pub enum Error {
    /// The element data could not be read or has malformed rows. Fatal.
    #[error("element data unavailable ({origin}): {source}")]
    DataUnavailable {
        origin: String,
        #[source]
        source: DataFault,
    },

    /// A query matched no element.
    #[error("no element matches '{0}'")]
    NotFound(String),

    /// The user interrupted a blocking wait.
    #[error("interrupted by user")]
    InterruptRequested,
}

/// Underlying reason the element data was unavailable.
#[derive(Debug, Error)]
pub enum DataFault {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("row {row} has {found} fields, expected {expected}")]
    ShortRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}

impl Error {
    pub(crate) fn unavailable(origin: impl Into<String>, fault: impl Into<DataFault>) -> Self {
        Error::DataUnavailable {
            origin: origin.into(),
            source: fault.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
