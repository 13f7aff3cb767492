use thiserror::Error;

/// Reasons a record is rejected by manual entry or bulk import
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("location is empty")]
    EmptyLocation,

    #[error("traffic level is empty")]
    EmptyTrafficLevel,

    #[error("air quality index is not an integer: {0:?}")]
    InvalidAirQuality(String),

    #[error("expected 3 comma separated fields, found {0}")]
    WrongFieldCount(usize),
}

/// Errors raised while trying to sound the emergency chime
#[derive(Error, Debug)]
pub enum ChimeError {
    #[error("audio output unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while exporting the table
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(String),

    #[error("exported data is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => ExportError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => ExportError::Csv(error.to_string()),
        }
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for ExportError {
    fn from(error: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        ExportError::Io(error.into_error())
    }
}
