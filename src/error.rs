use thiserror::Error;

/// Errors raised while collecting or booking an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("office not available: {0}")]
    UnknownOffice(String),

    #[error("{day}/{month}/{year} is not a valid calendar date")]
    InvalidDate { year: i32, month: i64, day: i64 },

    #[error("{field} must be a whole number, got {value:?}")]
    NonIntegerInput { field: &'static str, value: String },

    #[error("appointment is missing the {0} field")]
    MissingField(&'static str),
}

impl BookingError {
    /// Whether the console driver asks for the same field again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BookingError::EmptyField { .. }
                | BookingError::InvalidEmail(_)
                | BookingError::UnknownOffice(_)
        )
    }
}

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BOOKING_YEAR must be a year, got {0:?}")]
    InvalidYear(String),

    #[error("unknown notification sink {0:?} (expected console, log or outbox)")]
    UnknownSink(String),

    #[error("NOTIFY_SINKS lists no sinks")]
    EmptySinkList,

    #[error("failed to load offices from {path}: {source}")]
    OfficeFile {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("office file {0} has no \"office\" column")]
    MissingOfficeColumn(String),
}
