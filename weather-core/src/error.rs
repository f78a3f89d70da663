use thiserror::Error;

/// What went wrong while fetching a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Location missing or empty; detected before any network call.
    InvalidInput,
    /// The HTTP call produced no usable response.
    TransportFailure,
    /// The body was missing `main.temp` or could not be decoded at all.
    DataMissing,
}

/// Failure raised by a [`crate::TemperatureProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: {message}")]
pub struct ProviderError {
    kind: ErrorKind,
    message: String,
}

impl ProviderError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn invalid_input() -> Self {
        Self::new(ErrorKind::InvalidInput, "City is a required parameter.")
    }

    pub fn transport_failure() -> Self {
        Self::new(ErrorKind::TransportFailure, "Failed to retrieve data.")
    }

    pub fn data_missing() -> Self {
        Self::new(ErrorKind::DataMissing, "Weather data not found")
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
