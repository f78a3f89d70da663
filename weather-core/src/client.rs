use std::fmt;

use crate::{TemperatureProvider, TemperatureReading};

/// Result of [`WeatherClient::get_temperature`]: a reading, or a message ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemperatureReport {
    Reading(TemperatureReading),
    Failure(String),
}

impl TemperatureReport {
    pub fn reading(&self) -> Option<TemperatureReading> {
        match self {
            TemperatureReport::Reading(reading) => Some(*reading),
            TemperatureReport::Failure(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TemperatureReport::Failure(_))
    }
}

impl fmt::Display for TemperatureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureReport::Reading(reading) => write!(f, "{reading}"),
            TemperatureReport::Failure(message) => f.write_str(message),
        }
    }
}

/// Facade over any [`TemperatureProvider`]. Provider failures stop here and
/// come back as text; `get_temperature` has no error path.
#[derive(Debug)]
pub struct WeatherClient {
    provider: Box<dyn TemperatureProvider>,
}

impl WeatherClient {
    pub fn new(provider: Box<dyn TemperatureProvider>) -> Self {
        Self { provider }
    }

    pub async fn get_temperature(&self, location: &str) -> TemperatureReport {
        match self.provider.fetch(location).await {
            Ok(reading) => TemperatureReport::Reading(reading),
            Err(err) => {
                tracing::debug!(kind = ?err.kind(), "provider failed, reporting message");
                TemperatureReport::Failure(err.to_string())
            }
        }
    }
}
