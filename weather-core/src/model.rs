use std::fmt;

use crate::error::ProviderError;

/// City name to look up. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(String);

impl Location {
    /// Trims surrounding whitespace; empty input is rejected.
    pub fn parse(raw: &str) -> Result<Self, ProviderError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProviderError::invalid_input());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// API key handed to a provider at construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self(api_key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Whole-degree Celsius temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemperatureReading(i64);

impl TemperatureReading {
    /// Rounds half away from zero, so 20.5 becomes 21 and -20.5 becomes -21.
    /// Returns `None` for non-finite values or ones outside the `i64` range.
    pub fn from_celsius(value: f64) -> Option<Self> {
        let rounded = value.round();
        // i64::MAX as f64 is 2^63, which is itself out of range.
        if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
            return None;
        }

        Some(Self(rounded as i64))
    }

    pub fn celsius(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
