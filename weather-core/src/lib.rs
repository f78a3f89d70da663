//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The `TemperatureProvider` capability and its OpenWeather implementation
//! - `WeatherClient`, the facade that turns provider failures into display text
//! - Configuration & credentials handling
//! - Shared domain models (locations, readings, errors)
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod transport;

pub use client::{TemperatureReport, WeatherClient};
pub use config::{Config, ProviderConfig};
pub use error::{ErrorKind, ProviderError};
pub use model::{Credential, Location, TemperatureReading};
pub use provider::{ProviderId, TemperatureProvider};
pub use transport::{HttpTransport, ReqwestTransport};
