use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use crate::{
    error::ProviderError,
    model::{Credential, Location, TemperatureReading},
    transport::{HttpTransport, ReqwestTransport},
};

use super::TemperatureProvider;

/// Current-weather endpoint of the free OpenWeatherMap API.
pub const DEFAULT_ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider<T = ReqwestTransport> {
    credential: Credential,
    endpoint: String,
    transport: T,
}

impl OpenWeatherProvider {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            transport: ReqwestTransport::new(),
        }
    }
}

impl<T: HttpTransport> OpenWeatherProvider<T> {
    pub fn with_transport<U: HttpTransport>(self, transport: U) -> OpenWeatherProvider<U> {
        OpenWeatherProvider { credential: self.credential, endpoint: self.endpoint, transport }
    }

    /// Point the provider at another endpoint, e.g. a proxy.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        Url::parse(endpoint).with_context(|| format!("Invalid OpenWeather endpoint: {endpoint}"))?;
        self.endpoint = endpoint.to_string();
        Ok(self)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request_url(&self, location: &Location) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.endpoint).map_err(|err| {
            tracing::warn!(error = %err, "OpenWeather endpoint is not a valid URL");
            ProviderError::transport_failure()
        })?;

        url.query_pairs_mut()
            .append_pair("q", location.as_str())
            .append_pair("appid", self.credential.expose())
            .append_pair("units", "metric");

        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
}

#[async_trait]
impl<T: HttpTransport> TemperatureProvider for OpenWeatherProvider<T> {
    async fn fetch(&self, location: &str) -> Result<TemperatureReading, ProviderError> {
        let location = Location::parse(location)?;
        let url = self.request_url(&location)?;

        tracing::debug!(%location, "requesting current weather from OpenWeather");

        let body = self.transport.get(url).await.map_err(|err| {
            tracing::warn!(%location, error = %format!("{err:#}"), "OpenWeather request failed");
            ProviderError::transport_failure()
        })?;

        if body.is_empty() {
            tracing::warn!(%location, "OpenWeather returned an empty body");
            return Err(ProviderError::transport_failure());
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|err| {
            tracing::warn!(%location, error = %err, "OpenWeather response lacks main.temp");
            ProviderError::data_missing()
        })?;

        TemperatureReading::from_celsius(parsed.main.temp).ok_or_else(|| {
            tracing::warn!(%location, temp = parsed.main.temp, "OpenWeather main.temp is out of range");
            ProviderError::data_missing()
        })
    }
}
