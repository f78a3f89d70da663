use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use weather_core::{
    Config, ProviderId, TemperatureProvider, TemperatureReport, WeatherClient,
    provider::{provider_from_config, provider_with_key},
};

/// Key used when neither a flag nor the config supplies one.
const PLACEHOLDER_API_KEY: &str = "YOUR API KEY";

const DEFAULT_CITY: &str = "London";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current temperature for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for a specific provider.
    Configure {
        /// Provider short name, e.g. "openweather".
        provider: String,
    },

    /// Show the current temperature for a city.
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// City name.
    #[arg(default_value = DEFAULT_CITY)]
    pub city: String,

    /// Provider to use; defaults to the configured default, then "openweather".
    #[arg(long)]
    pub provider: Option<String>,

    /// API key; overrides the stored one.
    #[arg(long)]
    pub api_key: Option<String>,
}

impl Default for ShowArgs {
    fn default() -> Self {
        Self { city: DEFAULT_CITY.to_string(), provider: None, api_key: None }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure { provider }) => configure(&provider),
            Some(Command::Show(args)) => show(args).await,
            None => show(ShowArgs::default()).await,
        }
    }
}

fn configure(provider: &str) -> Result<()> {
    let id = ProviderId::try_from(provider)?;

    let mut config = Config::load()?;

    let api_key = inquire::Password::new(&format!("API key for {id}:"))
        .without_confirmation()
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    config.upsert_provider_api_key(id, normalize_api_key(&api_key)?);
    let path = config.save()?;

    tracing::info!(provider = %id, path = %path.display(), "provider configured");
    println!("Saved {id} credentials to {}", path.display());

    Ok(())
}

fn normalize_api_key(raw: &str) -> Result<String> {
    let key = raw.trim();
    if key.is_empty() {
        bail!("API key must not be empty");
    }

    Ok(key.to_string())
}

async fn show(args: ShowArgs) -> Result<()> {
    let config = Config::load()?;
    let provider = resolve_provider(&args, &config)?;

    let client = WeatherClient::new(provider);
    let report = client.get_temperature(&args.city).await;

    println!("{}", render(&args.city, &report));

    Ok(())
}

fn resolve_provider(args: &ShowArgs, config: &Config) -> Result<Box<dyn TemperatureProvider>> {
    let id = match args.provider.as_deref() {
        Some(name) => ProviderId::try_from(name)?,
        None => config.default_provider_id().unwrap_or(ProviderId::OpenWeather),
    };

    if let Some(api_key) = args.api_key.as_deref() {
        return provider_with_key(id, api_key, config);
    }

    if config.is_provider_configured(id) {
        return provider_from_config(id, config);
    }

    tracing::warn!(
        provider = %id,
        "no API key configured; using a placeholder. Run `weather configure {id}` to set one"
    );
    provider_with_key(id, PLACEHOLDER_API_KEY, config)
}

fn render(city: &str, report: &TemperatureReport) -> String {
    match report {
        TemperatureReport::Reading(reading) => {
            format!("Current temperature in {city}: {reading}°C")
        }
        TemperatureReport::Failure(message) => message.clone(),
    }
}
