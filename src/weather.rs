//! Console weather viewer
//!
//! Fetches current conditions from OpenWeatherMap, plays a short ASCII
//! animation for the condition and prints a report.

use crate::config::Config;
use crate::error::{AssistError, AssistResult};
use serde::Deserialize;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

const SUN_FRAMES: &[&str] = &["  \\ O /  ", " -- O -- ", "  / O \\  ", " -- O -- "];

const RAIN_FRAMES: &[&str] = &["  _`_`_  ", " ( /\\/ ) ", " |\\/\\/| ", " /\\|/\\/ "];

const ANIMATION_CYCLES: usize = 5;
const FRAME_DELAY: Duration = Duration::from_millis(150);
const RULE: &str = "=================================================";

/// Static label for a condition
pub fn icon(condition: &str) -> Option<&'static str> {
    match condition {
        "Clear" => Some("☀️ Clear Sky"),
        "Clouds" => Some("☁️ Cloudy/Overcast"),
        "Rain" => Some("🌧️ Rainy"),
        "Drizzle" => Some("💦 Light Rain/Drizzle"),
        "Thunderstorm" => Some("⛈️ Stormy"),
        "Snow" => Some("❄️ Snowy"),
        "Mist" => Some("🌫️ Fog/Mist"),
        _ => None,
    }
}

/// Animation frames for a condition, if it has any
pub fn frames(condition: &str) -> Option<(&'static str, &'static [&'static str])> {
    match condition {
        "Rain" | "Drizzle" | "Thunderstorm" | "Snow" => Some(("Rain/Snow", RAIN_FRAMES)),
        "Clear" => Some(("Sun", SUN_FRAMES)),
        _ => None,
    }
}

/// Measurement units understood by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn parse(value: &str) -> AssistResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            other => Err(AssistError::Config(format!(
                "Unknown weather units '{}' (use metric or imperial)",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Units::Metric => 'C',
            Units::Imperial => 'F',
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    sys: Option<ApiSys>,
    main: ApiMain,
    #[serde(default)]
    weather: Vec<ApiCondition>,
}

#[derive(Debug, Deserialize)]
struct ApiSys {
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    main: String,
    description: String,
}

/// Current conditions for one location
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    pub country: String,
    pub temperature: f64,
    pub humidity: u8,
    pub condition: String,
    pub description: String,
    pub units: Units,
}

impl WeatherReport {
    /// Build a report from an OpenWeatherMap `/weather` body
    pub fn from_json(body: &str, units: Units) -> AssistResult<Self> {
        let value: serde_json::Value = serde_json::from_str(body)?;

        // A "city not found" body has no `main`, so check `cod` before decoding.
        if matches!(value.get("cod"), Some(cod) if *cod == "404" || *cod == 404) {
            return Err(AssistError::NotFound("location".to_string()));
        }

        let api: ApiResponse = serde_json::from_value(value)?;
        let condition = api.weather.into_iter().next();

        Ok(Self {
            location: api.name.unwrap_or_else(|| "Unknown Location".to_string()),
            country: api.sys.and_then(|s| s.country).unwrap_or_default(),
            temperature: api.main.temp,
            humidity: api.main.humidity,
            condition: condition
                .as_ref()
                .map_or_else(|| "N/A".to_string(), |c| c.main.clone()),
            description: condition
                .map_or_else(|| "N/A".to_string(), |c| capitalize(&c.description)),
            units,
        })
    }

    pub fn render(&self) -> String {
        format!(
            "\n[ 🌍 Weather Report for {}, {} ]\n{RULE}\n\
             🌡️ Temperature: {:.1}°{}\n\
             💧 Humidity:    {}%\n\
             ☀️ Conditions:  {} ({})\n{RULE}",
            self.location,
            self.country,
            self.temperature,
            self.units.symbol(),
            self.humidity,
            self.description,
            self.condition
        )
    }
}

/// First letter upper-cased, the rest lower-cased
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// OpenWeatherMap client
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    units: Units,
    client: reqwest::Client,
}

impl WeatherClient {
    pub fn new(config: &Config) -> AssistResult<Self> {
        if config.weather_api_key.trim().is_empty() {
            return Err(AssistError::Config(
                "No OpenWeatherMap API key. Set weather_api_key in the config \
                 or OPENWEATHER_API_KEY."
                    .to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url: config.weather_base_url.clone(),
            api_key: config.weather_api_key.trim().to_string(),
            units: Units::parse(&config.weather_units)?,
            client,
        })
    }

    /// Current weather for a city name or ZIP code
    pub async fn current(&self, location: &str) -> AssistResult<WeatherReport> {
        let location = location.trim();
        if location.is_empty() {
            return Err(AssistError::InvalidInput(
                "Location cannot be empty.".to_string(),
            ));
        }

        info!("🌦️ Fetching weather for {}", location);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Weather API {} body: {}", status, body);

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AssistError::NotFound(format!(
                "Location '{}' not found.",
                location
            )));
        }
        if !status.is_success() {
            return Err(AssistError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        WeatherReport::from_json(&body, self.units).map_err(|e| match e {
            AssistError::NotFound(_) => {
                AssistError::NotFound(format!("Location '{}' not found.", location))
            }
            other => other,
        })
    }
}

/// Play the condition's animation, or print its icon once
pub async fn animate<W: Write>(out: &mut W, condition: &str) -> AssistResult<()> {
    let Some((name, reel)) = frames(condition) else {
        writeln!(out, "\n--- {} Animation ---", icon(condition).unwrap_or(condition))?;
        return Ok(());
    };

    writeln!(out, "\n--- Simulating {} Animation ({}) ---", name, condition)?;
    for _ in 0..ANIMATION_CYCLES {
        for frame in reel {
            write!(out, "\r{}", frame)?;
            out.flush()?;
            tokio::time::sleep(FRAME_DELAY).await;
        }
    }
    writeln!(out, "\n-------------------------------------------")?;
    Ok(())
}
