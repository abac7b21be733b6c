//! Typed payloads for cities, weather readings and favorite entries
//!
//! Field names on [`City`] and [`WeatherSnapshot`] follow the AccuWeather JSON
//! the dashboard is seeded from, so seed files deserialize without a mapping
//! layer in between.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Forecast payload, carried through untouched
pub type Forecast = Value;

/// Sports activity payload, carried through untouched
pub type SportsActivities = Value;

/// AccuWeather location key
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(String);

impl CityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A blank key can never identify a favorite
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A selectable city
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Missing keys deserialize as blank and are treated as "not favorited"
    #[serde(rename = "Key", default)]
    pub key: CityId,
    #[serde(rename = "LocalizedName")]
    pub localized_name: String,
}

impl City {
    pub fn new(key: impl Into<String>, localized_name: impl Into<String>) -> Self {
        Self {
            key: CityId::new(key),
            localized_name: localized_name.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(rename = "Value")]
    pub value: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    #[serde(rename = "Imperial")]
    pub imperial: Measurement,
}

/// One current-conditions reading
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    #[serde(rename = "WeatherText")]
    pub weather_text: String,
    #[serde(rename = "WeatherIcon")]
    pub weather_icon: u32,
    #[serde(rename = "Temperature")]
    pub temperature: Temperature,
}

impl WeatherSnapshot {
    pub fn new(weather_text: impl Into<String>, weather_icon: u32, fahrenheit: f64) -> Self {
        Self {
            weather_text: weather_text.into(),
            weather_icon,
            temperature: Temperature {
                imperial: Measurement { value: fahrenheit },
            },
        }
    }

    pub fn fahrenheit(&self) -> f64 {
        self.temperature.imperial.value
    }
}

/// A favorited city, captured by value when the user favorited it
///
/// Entries are never updated in place. Removing and re-adding a city builds a
/// fresh entry from whatever snapshot is current at that moment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub city_id: CityId,
    pub city_name: String,
    pub weather_text: String,
    pub temperature_celsius: f64,
    pub weather_icon: u32,
    #[serde(default)]
    pub sports_activities: SportsActivities,
    /// Reading the entry was built from
    pub current_weather: WeatherSnapshot,
    #[serde(default)]
    pub forecast: Forecast,
}
