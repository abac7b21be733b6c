//! Seed data loading
//!
//! The dashboard does not fetch weather. Cities and their readings come from a
//! JSON document shaped like the AccuWeather responses:
//!
//! ```json
//! {
//!   "cities": [
//!     {
//!       "city": { "Key": "215854", "LocalizedName": "Tel Aviv" },
//!       "currentWeather": [
//!         { "WeatherText": "Sunny", "WeatherIcon": 1,
//!           "Temperature": { "Imperial": { "Value": 86.0 } } }
//!       ],
//!       "forecast": { "DailyForecasts": [] },
//!       "SportsActivities": []
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SeedError;
use crate::state::CityWeather;

#[derive(Debug, Deserialize)]
struct Seed {
    #[serde(default)]
    cities: Vec<CityWeather>,
}

pub fn parse_seed(json: &str) -> Result<Vec<CityWeather>, SeedError> {
    let seed: Seed = serde_json::from_str(json)?;
    if seed.cities.is_empty() {
        return Err(SeedError::Empty);
    }

    for entry in &seed.cities {
        if entry.city.key.is_blank() {
            tracing::warn!(city = %entry.city.localized_name, "Seeded city has no key");
        }
        if entry.weather.current().is_none() {
            tracing::warn!(city = %entry.city.localized_name, "Seeded city has no current weather");
        }
    }

    tracing::info!(cities = seed.cities.len(), "Loaded seed data");
    Ok(seed.cities)
}

pub fn load_seed(path: &Path) -> Result<Vec<CityWeather>, SeedError> {
    let json = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"{
        "cities": [
            {
                "city": {"Key": "215854", "LocalizedName": "Tel Aviv"},
                "currentWeather": [
                    {"WeatherText": "Sunny", "WeatherIcon": 1,
                     "Temperature": {"Imperial": {"Value": 86.0, "Unit": "F"}}}
                ],
                "forecast": {"DailyForecasts": []},
                "SportsActivities": [{"Name": "Beach", "Category": "Excellent"}]
            },
            {
                "city": {"Key": "213225", "LocalizedName": "Jerusalem"}
            }
        ]
    }"#;

    #[test]
    fn test_parse_seed() {
        let cities = parse_seed(SEED).unwrap();

        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].city.localized_name, "Tel Aviv");
        assert_eq!(cities[0].weather.current().unwrap().fahrenheit(), 86.0);
        assert_eq!(cities[0].weather.sports_activities[0]["Name"], "Beach");
        assert!(cities[1].weather.current().is_none());
    }

    #[test]
    fn test_empty_seed() {
        assert!(matches!(parse_seed(r#"{"cities": []}"#), Err(SeedError::Empty)));
        assert!(matches!(parse_seed("{}"), Err(SeedError::Empty)));
    }

    #[test]
    fn test_malformed_seed() {
        assert!(matches!(parse_seed("not json"), Err(SeedError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_seed(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
