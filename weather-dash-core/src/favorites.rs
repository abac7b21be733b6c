//! Favorite toggle decisions
//!
//! Nothing here mutates the favorites collection. [`toggle_favorite`] returns a
//! [`FavoriteIntent`] describing the change, and the reducer applies it.

use crate::action::Action;
use crate::error::FavoriteError;
use crate::model::{City, CityId, FavoriteEntry};
use crate::state::WeatherState;
use crate::temperature::fahrenheit_to_celsius;

/// Intended change to the favorites collection
#[derive(Clone, Debug, PartialEq)]
pub enum FavoriteIntent {
    Add(FavoriteEntry),
    Remove(CityId),
}

impl FavoriteIntent {
    pub fn city_id(&self) -> &CityId {
        match self {
            FavoriteIntent::Add(entry) => &entry.city_id,
            FavoriteIntent::Remove(city_id) => city_id,
        }
    }

    pub fn is_add(&self) -> bool {
        matches!(self, FavoriteIntent::Add(_))
    }
}

impl From<FavoriteIntent> for Action {
    fn from(intent: FavoriteIntent) -> Self {
        match intent {
            FavoriteIntent::Add(entry) => Action::FavoritesAdd(entry),
            FavoriteIntent::Remove(city_id) => Action::FavoritesRemove(city_id),
        }
    }
}

/// True iff some entry in `favorites` belongs to `city_id`
///
/// Blank ids are never favorited.
pub fn is_favorite(city_id: &CityId, favorites: &[FavoriteEntry]) -> bool {
    !city_id.is_blank() && favorites.iter().any(|entry| &entry.city_id == city_id)
}

/// Capture the city's current reading as a favorite entry
pub fn favorite_entry(city: &City, weather: &WeatherState) -> Result<FavoriteEntry, FavoriteError> {
    let snapshot = weather
        .current()
        .ok_or_else(|| FavoriteError::MissingSnapshot(city.key.clone()))?;

    Ok(FavoriteEntry {
        city_id: city.key.clone(),
        city_name: city.localized_name.clone(),
        weather_text: snapshot.weather_text.clone(),
        temperature_celsius: fahrenheit_to_celsius(snapshot.fahrenheit()),
        weather_icon: snapshot.weather_icon,
        sports_activities: weather.sports_activities.clone(),
        current_weather: snapshot.clone(),
        forecast: weather.forecast.clone(),
    })
}

/// Decide whether toggling `city` adds or removes it
///
/// The entry is built before the membership check, so a city without a loaded
/// snapshot fails with [`FavoriteError::MissingSnapshot`] in both directions.
/// A blank id is never a favorite and yields `Add`; the store refuses to keep
/// an unkeyed entry.
pub fn toggle_favorite(
    city: &City,
    weather: &WeatherState,
    favorites: &[FavoriteEntry],
) -> Result<FavoriteIntent, FavoriteError> {
    let entry = favorite_entry(city, weather)?;
    if is_favorite(&entry.city_id, favorites) {
        Ok(FavoriteIntent::Remove(entry.city_id))
    } else {
        Ok(FavoriteIntent::Add(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeatherSnapshot;
    use crate::reducer::reducer;
    use crate::state::{AppState, CityWeather};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn city() -> City {
        City::new("123", "Haifa")
    }

    fn weather() -> WeatherState {
        WeatherState {
            current_weather: vec![WeatherSnapshot::new("Cloudy", 7, 68.0)],
            forecast: json!({"Headline": {"Text": "Rain on Friday"}}),
            sports_activities: json!([{"Name": "Running", "Category": "Good"}]),
        }
    }

    #[test]
    fn test_empty_favorites_adds() {
        let favorites = Vec::new();
        assert!(!is_favorite(&CityId::new("123"), &favorites));

        let intent = toggle_favorite(&city(), &weather(), &favorites).unwrap();
        assert!(intent.is_add());
        assert_eq!(intent.city_id().as_str(), "123");
    }

    #[test]
    fn test_favorited_city_removes() {
        let favorites = vec![favorite_entry(&city(), &weather()).unwrap()];
        assert!(is_favorite(&CityId::new("123"), &favorites));

        let intent = toggle_favorite(&city(), &weather(), &favorites).unwrap();
        assert_eq!(intent, FavoriteIntent::Remove(CityId::new("123")));
    }

    #[test]
    fn test_is_favorite_is_idempotent() {
        let favorites = vec![favorite_entry(&city(), &weather()).unwrap()];
        let id = CityId::new("123");

        assert_eq!(is_favorite(&id, &favorites), is_favorite(&id, &favorites));
        assert_eq!(
            is_favorite(&CityId::new("999"), &favorites),
            is_favorite(&CityId::new("999"), &favorites)
        );
    }

    #[test]
    fn test_entry_captures_snapshot_by_value() {
        let entry = favorite_entry(&city(), &weather()).unwrap();

        assert_eq!(entry.city_name, "Haifa");
        assert_eq!(entry.weather_text, "Cloudy");
        assert_eq!(entry.temperature_celsius, 20.0);
        assert_eq!(entry.weather_icon, 7);
        assert_eq!(entry.current_weather, WeatherSnapshot::new("Cloudy", 7, 68.0));
        assert_eq!(entry.sports_activities, json!([{"Name": "Running", "Category": "Good"}]));
        assert_eq!(entry.forecast["Headline"]["Text"], "Rain on Friday");
    }

    #[test]
    fn test_missing_snapshot_aborts() {
        let empty = WeatherState::default();

        let err = toggle_favorite(&city(), &empty, &[]).unwrap_err();
        assert_eq!(err, FavoriteError::MissingSnapshot(CityId::new("123")));

        // Also when the city is already a favorite
        let favorites = vec![favorite_entry(&city(), &weather()).unwrap()];
        assert!(toggle_favorite(&city(), &empty, &favorites).is_err());
    }

    #[test]
    fn test_blank_id_is_never_favorite() {
        let blank = City::new("", "Unknown");
        let entry = favorite_entry(&blank, &weather()).unwrap();
        assert!(!is_favorite(&CityId::new(""), std::slice::from_ref(&entry)));

        // Degrades to "not favorited" instead of failing
        let intent = toggle_favorite(&blank, &weather(), &[entry]).unwrap();
        assert!(intent.is_add());

        let mut state = AppState::new(vec![CityWeather::new(blank, weather())]);
        assert!(!reducer(&mut state, Action::from(intent)));
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_intent_into_action() {
        let entry = favorite_entry(&city(), &weather()).unwrap();

        assert_eq!(
            Action::from(FavoriteIntent::Add(entry.clone())),
            Action::FavoritesAdd(entry)
        );
        assert_eq!(
            Action::from(FavoriteIntent::Remove(CityId::new("123"))),
            Action::FavoritesRemove(CityId::new("123"))
        );
    }
}
