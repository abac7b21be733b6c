//! Application state - single source of truth
//!
//! Components receive `&AppState` as props and never mutate it. Only the
//! reducer changes state.

use serde::Deserialize;

use crate::favorites::is_favorite;
use crate::model::{City, CityId, FavoriteEntry, Forecast, SportsActivities, WeatherSnapshot};
use crate::temperature::TempUnit;

/// Weather readings for one city, shaped like the weather store exposes them
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WeatherState {
    #[serde(rename = "currentWeather", default)]
    pub current_weather: Vec<WeatherSnapshot>,
    #[serde(default)]
    pub forecast: Forecast,
    #[serde(rename = "SportsActivities", default)]
    pub sports_activities: SportsActivities,
}

impl WeatherState {
    pub fn with_snapshot(snapshot: WeatherSnapshot) -> Self {
        Self {
            current_weather: vec![snapshot],
            ..Default::default()
        }
    }

    /// The first reading, if one is loaded
    pub fn current(&self) -> Option<&WeatherSnapshot> {
        self.current_weather.first()
    }
}

/// A city together with its weather
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CityWeather {
    pub city: City,
    #[serde(flatten)]
    pub weather: WeatherState,
}

impl CityWeather {
    pub fn new(city: City, weather: WeatherState) -> Self {
        Self { city, weather }
    }
}

/// Favorites collection, at most one entry per city
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FavoritesState {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesState {
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn contains(&self, city_id: &CityId) -> bool {
        is_favorite(city_id, &self.entries)
    }

    /// Returns `false` (and keeps the existing entry) if the city is already
    /// present or the entry has a blank id
    pub fn insert(&mut self, entry: FavoriteEntry) -> bool {
        if entry.city_id.is_blank() || self.contains(&entry.city_id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Returns `false` if the city was not a favorite
    pub fn remove(&mut self, city_id: &CityId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.city_id != city_id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the UI needs to render
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Seeded cities (never fetched at runtime)
    pub cities: Vec<CityWeather>,

    /// Index into `cities`
    pub selected: usize,

    pub favorites: FavoritesState,

    pub unit: TempUnit,
}

impl AppState {
    pub fn new(cities: Vec<CityWeather>) -> Self {
        Self {
            cities,
            ..Default::default()
        }
    }

    pub fn with_unit(mut self, unit: TempUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn selected_city(&self) -> Option<&CityWeather> {
        self.cities.get(self.selected)
    }

    /// Select a city by key, returns `false` if no seeded city has it
    pub fn select(&mut self, city_id: &CityId) -> bool {
        match self.cities.iter().position(|c| &c.city.key == city_id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Move the selection by `offset`, wrapping around
    pub fn select_offset(&mut self, offset: isize) -> bool {
        let len = self.cities.len();
        if len <= 1 {
            return false;
        }
        let next = (self.selected as isize + offset).rem_euclid(len as isize) as usize;
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    pub fn is_selected_favorite(&self) -> bool {
        self.selected_city()
            .is_some_and(|c| self.favorites.contains(&c.city.key))
    }
}
