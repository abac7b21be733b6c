//! Reducer - `(state, action) -> changed`
//!
//! All state mutations happen here. Returns `true` when the UI should
//! re-render.

use crate::action::Action;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> bool {
    match action {
        // ===== Favorites =====
        // A duplicate add is ignored: entries are never updated in place
        Action::FavoritesAdd(entry) => state.favorites.insert(entry),

        Action::FavoritesRemove(city_id) => state.favorites.remove(&city_id),

        // ===== UI =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            true
        }

        // ===== City selection =====
        Action::CitySelectNext => state.select_offset(1),
        Action::CitySelectPrev => state.select_offset(-1),

        // Handled by the main loop
        Action::Quit => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::favorite_entry;
    use crate::model::{City, CityId, WeatherSnapshot};
    use crate::state::{CityWeather, WeatherState};
    use crate::temperature::TempUnit;

    fn state() -> AppState {
        AppState::new(vec![
            CityWeather::new(
                City::new("215854", "Tel Aviv"),
                WeatherState::with_snapshot(WeatherSnapshot::new("Sunny", 1, 86.0)),
            ),
            CityWeather::new(
                City::new("213225", "Jerusalem"),
                WeatherState::with_snapshot(WeatherSnapshot::new("Clear", 33, 59.0)),
            ),
        ])
    }

    #[test]
    fn test_favorites_add_and_remove() {
        let mut state = state();
        let cw = state.cities[0].clone();
        let entry = favorite_entry(&cw.city, &cw.weather).unwrap();

        assert!(reducer(&mut state, Action::FavoritesAdd(entry)));
        assert!(state.is_selected_favorite());

        assert!(reducer(&mut state, Action::FavoritesRemove(cw.city.key.clone())));
        assert!(!state.is_selected_favorite());
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut state = state();
        let cw = state.cities[0].clone();
        let first = favorite_entry(&cw.city, &cw.weather).unwrap();
        let mut second = first.clone();
        second.weather_text = "Hot".into();

        assert!(reducer(&mut state, Action::FavoritesAdd(first)));
        assert!(!reducer(&mut state, Action::FavoritesAdd(second)));
        assert_eq!(state.favorites.len(), 1);
        assert_eq!(state.favorites.entries()[0].weather_text, "Sunny");
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut state = state();
        assert!(!reducer(&mut state, Action::FavoritesRemove(CityId::new("0"))));
    }

    #[test]
    fn test_toggle_units() {
        let mut state = state();
        assert_eq!(state.unit, TempUnit::Celsius);

        reducer(&mut state, Action::UiToggleUnits);
        assert_eq!(state.unit, TempUnit::Fahrenheit);

        reducer(&mut state, Action::UiToggleUnits);
        assert_eq!(state.unit, TempUnit::Celsius);
    }

    #[test]
    fn test_city_selection() {
        let mut state = state();

        assert!(reducer(&mut state, Action::CitySelectNext));
        assert_eq!(state.selected, 1);
        assert!(reducer(&mut state, Action::CitySelectNext));
        assert_eq!(state.selected, 0);
        assert!(reducer(&mut state, Action::CitySelectPrev));
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_quit_does_not_render() {
        let mut state = state();
        assert!(!reducer(&mut state, Action::Quit));
    }
}
