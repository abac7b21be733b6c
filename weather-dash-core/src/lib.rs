//! Core state for the weather dashboard
//!
//! The dashboard follows a Redux/Elm-style flow. Components read an
//! [`AppState`] and emit [`Action`]s, the [`reducer`] is the only place state
//! changes, and a `tui_dispatch::Store` ties the two together.
//!
//! # Favorites
//!
//! Toggling a favorite is a two-step affair:
//!
//! 1. [`toggle_favorite`] inspects the selected city, its weather and the
//!    current favorites, and returns a [`FavoriteIntent`]. Nothing is mutated.
//! 2. The intent is converted into an [`Action`] and dispatched. The reducer
//!    inserts or removes the entry, keeping at most one entry per city.
//!
//! ```
//! use tui_dispatch::Store;
//! use weather_dash_core::{
//!     reducer, toggle_favorite, Action, AppState, City, CityWeather, WeatherSnapshot, WeatherState,
//! };
//!
//! let city = City::new("215854", "Tel Aviv");
//! let weather = WeatherState::with_snapshot(WeatherSnapshot::new("Sunny", 1, 86.0));
//! let mut store = Store::new(AppState::new(vec![CityWeather::new(city, weather)]), reducer);
//!
//! let selected = store.state().selected_city().unwrap();
//! let intent = toggle_favorite(&selected.city, &selected.weather, store.state().favorites.entries())
//!     .unwrap();
//! store.dispatch(Action::from(intent));
//!
//! assert_eq!(store.state().favorites.len(), 1);
//! assert_eq!(store.state().favorites.entries()[0].temperature_celsius, 30.0);
//! ```

pub mod action;
pub mod error;
pub mod favorites;
pub mod model;
pub mod reducer;
pub mod seed;
pub mod state;
pub mod temperature;

pub use action::Action;
pub use error::{FavoriteError, SeedError};
pub use favorites::{favorite_entry, is_favorite, toggle_favorite, FavoriteIntent};
pub use model::{
    City, CityId, FavoriteEntry, Forecast, Measurement, SportsActivities, Temperature,
    WeatherSnapshot,
};
pub use reducer::reducer;
pub use seed::{load_seed, parse_seed};
pub use state::{AppState, CityWeather, FavoritesState, WeatherState};
pub use temperature::{fahrenheit_to_celsius, TempUnit};
