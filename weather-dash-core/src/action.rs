//! Actions - everything that can happen to the dashboard
//!
//! Naming convention: the prefix is the category (`FavoritesAdd` belongs to
//! "favorites", `UiToggleUnits` to "ui"), the verb comes last.

use tui_dispatch::ActionSummary;

use crate::model::{CityId, FavoriteEntry};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Favorites category =====
    /// Add a freshly captured entry to the favorites
    FavoritesAdd(FavoriteEntry),

    /// Drop the favorite for this city
    FavoritesRemove(CityId),

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit
    UiToggleUnits,

    // ===== City category =====
    CitySelectNext,
    CitySelectPrev,

    // ===== Uncategorized =====
    /// Exit the application
    Quit,
}

/// Favorite entries carry opaque forecast and activity payloads, keep them
/// out of the action log
impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::FavoritesAdd(entry) => format!(
                "FavoritesAdd {{ city: {} ({}), temp: {:.1}°C }}",
                entry.city_name, entry.city_id, entry.temperature_celsius
            ),
            Action::FavoritesRemove(city_id) => format!("FavoritesRemove({})", city_id),
            _ => format!("{:?}", self),
        }
    }
}
