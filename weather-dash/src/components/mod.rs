pub mod current_weather;
pub mod dashboard;
pub mod favorites_list;
pub mod help_bar;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use current_weather::{CurrentWeather, CurrentWeatherProps, FAVORITE_ICON, NOT_FAVORITE_ICON};
pub use dashboard::{Dashboard, DashboardProps};
pub use favorites_list::{FavoritesList, FavoritesListProps};
pub use help_bar::{HelpBar, HelpBarProps};
