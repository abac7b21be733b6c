//! Temperature conversion and unit-aware display

/// Convert a Fahrenheit reading to Celsius
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Temperature unit preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn from_celsius_flag(is_celsius: bool) -> Self {
        if is_celsius {
            TempUnit::Celsius
        } else {
            TempUnit::Fahrenheit
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn is_celsius(&self) -> bool {
        matches!(self, TempUnit::Celsius)
    }

    /// Format a Fahrenheit reading in this unit
    pub fn format(&self, fahrenheit: f64) -> String {
        match self {
            TempUnit::Celsius => format!("{:.1}°C", fahrenheit_to_celsius(fahrenheit)),
            TempUnit::Fahrenheit => format!("{:.1}°F", fahrenheit),
        }
    }

    /// Format a Celsius value in this unit (favorites store Celsius)
    pub fn format_celsius(&self, celsius: f64) -> String {
        match self {
            TempUnit::Celsius => format!("{:.1}°C", celsius),
            TempUnit::Fahrenheit => format!("{:.1}°F", celsius * 9.0 / 5.0 + 32.0),
        }
    }
}
