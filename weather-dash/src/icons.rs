//! AccuWeather icon ids to terminal glyphs

/// Glyph and caption for one weather icon id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherIcon {
    pub glyph: &'static str,
    pub label: &'static str,
}

const SUN: &str = "☀";
const MOON: &str = "☾";
const CLOUD: &str = "☁";
const RAIN: &str = "☂";
const STORM: &str = "ϟ";
const SNOW: &str = "❄";
const FOG: &str = "≡";
const WIND: &str = "≈";

const fn icon(glyph: &'static str, label: &'static str) -> Option<WeatherIcon> {
    Some(WeatherIcon { glyph, label })
}

/// Look up an AccuWeather icon id (1-44)
///
/// Ids AccuWeather leaves unassigned (9, 10, 27, 28) and anything out of range
/// return `None`; the panel then shows no icon.
pub fn icon_for(id: u32) -> Option<WeatherIcon> {
    match id {
        1 => icon(SUN, "Sunny"),
        2 => icon(SUN, "Mostly sunny"),
        3 => icon(SUN, "Partly sunny"),
        4 => icon(CLOUD, "Intermittent clouds"),
        5 => icon(SUN, "Hazy sunshine"),
        6 => icon(CLOUD, "Mostly cloudy"),
        7 => icon(CLOUD, "Cloudy"),
        8 => icon(CLOUD, "Overcast"),
        11 => icon(FOG, "Fog"),
        12 => icon(RAIN, "Showers"),
        13 | 14 => icon(RAIN, "Showers and sun"),
        15 => icon(STORM, "Thunderstorms"),
        16 | 17 => icon(STORM, "Scattered thunderstorms"),
        18 => icon(RAIN, "Rain"),
        19..=21 => icon(SNOW, "Flurries"),
        22 | 23 => icon(SNOW, "Snow"),
        24 => icon(SNOW, "Ice"),
        25 => icon(SNOW, "Sleet"),
        26 => icon(RAIN, "Freezing rain"),
        29 => icon(SNOW, "Rain and snow"),
        30 => icon(SUN, "Hot"),
        31 => icon(SNOW, "Cold"),
        32 => icon(WIND, "Windy"),
        33 => icon(MOON, "Clear"),
        34 => icon(MOON, "Mostly clear"),
        35 | 36 => icon(MOON, "Partly cloudy"),
        37 => icon(MOON, "Hazy moonlight"),
        38 => icon(CLOUD, "Mostly cloudy"),
        39 | 40 => icon(RAIN, "Night showers"),
        41 | 42 => icon(STORM, "Night thunderstorms"),
        43 => icon(SNOW, "Night flurries"),
        44 => icon(SNOW, "Night snow"),
        _ => None,
    }
}
