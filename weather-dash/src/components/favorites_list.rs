use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use weather_dash_core::{Action, CityId, FavoriteEntry, TempUnit};

use super::{Component, FAVORITE_ICON};
use crate::icons::icon_for;

pub struct FavoritesList;

pub struct FavoritesListProps<'a> {
    pub favorites: &'a [FavoriteEntry],
    pub unit: TempUnit,
    /// Highlighted when it is in the list
    pub selected: Option<&'a CityId>,
}

impl Component<Action> for FavoritesList {
    type Props<'a> = FavoritesListProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" {} Favorites ({}) ", FAVORITE_ICON, props.favorites.len()))
            .title_style(Style::default().fg(Color::Cyan).bold());

        if props.favorites.is_empty() {
            let empty = Line::from(Span::styled(
                "No favorites yet",
                Style::default().fg(Color::DarkGray),
            ))
            .centered();
            frame.render_widget(Paragraph::new(empty).block(block), area);
            return;
        }

        let lines: Vec<Line> = props
            .favorites
            .iter()
            .map(|entry| entry_line(entry, props.unit, props.selected == Some(&entry.city_id)))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn entry_line(entry: &FavoriteEntry, unit: TempUnit, is_selected: bool) -> Line<'_> {
    let name_style = if is_selected {
        Style::default().fg(Color::White).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let glyph = icon_for(entry.weather_icon).map_or(" ", |icon| icon.glyph);

    Line::from(vec![
        Span::styled(if is_selected { "› " } else { "  " }, name_style),
        Span::styled(entry.city_name.as_str(), name_style),
        Span::raw("  "),
        Span::styled(
            unit.format_celsius(entry.temperature_celsius),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(glyph, Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(entry.weather_text.as_str(), Style::default().fg(Color::DarkGray)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::RenderHarness;
    use weather_dash_core::{favorite_entry, City, WeatherSnapshot, WeatherState};

    #[test]
    fn test_render_empty() {
        let mut render = RenderHarness::new(40, 4);
        let output = render.render_to_string_plain(|frame| {
            FavoritesList.render(
                frame,
                frame.area(),
                FavoritesListProps {
                    favorites: &[],
                    unit: TempUnit::Celsius,
                    selected: None,
                },
            );
        });

        assert!(output.contains("Favorites (0)"));
        assert!(output.contains("No favorites yet"));
    }

    #[test]
    fn test_render_entries_in_active_unit() {
        let entry = favorite_entry(
            &City::new("1", "Eilat"),
            &WeatherState::with_snapshot(WeatherSnapshot::new("Hot", 30, 104.0)),
        )
        .unwrap();
        let mut render = RenderHarness::new(50, 4);

        let output = render.render_to_string_plain(|frame| {
            FavoritesList.render(
                frame,
                frame.area(),
                FavoritesListProps {
                    favorites: std::slice::from_ref(&entry),
                    unit: TempUnit::Fahrenheit,
                    selected: Some(&entry.city_id),
                },
            );
        });

        assert!(output.contains("Favorites (1)"));
        assert!(output.contains("Eilat"));
        assert!(output.contains("104.0°F"));
        assert!(output.contains("Hot"));
    }
}
