//! Current conditions panel for the selected city
//!
//! Shows the city, its temperature in the active unit, the weather text and
//! icon, and a heart marking whether the city is a favorite. Pressing `f`
//! decides the favorite toggle from props and emits the resulting action.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use weather_dash_core::{toggle_favorite, Action, AppState, CityWeather, TempUnit};

use super::Component;
use crate::icons::icon_for;

pub const FAVORITE_ICON: &str = "♥";
pub const NOT_FAVORITE_ICON: &str = "♡";

const ACCENT: Color = Color::Rgb(90, 160, 255);

pub struct CurrentWeatherProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct CurrentWeather;

impl CurrentWeather {
    /// Read the selected city, decide, and return the intent as an action
    ///
    /// An aborted toggle is logged and yields no action.
    fn favorite_toggle_actions(&self, state: &AppState) -> Vec<Action> {
        let Some(selected) = state.selected_city() else {
            return vec![];
        };

        match toggle_favorite(&selected.city, &selected.weather, state.favorites.entries()) {
            Ok(intent) => {
                tracing::info!(
                    city = %intent.city_id(),
                    add = intent.is_add(),
                    "Favorite toggled"
                );
                vec![Action::from(intent)]
            }
            Err(err) => {
                tracing::warn!(
                    city = %selected.city.localized_name,
                    error = %err,
                    "Favorite toggle aborted"
                );
                vec![]
            }
        }
    }
}

impl Component<Action> for CurrentWeather {
    type Props<'a> = CurrentWeatherProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return vec![];
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('f') => self.favorite_toggle_actions(props.state),
                KeyCode::Char('u') => vec![Action::UiToggleUnits],
                KeyCode::Tab | KeyCode::Char('n') => vec![Action::CitySelectNext],
                KeyCode::BackTab | KeyCode::Char('p') => vec![Action::CitySelectPrev],
                KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
                _ => vec![],
            },
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: CurrentWeatherProps<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" Today ")
            .title_style(Style::default().fg(ACCENT).bold());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(selected) = props.state.selected_city() else {
            frame.render_widget(
                Paragraph::new(Line::from("No cities loaded").centered()),
                inner,
            );
            return;
        };

        let [favorite_area, name_area, temp_area, text_area, icon_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let is_favorite = props.state.is_selected_favorite();
        frame.render_widget(Paragraph::new(favorite_line(is_favorite)), favorite_area);

        let name = Line::from(Span::styled(
            selected.city.localized_name.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(name), name_area);

        let Some(snapshot) = selected.weather.current() else {
            let missing = Line::from(Span::styled(
                "No current conditions loaded",
                Style::default().fg(Color::DarkGray),
            ));
            frame.render_widget(Paragraph::new(missing), temp_area);
            return;
        };

        frame.render_widget(
            Paragraph::new(temperature_line(selected, props.state.unit)),
            temp_area,
        );

        let text = Line::from(Span::styled(
            snapshot.weather_text.as_str(),
            Style::default().fg(Color::Gray),
        ));
        frame.render_widget(Paragraph::new(text), text_area);

        if let Some(icon) = icon_for(snapshot.weather_icon) {
            let line = Line::from(vec![
                Span::styled(icon.glyph, Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::styled(icon.label, Style::default().fg(Color::DarkGray)),
            ]);
            frame.render_widget(Paragraph::new(line), icon_area);
        }
    }
}

fn favorite_line(is_favorite: bool) -> Line<'static> {
    let (icon, hint) = if is_favorite {
        (FAVORITE_ICON, "Remove from Favorites")
    } else {
        (NOT_FAVORITE_ICON, "Add to Favorites")
    };
    Line::from(vec![
        Span::styled(icon, Style::default().fg(ACCENT).bold()),
        Span::raw(" "),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ])
    .right_aligned()
}

fn temperature_line(selected: &CityWeather, unit: TempUnit) -> Line<'static> {
    let fahrenheit = selected.weather.current().map_or(0.0, |s| s.fahrenheit());
    let switch_style = |active: bool| {
        if active {
            Style::default().fg(Color::Black).bg(ACCENT).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    Line::from(vec![
        Span::styled("Temperature: ", Style::default().fg(Color::Gray)),
        Span::styled(unit.format(fahrenheit), Style::default().fg(Color::Yellow).bold()),
        Span::raw("  "),
        Span::styled(" C ", switch_style(unit.is_celsius())),
        Span::styled(" F ", switch_style(!unit.is_celsius())),
    ])
}
