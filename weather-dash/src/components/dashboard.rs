//! Top-level layout: current conditions, favorites, help bar

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
    Frame,
};
use tui_dispatch::EventKind;
use weather_dash_core::{Action, AppState};

use super::{
    Component, CurrentWeather, CurrentWeatherProps, FavoritesList, FavoritesListProps, HelpBar,
    HelpBarProps,
};

pub struct DashboardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct Dashboard {
    current: CurrentWeather,
    help: HelpBar,
}

impl Component<Action> for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.current.handle_event(
            event,
            CurrentWeatherProps {
                state: props.state,
                is_focused: props.is_focused,
            },
        )
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DashboardProps<'_>) {
        let state = props.state;

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" ☁ Weather ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [current_area, favorites_area, help_area] = Layout::vertical([
            Constraint::Length(7),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.current.render(
            frame,
            current_area,
            CurrentWeatherProps {
                state,
                is_focused: props.is_focused,
            },
        );

        FavoritesList.render(
            frame,
            favorites_area,
            FavoritesListProps {
                favorites: state.favorites.entries(),
                unit: state.unit,
                selected: state.selected_city().map(|c| &c.city.key),
            },
        );

        self.help.render(
            frame,
            help_area,
            HelpBarProps {
                show_city_hint: state.cities.len() > 1,
            },
        );
    }
}
