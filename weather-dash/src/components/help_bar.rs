use ratatui::{layout::Rect, Frame};
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};
use weather_dash_core::Action;

use super::Component;

pub struct HelpBar {
    status_bar: StatusBar,
}

pub struct HelpBarProps {
    /// Hide the city hint when there is nothing to cycle through
    pub show_city_hint: bool,
}

impl HelpBar {
    pub fn new() -> Self {
        Self {
            status_bar: StatusBar::new(),
        }
    }
}

impl Default for HelpBar {
    fn default() -> Self {
        Self::new()
    }
}

fn hints(show_city_hint: bool) -> Vec<StatusBarHint<'static>> {
    let mut hints = vec![
        StatusBarHint::new("f", "favorite"),
        StatusBarHint::new("u", "units"),
    ];
    if show_city_hint {
        hints.push(StatusBarHint::new("tab", "city"));
    }
    hints.push(StatusBarHint::new("q", "quit"));
    hints
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let hints = hints(props.show_city_hint);
        <StatusBar as Component<Action>>::render(
            &mut self.status_bar,
            frame,
            area,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&hints).with_separator("  "),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
