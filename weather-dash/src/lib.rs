//! Terminal front end for the weather dashboard
//!
//! Flow: crossterm event -> [`components::Dashboard::handle_event`] -> actions
//! -> store dispatch -> re-render when the reducer reports a change.

pub mod components;
pub mod icons;

/// Demo seed used when no `--data` file is given
pub const DEMO_SEED: &str = include_str!("../data/demo.json");
