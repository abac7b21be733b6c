//! Weather dashboard TUI
//!
//! Event (keyboard) -> Dashboard.handle_event() -> Actions -> Store dispatch
//! -> re-render if the reducer reported a change.
//!
//! # Usage
//!
//! ```sh
//! # Bundled demo cities
//! cargo run -p weather-dash
//!
//! # Own seed file, start in Fahrenheit on a given city
//! cargo run -p weather-dash -- --data cities.json --fahrenheit --city 215854
//! ```

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::KeyEventKind,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use tui_dispatch::{
    process_raw_event, spawn_event_poller, ActionSummary, EventKind, RawEvent, Store,
};
use weather_dash::components::{Component, Dashboard, DashboardProps};
use weather_dash::DEMO_SEED;
use weather_dash_core::{
    load_seed, parse_seed, reducer, Action, AppState, CityId, CityWeather, SeedError, TempUnit,
};

/// Default log filter; the target prefix also covers `weather_dash_core`
const DEFAULT_LOG_FILTER: &str = "weather_dash=info";

/// Weather dashboard with favorites
#[derive(Parser, Debug)]
#[command(name = "weather-dash")]
#[command(about = "Current conditions, unit toggle and favorites in the terminal")]
struct Args {
    /// JSON seed file with cities and their current conditions
    #[arg(long, short)]
    data: Option<PathBuf>,

    /// Key of the city to show first
    #[arg(long, short)]
    city: Option<String>,

    /// Start in Fahrenheit instead of Celsius
    #[arg(long)]
    fahrenheit: bool,

    /// Log file ("-" disables logging)
    #[arg(long, default_value = "weather-dash.log")]
    log_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    init_logging(&args.log_file)?;

    // Load seed data before entering TUI mode
    let cities = match load_cities(args.data.as_deref()) {
        Ok(cities) => cities,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, SeedError::Parse(_) | SeedError::Empty) {
                eprintln!("Expected a JSON object with a non-empty \"cities\" array.");
            }
            std::process::exit(1);
        }
    };

    let mut state =
        AppState::new(cities).with_unit(TempUnit::from_celsius_flag(!args.fahrenheit));
    if let Some(key) = args.city.as_deref() {
        if !state.select(&CityId::new(key)) {
            eprintln!("Error: No city with key '{}' in the seed data.", key);
            std::process::exit(1);
        }
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, state).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn init_logging(path: &Path) -> io::Result<()> {
    if path == Path::new("-") {
        return Ok(());
    }

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_cities(path: Option<&Path>) -> Result<Vec<CityWeather>, SeedError> {
    match path {
        Some(path) => load_seed(path),
        None => parse_seed(DEMO_SEED),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: AppState,
) -> io::Result<()> {
    let mut store = Store::new(state, reducer);
    let mut dashboard = Dashboard::default();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    tracing::info!("Dashboard started");
    let mut should_render = true;

    'main: loop {
        if should_render {
            terminal.draw(|frame| {
                let props = DashboardProps {
                    state: store.state(),
                    is_focused: true,
                };
                dashboard.render(frame, frame.area(), props);
            })?;
            should_render = false;
        }

        let Some(raw_event) = event_rx.recv().await else {
            break;
        };
        let event = process_raw_event(raw_event);

        match &event {
            // Re-render on terminal resize (no action needed, just redraw)
            EventKind::Resize(..) => {
                should_render = true;
                continue;
            }
            EventKind::Key(key) if key.kind != KeyEventKind::Press => continue,
            _ => {}
        }

        let props = DashboardProps {
            state: store.state(),
            is_focused: true,
        };
        let actions: Vec<Action> = dashboard.handle_event(&event, props).into_iter().collect();
        for action in actions {
            if matches!(action, Action::Quit) {
                break 'main;
            }
            should_render |= dispatch_action(&mut store, action);
        }
    }

    cancel_token.cancel();
    tracing::info!(favorites = store.state().favorites.len(), "Dashboard stopped");
    Ok(())
}

/// Dispatch and log the action summary with whether state changed
fn dispatch_action(store: &mut Store<AppState, Action>, action: Action) -> bool {
    let summary = action.summary();
    let changed = store.dispatch(action);
    tracing::debug!(action = %summary, changed, "Action dispatched");
    changed
}
