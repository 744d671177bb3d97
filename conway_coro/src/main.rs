// main.rs - Windowed Conway's Game of Life stepped by row coroutines

use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use egui::Color32;
use life_engine::{Grid, RandomSeed, RowCoroutineStepper, SeedSupplier, Simulation, patterns};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod ui;

/// Windowed Game of Life viewer
#[derive(Parser, Debug)]
#[command(name = "conway_coro")]
#[command(about = "Watch a Game of Life board evolve, one tokio task per row", long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = 50)]
    width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = 50)]
    height: usize,

    /// Milliseconds between generations while running
    #[arg(long, default_value_t = 200)]
    interval_ms: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let app = GameOfLife::new(&args)?;
    info!(width = args.width, height = args.height, "starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Async Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("viewer exited with an error: {err}"))
}

/// Viewer state: the running simulation plus presentation settings.
pub struct GameOfLife {
    sim: Simulation,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub last_cycle: Option<u64>,
    pub status: Option<String>,
    random_runs: u64,
}

impl GameOfLife {
    fn new(args: &Args) -> Result<Self> {
        let grid = Grid::dead(args.width, args.height)?;
        let stepper = RowCoroutineStepper::new().context("failed to start the tokio runtime")?;

        Ok(Self {
            sim: Simulation::new(grid, stepper),
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(args.interval_ms.max(1)),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            last_cycle: None,
            status: None,
            random_runs: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        self.sim.grid()
    }

    /// Advances one generation; pauses once the board starts repeating.
    pub fn update_generation(&mut self) {
        let report = self.sim.advance();
        if let Some(period) = report.cycle_period {
            self.is_running = false;
            self.last_cycle = Some(period);
        }
    }

    pub fn clear_grid(&mut self) {
        self.reseed(|_, _| false);
    }

    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) else {
            return;
        };
        let (width, height) = (self.grid().width(), self.grid().height());
        match pattern.centered(width, height) {
            Ok(seed) => self.reseed(seed),
            Err(err) => {
                warn!(%err, "pattern does not fit");
                self.status = Some(err.to_string());
            }
        }
    }

    pub fn apply_random_pattern(&mut self) {
        self.random_runs += 1;
        match RandomSeed::new(self.random_runs, RandomSeed::DEFAULT_DENSITY) {
            Ok(seed) => self.reseed(seed),
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    /// Flips one cell by starting a new run from the edited board.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        let before = self.grid().clone();
        self.reseed(|cx, cy| {
            let alive = before.get(cx, cy).unwrap_or(false);
            if (cx, cy) == (x, y) { !alive } else { alive }
        });
    }

    fn reseed<S: SeedSupplier>(&mut self, seed: S) {
        match self.sim.restart(seed) {
            Ok(()) => {
                self.last_cycle = None;
                self.status = None;
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(width: usize, height: usize) -> GameOfLife {
        let args = Args::try_parse_from([
            "conway_coro",
            "--width",
            width.to_string().as_str(),
            "--height",
            height.to_string().as_str(),
        ])
        .unwrap();
        GameOfLife::new(&args).unwrap()
    }

    fn select(app: &mut GameOfLife, name: &str) {
        app.selected_pattern = patterns::PATTERNS.iter().position(|p| p.name == name).unwrap();
        app.apply_selected_pattern();
    }

    #[test]
    fn toggling_restarts_from_the_edited_board() {
        let mut app = app(5, 5);
        select(&mut app, "Blinker");
        app.update_generation();
        assert_eq!(app.grid().generation(), 1);

        app.toggle_cell(0, 0);
        assert_eq!(app.grid().generation(), 0);
        assert_eq!(app.grid().get(0, 0), Some(true));
        assert_eq!(app.grid().population(), 4);
    }

    #[test]
    fn running_pauses_on_a_cycle() {
        let mut app = app(6, 6);
        select(&mut app, "Block");
        app.is_running = true;
        app.update_generation();
        assert!(!app.is_running);
        assert_eq!(app.last_cycle, Some(1));
    }

    #[test]
    fn oversized_pattern_leaves_the_board_alone() {
        let mut app = app(10, 10);
        select(&mut app, "Gosper Glider Gun");
        assert!(app.status.is_some());
        assert_eq!(app.grid().population(), 0);

        app.clear_grid();
        assert!(app.status.is_none());
    }

    #[test]
    fn random_boards_differ_between_presses() {
        let mut app = app(20, 20);
        app.apply_random_pattern();
        let first = app.grid().clone();
        app.apply_random_pattern();
        assert_ne!(first.snapshot(), app.grid().snapshot());
    }
}
