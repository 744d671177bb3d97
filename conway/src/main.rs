// main.rs - Console Conway's Game of Life

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use life_engine::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Grid, PATTERNS, RandomSeed, Simulation, patterns};
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod console;

use console::Console;

/// Conway's Game of Life in the terminal
#[derive(Parser, Debug)]
#[command(name = "conway")]
#[command(about = "Step a Game of Life board one generation at a time", long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Start from a named pattern, centred on the board
    #[arg(short, long, conflicts_with_all = ["random", "seed_file"])]
    pattern: Option<String>,

    /// Start from a random soup generated from this seed
    #[arg(short, long, conflicts_with = "seed_file")]
    random: Option<u64>,

    /// Fraction of cells alive in a random soup
    #[arg(long, default_value_t = RandomSeed::DEFAULT_DENSITY, requires = "random")]
    density: f64,

    /// Start from a text file of '#' (alive) and '_' (dead) rows; the file sets the board size
    #[arg(long, conflicts_with_all = ["width", "height"])]
    seed_file: Option<PathBuf>,

    /// Run this many generations without prompting, then exit
    #[arg(short, long)]
    steps: Option<u64>,

    /// Do not print blank lines before each generation
    #[arg(long)]
    no_clear: bool,

    /// List the built-in patterns and exit
    #[arg(long)]
    list_patterns: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout belongs to the board
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    if args.list_patterns {
        for pattern in PATTERNS {
            println!("{:<20} {}x{}", pattern.name, pattern.width(), pattern.height());
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), !args.no_clear);

    let grid = build_grid(&args, &mut console)?;
    info!(width = grid.width(), height = grid.height(), population = grid.population(), "seeded board");

    run(Simulation::serial(grid), &mut console, args.steps)
}

fn build_grid<R: BufRead, W: Write>(args: &Args, console: &mut Console<R, W>) -> Result<Grid> {
    if let Some(path) = &args.seed_file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        let grid: Grid = text
            .parse()
            .with_context(|| format!("invalid seed file {}", path.display()))?;
        debug!(width = grid.width(), height = grid.height(), "board size taken from seed file");
        return Ok(grid);
    }

    if let Some(name) = &args.pattern {
        let Some(pattern) = patterns::find(name) else {
            bail!("unknown pattern `{name}` (try --list-patterns)");
        };
        let seed = pattern.centered(args.width, args.height)?;
        return Ok(Grid::new(args.width, args.height, seed)?);
    }

    if let Some(seed) = args.random {
        let supplier = RandomSeed::new(seed, args.density)?;
        return Ok(Grid::new(args.width, args.height, supplier)?);
    }

    let cells = console.read_seed(args.width, args.height)?;
    let width = args.width;
    Ok(Grid::new(args.width, args.height, |x, y| cells[y * width + x])?)
}

fn run<R: BufRead, W: Write>(mut sim: Simulation, console: &mut Console<R, W>, steps: Option<u64>) -> Result<()> {
    console.render(&sim.snapshot())?;
    if steps == Some(0) {
        return Ok(());
    }

    loop {
        let report = sim.advance();
        console.render(&sim.snapshot())?;
        console.report_generation(report.generation, report.cycle_period)?;

        let keep_going = match steps {
            Some(limit) => report.generation < limit,
            None => console.ask_continue()?,
        };
        if !keep_going {
            info!(generation = report.generation, population = report.population, "run finished");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    #[test]
    fn args_reject_conflicting_seed_sources() {
        assert!(Args::try_parse_from(["conway", "--pattern", "Glider", "--random", "3"]).is_err());
        assert!(Args::try_parse_from(["conway", "--density", "0.5"]).is_err());
        assert!(Args::try_parse_from(["conway", "--random", "3", "--density", "0.5"]).is_ok());
    }

    #[test]
    fn prompted_seed_builds_the_board() {
        let args = Args::try_parse_from(["conway", "--width", "3", "--height", "2"]).unwrap();
        let mut console = console("0 1 0\n0 1 0\n");
        let grid = build_grid(&args, &mut console).unwrap();
        assert_eq!(grid.snapshot().to_string(), "_#_\n_#_\n");
    }

    #[test]
    fn seed_file_sets_the_board_size() {
        let path = std::env::temp_dir().join(format!("conway-seed-{}.txt", std::process::id()));
        fs::write(&path, "____\n_##_\n_##_\n").unwrap();
        let path_arg = path.to_str().unwrap();

        let args = Args::try_parse_from(["conway", "--seed-file", path_arg]).unwrap();
        let grid = build_grid(&args, &mut console(""));
        fs::remove_file(&path).unwrap();

        let grid = grid.unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn seed_file_rejects_explicit_dimensions() {
        assert!(Args::try_parse_from(["conway", "--seed-file", "board.txt", "--width", "10"]).is_err());
        assert!(Args::try_parse_from(["conway", "--seed-file", "board.txt", "--height", "10"]).is_err());
        assert!(Args::try_parse_from(["conway", "--seed-file", "board.txt"]).is_ok());
    }

    #[test]
    fn malformed_seed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("conway-ragged-{}.txt", std::process::id()));
        fs::write(&path, "###\n##\n").unwrap();
        let path_arg = path.to_str().unwrap();

        let args = Args::try_parse_from(["conway", "--seed-file", path_arg]).unwrap();
        let result = build_grid(&args, &mut console(""));
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid seed file"));
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let path = std::env::temp_dir().join("conway-no-such-seed-file.txt");
        let args = Args::try_parse_from(["conway", "--seed-file", path.to_str().unwrap()]).unwrap();
        assert!(build_grid(&args, &mut console("")).is_err());
    }

    #[test]
    fn oversized_prompt_board_fails_without_prompting() {
        let args = Args::try_parse_from(["conway", "--width", "18446744073709551615", "--height", "2"]).unwrap();
        let mut console = console("1\n");
        assert!(build_grid(&args, &mut console).is_err());
        assert!(console.into_output().is_empty());
    }

    #[test]
    fn unknown_pattern_is_an_error() {
        let args = Args::try_parse_from(["conway", "--pattern", "spaceship"]).unwrap();
        assert!(build_grid(&args, &mut console("")).is_err());
    }

    #[test]
    fn fixed_step_run_prints_every_generation() {
        let grid: Grid = "_____\n_###_\n_____\n".parse().unwrap();
        let mut console = console("");
        run(Simulation::serial(grid), &mut console, Some(2)).unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.starts_with("_____\n_###_\n_____\n__#__\n__#__\n__#__\n"));
        assert!(output.contains("GENERATION: 1\n"));
        assert!(output.contains("GENERATION: 2 (repeats with period 2)\n"));
        assert!(!output.contains("GENERATION: 3"));
    }

    #[test]
    fn interactive_run_stops_on_q() {
        let grid = Grid::dead(2, 2).unwrap();
        let mut console = console("c c q\n");
        run(Simulation::serial(grid), &mut console, None).unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("GENERATION: 3"));
        assert!(!output.contains("GENERATION: 4"));
    }
}
