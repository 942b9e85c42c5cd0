use std::{fs, io, path::PathBuf, sync::OnceLock, thread, time::Duration};

use clap::Parser;
use log::{Level, LevelFilter, Log, Metadata, Record};

use growmaze::{Direction, Dims, Edge, Maze, MazeSpec, Outcome, Step};

/// Grows a maze step by step and prints it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Width of the maze
    #[arg(default_value_t = 12)]
    width: i32,

    /// Depth of the maze
    #[arg(default_value_t = 8)]
    depth: i32,

    /// Seed for deterministic mazes
    #[arg(short, long)]
    seed: Option<u64>,

    /// RON file with the maze spec, overrides size and seed
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Delay between the steps in milliseconds
    #[arg(short, long, default_value_t = 0)]
    delay: u64,

    /// Stop after this many steps
    #[arg(long)]
    steps: Option<usize>,

    /// More output, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

struct StderrLogger {
    min_level: Level,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{:<5} {}] {}",
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

fn init_logging(verbose: u8) {
    let min_level = match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };

    let logger = LOGGER.get_or_init(|| StderrLogger { min_level });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

fn load_spec(args: &Args) -> Result<MazeSpec, Box<dyn std::error::Error>> {
    if let Some(path) = &args.config {
        let text = fs::read_to_string(path)?;
        return Ok(MazeSpec::from_ron(&text)?);
    }

    let mut spec = MazeSpec::new(Dims(args.width, args.depth));
    spec.seed = args.seed;
    spec.validate()?;
    Ok(spec)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let spec = match load_spec(&args) {
        Ok(spec) => spec,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let mut generator = match spec.generator() {
        Ok(generator) => generator,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let limit = args.steps.unwrap_or(usize::MAX);
    let delay = Duration::from_millis(args.delay);
    for step in generator.by_ref().take(limit) {
        match step {
            Step::Seed { cell } => log::info!("seed at {:?}", cell),
            Step::Passage { from, to, .. } => log::info!("passage {:?} -> {:?}", from, to),
            Step::Retire { cell } => log::debug!("retired {:?}", cell),
            _ => {}
        }

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    let progress = generator.progress();
    let outcome = generator.into_outcome();
    if !outcome.is_complete() {
        log::warn!(
            "Generation stopped at {:.0}%, maze is partial",
            progress.percent() * 100.0
        );
    }

    let mut out = io::stdout().lock();
    if let Err(err) = render(outcome.maze(), &mut out) {
        log::error!("Cannot print the maze: {}", err);
    }

    if let Outcome::Complete(maze) = outcome {
        log::info!(
            "{} cells, {} passages, perfect: {}",
            maze.cell_count(),
            maze.passage_count(),
            maze.is_perfect()
        );
    }
}

fn is_open(maze: &Maze, pos: Dims, dir: Direction) -> bool {
    maze.try_get_cell(pos)
        .and_then(|cell| cell.get_edge(dir))
        .is_some_and(|edge| matches!(edge, Edge::Passage(_)))
}

/// North is on the top, cells, that don't exist yet, are filled.
fn render(maze: &Maze, out: &mut impl io::Write) -> io::Result<()> {
    let Dims(width, depth) = maze.size();

    for z in (0..depth).rev() {
        for x in 0..width {
            let wall = !is_open(maze, Dims(x, z), Direction::North);
            write!(out, "+{}", if wall { "---" } else { "   " })?;
        }
        writeln!(out, "+")?;

        for x in 0..width {
            let pos = Dims(x, z);
            let wall = !is_open(maze, pos, Direction::West);
            let body = if maze.try_get_cell(pos).is_some() { "   " } else { "###" };
            write!(out, "{}{}", if wall { '|' } else { ' ' }, body)?;
        }
        writeln!(out, "|")?;
    }

    for x in 0..width {
        let wall = !is_open(maze, Dims(x, 0), Direction::South);
        write!(out, "+{}", if wall { "---" } else { "   " })?;
    }
    writeln!(out, "+")
}
