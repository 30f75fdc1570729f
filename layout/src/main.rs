use anyhow::{Context, Result};
use clap::Parser;
use queensweeper_core::{
    Board, BoardView, Coord, Coord2, DEFAULT_SIZE, GameConfig, GameSession, PlacementStrategy,
    ViewCell,
};

/// Prints the mine layout for a board size and optionally replays reveals on it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board side length
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    size: Coord,

    /// Shuffle each row's column order with this seed instead of searching left to right
    #[arg(short, long)]
    seed: Option<u64>,

    /// Reveal ROW,COL after placement, can be repeated
    #[arg(short, long, value_name = "ROW,COL", value_parser = parse_coords)]
    reveal: Vec<Coord2>,
}

fn parse_coords(arg: &str) -> Result<Coord2, String> {
    let (row, col) = arg
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {arg:?}"))?;
    let row = row.trim().parse().map_err(|err| format!("bad row {row:?}: {err}"))?;
    let col = col.trim().parse().map_err(|err| format!("bad column {col:?}: {err}"))?;
    Ok((row, col))
}

fn layout_line(board: &Board, row: Coord) -> String {
    (0..board.size())
        .map(|col| {
            let cell = board[(row, col)];
            if cell.is_mine() {
                '*'
            } else {
                char::from(b'0' + cell.adjacent_count())
            }
        })
        .collect()
}

fn view_line(view: &BoardView, row: Coord) -> String {
    (0..view.size)
        .map(|col| match view.cell_at((row, col)) {
            ViewCell::Hidden => '.',
            ViewCell::Revealed(count) => char::from(b'0' + count),
            ViewCell::Mine => '*',
            ViewCell::Exploded => 'X',
        })
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .init();
    log::debug!("args: {:?}", args);

    let placement = match args.seed {
        Some(seed) => PlacementStrategy::Shuffled { seed },
        None => PlacementStrategy::Backtracking,
    };
    let mut session = GameSession::from_config(GameConfig::new(args.size, placement))
        .with_context(|| format!("Could not place mines on a {0}x{0} board", args.size))?;

    for row in 0..session.size() {
        println!("{}", layout_line(session.board(), row));
    }

    if args.reveal.is_empty() {
        return Ok(());
    }

    println!();
    for &(row, col) in &args.reveal {
        match session
            .reveal(row, col)
            .with_context(|| format!("Could not reveal ({row}, {col})"))?
        {
            Some(outcome) => println!("({row}, {col}): {outcome:?}"),
            None => println!("({row}, {col}): ignored, game is {:?}", session.status()),
        }
    }

    let view = session.view();
    println!();
    for row in 0..view.size {
        println!("{}", view_line(&view, row));
    }
    println!("{:?}", view.status);

    Ok(())
}
