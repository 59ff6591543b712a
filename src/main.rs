use anyhow::{ensure, Result};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use twenty48::game::{Game, GameConfig};
use twenty48::tui;

#[derive(Parser, Debug)]
#[command(
    name = "twenty48",
    version,
    about = "Slide and merge tiles in the terminal until you reach 2048"
)]
struct Args {
    /// Side length of the board
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Tiles spawned before the first move
    #[arg(long, default_value_t = 2)]
    initial_tiles: usize,

    /// Probability that a spawned tile is a 4 instead of a 2
    #[arg(long, default_value_t = 0.2)]
    prob_of_four: f64,

    /// Seed the RNG for a reproducible game (omit for entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.size >= 2, "--size must be at least 2");
    ensure!(args.initial_tiles >= 1, "--initial-tiles must be at least 1");
    ensure!(
        (0.0..=1.0).contains(&args.prob_of_four),
        "--prob-of-four must be within [0, 1]"
    );

    let config = GameConfig {
        board_size: args.size,
        initial_tiles: args.initial_tiles,
        prob_of_four: args.prob_of_four,
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        "starting {0}x{0} board, {1} initial tiles, P(4) = {2}",
        config.board_size, config.initial_tiles, config.prob_of_four
    );

    let mut game = Game::new(config, rng)?;
    tui::run(&mut game)
}
