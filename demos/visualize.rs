//! Terminal playback of a Dijkstra search on the default 20 × 50 board.
//!
//! Run: cargo run --bin visualize [seed]
//!
//! Set `WAYFIND_ANIMATE=1` to replay every step with its delay instead of
//! printing only the final frame. `RUST_LOG=debug` shows engine logs.

use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wayfind_core::{GridConfig, Point};
use wayfind_demos::{Board, playback, render};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let seed = match std::env::args().nth(1) {
        Some(s) => s.parse::<u64>()?,
        None => 42,
    };
    let animate = std::env::var_os("WAYFIND_ANIMATE").is_some();

    let cfg = GridConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::from_config(&cfg, &mut rng)?;

    // Drag a wall down column 25 between the endpoints.
    board.press(Point::at(3, 25))?;
    for row in 4..17 {
        board.enter(Point::at(row, 25))?;
    }
    board.release();
    log::info!("board {}x{} seed {seed}", cfg.rows, cfg.cols);

    let solution = board.solve();
    let steps = playback(&solution);

    if animate {
        for i in 1..=steps.len() {
            print!("\x1b[H\x1b[2J{}", render(board.grid(), &steps[..i]));
            std::thread::sleep(steps[i - 1].delay());
        }
    } else {
        print!("{}", render(board.grid(), &steps));
    }

    match (solution.steps(), solution.cost) {
        (Some(steps), Some(cost)) => println!(
            "visited {} cells, path of {steps} moves costs {cost}",
            solution.visited.len()
        ),
        _ => println!("visited {} cells, no path to the goal", solution.visited.len()),
    }
    Ok(())
}
