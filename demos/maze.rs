//! Random obstacle field solved in each diagonal mode.
//!
//! Run: cargo run --bin maze [seed]

use gridpath_core::{Cost, Grid, Point};
use gridpath_search::{DiagonalMode, SearchOptions, Searcher};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDTH: i32 = 40;
const HEIGHT: i32 = 16;
const WALL_CHANCE: f64 = 0.28;
const ROUGH_CHANCE: f64 = 0.08;

fn random_field(rng: &mut impl Rng, start: Point, goal: Point) -> Grid {
    let mut grid = Grid::new(WIDTH, HEIGHT);
    grid.fill_fn(|p| {
        if p == start || p == goal {
            return Cost::DEFAULT;
        }
        let roll: f64 = rng.random();
        if roll < WALL_CHANCE {
            Cost::WALL
        } else if roll < WALL_CHANCE + ROUGH_CHANCE {
            Cost::new(f64::from(rng.random_range(2..=9_i32)))
        } else {
            Cost::DEFAULT
        }
    });
    grid
}

fn main() {
    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Error: invalid seed: {e}");
            std::process::exit(1);
        }
        None => rand::rng().random(),
    };
    let mut rng = StdRng::seed_from_u64(seed);

    let start = Point::new(0, 0);
    let goal = Point::new(WIDTH - 1, HEIGHT - 1);
    let grid = random_field(&mut rng, start, goal);
    let mut searcher = Searcher::new();

    println!("seed {seed}, {} of {} cells open", grid.count_passable(), grid.len());
    for mode in [
        DiagonalMode::None,
        DiagonalMode::All,
        DiagonalMode::NoCornerCutting,
    ] {
        let opts = SearchOptions::new().with_diagonal(mode);
        println!();
        match searcher.find_path(&grid, start, goal, opts) {
            Some(path) => {
                println!(
                    "{mode}: {} steps, cost {:.1}, {} cells expanded",
                    path.len(),
                    path.cost(),
                    searcher.last_expanded()
                );
                print!("{}", grid.render_route(start, goal, &path.to_vec()));
            }
            None => {
                println!("{mode}: no route ({} cells expanded)", searcher.last_expanded());
                print!("{}", grid.render_route(start, goal, &[]));
            }
        }
    }
}
