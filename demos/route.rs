//! Command-line route finder.
//!
//! Run: cargo run --bin route [SCENARIO.json] [--seed N]
//!
//! Without arguments the built-in scenarios are run. `--seed N` routes
//! corner to corner across a randomly walled 20x10 grid.

use rand::SeedableRng;
use rand::rngs::StdRng;
use routefind_core::Point;
use routefind_demos::scenario::{self, Scenario};
use routefind_demos::scatter_walls;
use routefind_paths::SearchConfig;

const RANDOM_WIDTH: i32 = 20;
const RANDOM_HEIGHT: i32 = 10;
const RANDOM_DENSITY: f64 = 0.25;

fn random_scenario(seed: u64) -> Scenario {
    let start = Point::ZERO;
    let end = Point::new(RANDOM_WIDTH - 1, RANDOM_HEIGHT - 1);
    let mut rng = StdRng::seed_from_u64(seed);
    Scenario {
        name: format!("random (seed {seed})"),
        width: RANDOM_WIDTH,
        height: RANDOM_HEIGHT,
        walls: scatter_walls(RANDOM_WIDTH, RANDOM_HEIGHT, RANDOM_DENSITY, &[start, end], &mut rng),
        start,
        end,
        search: SearchConfig::default(),
    }
}

fn scenarios(args: &[String]) -> Result<Vec<Scenario>, String> {
    let mut out = Vec::new();
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        if arg == "--seed" {
            let seed = it
                .next()
                .ok_or("--seed needs a value")?
                .parse::<u64>()
                .map_err(|e| format!("bad seed: {e}"))?;
            out.push(random_scenario(seed));
        } else {
            out.push(Scenario::load(arg).map_err(|e| format!("{arg}: {e}"))?);
        }
    }
    if out.is_empty() {
        out = scenario::builtin();
    }
    Ok(out)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let scenarios = match scenarios(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for (i, s) in scenarios.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let (_, report) = s.run();
        println!("{report}");
    }
}
