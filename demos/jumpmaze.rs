//! Generate or load a jump maze and print what it takes to solve it.
//!
//! Run: cargo run --bin jumpmaze -- --radius 4 --seed 42 --hardest

use std::path::PathBuf;

use clap::Parser;
use jumpmaze_core::Point;
use jumpmaze_demos::{parse_point, replay, shade_grid, summary};
use jumpmaze_game::{GameConfig, Session};

#[derive(Parser, Debug)]
#[command(name = "jumpmaze", about = "Jump maze generator and solver")]
struct Args {
    /// Playable radius of a generated board
    #[arg(long, default_value_t = jumpmaze_game::config::DEFAULT_RADIUS)]
    radius: i32,

    /// Seed of a generated board (random when omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// Only check the landing cell of each jump
    #[arg(long, default_value_t = false)]
    skip_intermediate: bool,

    /// Hide reachability hints and disable route replay
    #[arg(long, default_value_t = false)]
    no_help: bool,

    /// Load a comma-separated board instead of generating one
    #[arg(long)]
    load: Option<PathBuf>,

    /// Replay the optimal route to this position, written X,Y
    #[arg(long, value_parser = parse_point, conflicts_with = "hardest")]
    route: Option<Point>,

    /// Replay the optimal route to the hardest reachable exit
    #[arg(long, default_value_t = false)]
    hardest: bool,

    /// Print only the board, in the format --load reads
    #[arg(long, default_value_t = false)]
    export: bool,

    /// Print the colour of every position
    #[arg(long, default_value_t = false)]
    shade: bool,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig {
        radius: args.radius,
        seed: args.seed,
        skip_intermediate: args.skip_intermediate,
        no_help: args.no_help,
    };
    let mut session = match &args.load {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            log::info!("loading board from {}", path.display());
            Session::import(&text, &config)?
        }
        None => Session::new(&config)?,
    };

    if args.export {
        println!("{}", session.board());
        return Ok(());
    }

    print!("{}", summary(&session));
    if args.shade {
        print!("{}", shade_grid(&session));
    }

    let target = if args.hardest {
        session.discovery().hardest_exit().map(|n| n.pos)
    } else {
        args.route
    };
    if let Some(target) = target {
        println!("route to {target}:");
        print!("{}", replay(&mut session, target)?);
    } else if args.hardest {
        println!("no exit to route to");
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
