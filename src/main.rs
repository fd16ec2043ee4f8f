#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use seabattle::{
    generate_fleet, init_logging, Coord, Fleet, FleetLayout, GameSession, Phase, PlayerId,
    ShotLog, Side, BOARD_SIZE,
};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum GridSide {
    A,
    B,
}

#[cfg(feature = "std")]
impl From<GridSide> for Side {
    fn from(s: GridSide) -> Side {
        match s {
            GridSide::A => Side::A,
            GridSide::B => Side::B,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Generate a random fleet and print its layout line.
    Generate {
        #[arg(long, value_enum, default_value_t = GridSide::A)]
        side: GridSide,
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Parse a fleet layout file and check every fleet invariant.
    Validate {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = GridSide::A)]
        side: GridSide,
    },
    /// Play a seeded automatic game and print a JSON summary.
    Simulate {
        #[arg(long, help = "Fix RNG seed for a reproducible game (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn rng_from(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Uniformly random unfired cell on the given grid, if any remain.
#[cfg(feature = "std")]
fn random_target<R: Rng>(rng: &mut R, log: &ShotLog, side: Side) -> Option<Coord> {
    let total = BOARD_SIZE as usize * BOARD_SIZE as usize;
    let fired = log.dotted().len() + log.hits().len();
    let free = total - fired;
    if free == 0 {
        return None;
    }
    let mut pick = rng.random_range(0..free);
    for row in 1..=BOARD_SIZE {
        for col in 1..=BOARD_SIZE {
            let c = Coord::new(col + side.offset(), row);
            if log.already_fired(c) {
                continue;
            }
            if pick == 0 {
                return Some(c);
            }
            pick -= 1;
        }
    }
    None
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { side, seed } => {
            let mut rng = rng_from(seed);
            let fleet =
                generate_fleet(&mut rng, side.into()).map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", FleetLayout::from(&fleet));
        }
        Commands::Validate { file, side } => {
            let text = std::fs::read_to_string(&file)?;
            let layout: FleetLayout = text
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("{}: {}", file.display(), e))?;
            let fleet = Fleet::from_layout(side.into(), &layout)
                .map_err(|e| anyhow::anyhow!("{}: {}", file.display(), e))?;
            println!(
                "ok: {} ships, {} cells",
                layout.len(),
                fleet.cells_afloat()
            );
        }
        Commands::Simulate { seed } => {
            let mut rng = rng_from(seed);
            let fleet1 =
                generate_fleet(&mut rng, Side::A).map_err(|e| anyhow::anyhow!(e))?;
            let fleet2 =
                generate_fleet(&mut rng, Side::B).map_err(|e| anyhow::anyhow!(e))?;

            let mut session = GameSession::new();
            session
                .place_fleet(PlayerId::One, fleet1)
                .map_err(|e| anyhow::anyhow!(e))?;
            session
                .place_fleet(PlayerId::Two, fleet2)
                .map_err(|e| anyhow::anyhow!(e))?;
            session.start().map_err(|e| anyhow::anyhow!(e))?;

            let mut shots = [0usize; 2];
            while session.phase() == Phase::InProgress {
                let shooter = session.turn();
                let defender = shooter.other();
                let Some(target) =
                    random_target(&mut rng, session.shot_log(defender), defender.side())
                else {
                    break;
                };
                session.fire(target).map_err(|e| anyhow::anyhow!(e))?;
                shots[match shooter {
                    PlayerId::One => 0,
                    PlayerId::Two => 1,
                }] += 1;
            }

            let winner = match session.winner() {
                Some(PlayerId::One) => Some("player1"),
                Some(PlayerId::Two) => Some("player2"),
                None => None,
            };
            let result = json!({
                "winner": winner,
                "shots": { "player1": shots[0], "player2": shots[1] },
            });
            println!("{}", serde_json::to_string(&result)?);
        }
    }
    Ok(())
}
