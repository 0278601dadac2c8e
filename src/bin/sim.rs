use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{init_logging, AiPlayer, GameEngine, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let mut engine = GameEngine::from_players(&mut p1, &mut p2, &mut rng)?;
    let winner = engine.play(&mut p1, &mut p2, &mut rng)?;

    let result = json!({
        "seed": seed,
        "winner": winner,
        "shots": {
            "human": engine.shots_fired(Side::Human),
            "computer": engine.shots_fired(Side::Computer),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
