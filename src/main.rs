use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::{
    init_logging, ui, AiPlayer, CliPlayer, GameEngine, Player, Side,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on the console.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two computer players.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => {
            let mut rng = make_rng(seed);
            let mut human = CliPlayer::stdio();
            let mut computer = AiPlayer::new();
            play(&mut human, &mut computer, &mut rng)?;
        }
        Commands::Demo { seed } => {
            let mut rng = make_rng(seed);
            let mut first = AiPlayer::new();
            let mut second = AiPlayer::new();
            play(&mut first, &mut second, &mut rng)?;
        }
    }
    Ok(())
}

fn play<'p>(
    human: &mut (dyn Player + 'p),
    computer: &mut (dyn Player + 'p),
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    let mut engine = GameEngine::from_players(human, computer, rng)?;
    let winner = engine.play(human, computer, rng)?;

    println!();
    match winner {
        Side::Human => println!("Victory!"),
        Side::Computer => println!("Defeat!"),
    }
    println!("Your final board:");
    print!("{}", ui::render_board(engine.board(Side::Human).cells()));
    println!("Opponent's final board:");
    print!("{}", ui::render_board(engine.board(Side::Computer).cells()));
    Ok(())
}
