#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use minefield::{
    init_logging, render_minefield, AiPlayer, CliPlayer, GameEngine, GameStatus, Minefield,
    Session, FAIL_MESSAGE, FIELD_HEIGHT, FIELD_WIDTH, GREET_MESSAGE, WIN_MESSAGE,
};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play on the 9x9 field from the terminal (the default).
    Play {
        #[arg(long, help = "Number of mines; asked interactively when omitted")]
        mines: Option<usize>,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the built-in player solve a field.
    Auto {
        #[arg(long, default_value_t = 10)]
        mines: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn read_mine_count() -> anyhow::Result<usize> {
    println!("{}", GREET_MESSAGE);
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read the mine count")?;
    line.trim()
        .parse()
        .with_context(|| format!("invalid mine count {:?}", line.trim()))
}

#[cfg(feature = "std")]
fn new_engine(mines: usize, seed: Option<u64>) -> anyhow::Result<GameEngine> {
    let field = Minefield::with_rng(FIELD_WIDTH, FIELD_HEIGHT, mines, make_rng(seed))?;
    Ok(GameEngine::new(field))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Play {
        mines: None,
        seed: None,
    });

    match command {
        Commands::Play { mines, seed } => {
            // ask before the player takes the stdin lock
            let mines = match mines {
                Some(m) => m,
                None => read_mine_count()?,
            };
            let engine = new_engine(mines, seed)?;
            let mut rng = make_rng(seed.map(|s| s.wrapping_add(1)));
            let mut session = Session::new(CliPlayer::stdio(), engine);
            session.run(&mut rng);
        }
        Commands::Auto { mines, seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let engine = new_engine(mines, seed)?;
            let mut rng = make_rng(seed.map(|s| s.wrapping_add(1)));
            let mut session = Session::new(AiPlayer::new(), engine);
            let status = session.run(&mut rng);

            print!("{}", render_minefield(session.engine().field()));
            match status {
                GameStatus::Won => println!("{}", WIN_MESSAGE),
                GameStatus::Lost => println!("{}", FAIL_MESSAGE),
                GameStatus::InProgress => println!(
                    "No safe move left after {} moves.",
                    session.engine().moves()
                ),
            }
        }
    }
    Ok(())
}
