use minefield::{AiPlayer, GameEngine, Minefield, Session, FIELD_HEIGHT, FIELD_WIDTH};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    minefield::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <mines>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mines: usize = args[2].parse()?;

    let field = Minefield::with_rng(
        FIELD_WIDTH,
        FIELD_HEIGHT,
        mines,
        SmallRng::seed_from_u64(seed),
    )?;
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut session = Session::new(AiPlayer::new(), GameEngine::new(field));
    let status = session.run(&mut rng);

    let result = json!({
        "status": status,
        "moves": session.engine().moves(),
        "mines": mines,
        "seed": seed,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
