use broadside::{
    init_logging, Controller, Game, GameConfig, Side, DEFAULT_FLEET, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

/// Play a computer-vs-computer game and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Draw every ship's orientation at random.
    #[arg(long)]
    random_orientation: bool,
    /// Print both grids to stderr when the game ends.
    #[arg(long)]
    show_boards: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let config = GameConfig {
        height: cli.height,
        width: cli.width,
        opponent_name: "opponent".to_string(),
        ..GameConfig::default()
    };
    let mut game = Game::with_controllers(config, Controller::Computer, Controller::Computer)?;
    for side in [Side::Player, Side::Opponent] {
        game.randomize_fleet(side, &DEFAULT_FLEET, cli.random_orientation, &mut rng)?;
    }

    let winner = game.autoplay(&mut rng)?;

    if cli.show_boards {
        for side in [Side::Player, Side::Opponent] {
            eprintln!("{} board:", game.combatant(side).name());
            eprintln!("{}\n", game.board().grid(side));
        }
    }

    let result = json!({
        "winner": game.combatant(winner).name(),
        "turns": game.turns(),
        "player": game.summary(Side::Player),
        "opponent": game.summary(Side::Opponent),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
