//! Self-play Tablut example
//!
//! Two engines play a full game from the standard opening. Pass a per-move
//! budget in milliseconds as the first argument (default 200) and set
//! `RUST_LOG=debug` to see how each move was chosen.

use std::env;
use std::time::Duration;

use log::info;
use tablut_agent::tablut::{TablutSide, TablutState};
use tablut_agent::{DecisionEngine, EngineConfig, GameState};

fn main() -> Result<(), tablut_agent::AgentError> {
    // Initialize logging
    env_logger::init();

    let budget_ms = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(200);

    println!("Tablut Self-Play Example");
    println!("========================");
    println!();

    let config = EngineConfig::default().with_time_budget(Duration::from_millis(budget_ms));
    let mut muscovites = DecisionEngine::new(config.clone());
    let mut swedes = DecisionEngine::new(config);

    let mut game = TablutState::new();

    while !game.is_terminal() {
        println!("{}\n", game);

        let side = game.to_move();
        let engine = match side {
            TablutSide::Muscovite => &mut muscovites,
            TablutSide::Swede => &mut swedes,
        };

        let mv = engine.choose_move(&game, &side, &side.opponent())?;
        let stats = engine.statistics();
        info!(
            "{:?} plays {} ({} rollouts, {:?})",
            side,
            mv,
            stats.rollouts,
            stats.decision
        );
        println!("{:?} plays {}", side, mv);

        game = game.apply_move(&mv)?;
    }

    println!("{}\n", game);
    match game.winner() {
        Some(side) => println!("{:?} win after {} moves", side, game.ply()),
        None => println!("Draw after {} moves", game.ply()),
    }

    Ok(())
}
