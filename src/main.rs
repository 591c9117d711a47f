//! Console patience.

use std::io;

use clap::Parser;
use patience::core::GameConfig;
use patience::{shell, telemetry, Game};

/// Play patience in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Shuffle seed, for replaying a deal.
    #[arg(long, env = "PATIENCE_SEED")]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    telemetry::init_tracing();

    let config = GameConfig { seed: args.seed };
    let mut game = Game::from_config(&config);

    println!("Console patience. Seed: {}", game.seed());
    shell::run(&mut game, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
