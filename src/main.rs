use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use fission_atomic::variant_by_name;
use fission_core::{Game, STARTING_FEN, Situation, Variant, divide, move_count, perft, status};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Chess variant rules engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Position and rule set shared by every subcommand.
#[derive(Args, Debug)]
struct Setup {
    #[arg(short, long, default_value_t = String::from(STARTING_FEN))]
    fen: String,

    /// `atomic`, `standard` or `chess`.
    #[arg(short, long, default_value = "atomic")]
    variant: String,
}

impl Setup {
    fn resolve(&self) -> Result<(Arc<dyn Variant>, Situation)> {
        let variant =
            variant_by_name(&self.variant).ok_or_else(|| anyhow!("unknown variant '{}'", self.variant))?;
        let situation: Situation = self
            .fen
            .parse()
            .with_context(|| format!("invalid FEN '{}'", self.fen))?;
        Ok((variant, situation))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the legal moves and the game status.
    Moves {
        #[command(flatten)]
        setup: Setup,
    },
    /// Play UCI moves and print the resulting position.
    Play {
        #[command(flatten)]
        setup: Setup,

        /// Moves such as `e2e4` or `e7e8q`.
        moves: Vec<String>,
    },
    /// Count leaf nodes of the move tree.
    Perft {
        depth: usize,

        #[command(flatten)]
        setup: Setup,

        /// Break the count down by first move.
        #[arg(long)]
        divide: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Moves { setup } => moves(&setup),
        Command::Play { setup, moves } => play(&setup, &moves),
        Command::Perft {
            depth,
            setup,
            divide,
        } => run_perft(&setup, depth, divide),
    }
}

fn print_status(variant: &dyn Variant, situation: &Situation) {
    match status(variant, situation) {
        Some(status) => println!("status: {status}"),
        None => println!("status: {} to move", situation.turn().name()),
    }
}

fn moves(setup: &Setup) -> Result<()> {
    let (variant, situation) = setup.resolve()?;
    let game = Game::from_situation(variant, situation);
    let legal = game.legal_moves();

    for (from, list) in &legal {
        let targets: Vec<String> = list.iter().map(ToString::to_string).collect();
        println!("{from}: {}", targets.join(" "));
    }
    println!("{} legal moves", move_count(&legal));
    print_status(game.variant(), game.situation());
    Ok(())
}

fn play(setup: &Setup, moves: &[String]) -> Result<()> {
    let (variant, situation) = setup.resolve()?;
    let mut game = Game::from_situation(variant, situation);

    for (ply, uci) in moves.iter().enumerate() {
        game.play_uci(uci)
            .with_context(|| format!("move {} ('{uci}') rejected in {}", ply + 1, game.situation()))?;
    }

    println!("{}", game.situation());
    println!("{}", game.situation().board().pretty());
    print_status(game.variant(), game.situation());
    Ok(())
}

fn run_perft(setup: &Setup, depth: usize, split: bool) -> Result<()> {
    let (variant, situation) = setup.resolve()?;
    info!(variant = variant.name(), depth, fen = %situation, "perft");

    let start = Instant::now();
    let nodes = if split {
        let results = divide(variant.as_ref(), &situation, depth);
        for (uci, count) in &results {
            println!("{uci}: {count}");
        }
        results.iter().map(|(_, count)| count).sum::<u64>()
    } else {
        perft(variant.as_ref(), &situation, depth)
    };
    let elapsed = start.elapsed();

    println!(
        "perft({depth}) = {nodes} nodes ({} ms)",
        elapsed.as_millis()
    );
    Ok(())
}
