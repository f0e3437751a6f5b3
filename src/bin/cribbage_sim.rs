//! Runs a batch of simulated cribbage games and prints the summary.

use clap::Parser;
use cribbage::{SimulationOptions, Simulator};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// How many games to play
    #[arg(short, long, default_value_t = 10_000)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, games = args.num_games, "starting simulation");

    let options = SimulationOptions::default()
        .with_games(args.num_games)
        .with_seed(seed);
    let report = Simulator::new(options).run();
    let summary = report.summary;

    println!("=== CRIBBAGE GAME SIMULATION RESULTS ===");
    println!();
    println!("Total Games Played: {}", summary.total_games);
    println!("Player Wins: {}", summary.player_wins);
    println!("Computer Wins: {}", summary.computer_wins);
    println!("Player Win Rate: {:.1}%", summary.win_rate_percent);
    println!("Average Player Score: {:.1}", summary.avg_player_score);
    println!("Average Computer Score: {:.1}", summary.avg_computer_score);
}
