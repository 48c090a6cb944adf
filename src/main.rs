use clap::Parser;
use datafirm::gameplay::Settings;
use datafirm::learning::Farm;

/// train tabular q-learning agents over many parallel board games
#[derive(Parser)]
#[command(name = "farm", version, about)]
struct Args {
    /// seats at each table
    #[arg(long, default_value_t = 3)]
    seats: usize,
    /// concurrent games per training pass (defaults to core count)
    #[arg(long)]
    games: Option<usize>,
    /// training passes to run
    #[arg(long, default_value_t = 100)]
    passes: usize,
    /// root seed for decks, exploration and hyperparameters
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    datafirm::log();
    let args = Args::parse();
    let games = args.games.unwrap_or_else(num_cpus::get);
    log::info!(
        "farming {} games x {} seats for {} passes (seed {})",
        games,
        args.seats,
        args.passes,
        args.seed
    );
    let mut farm = Farm::new(args.seats, games, Settings::default(), args.seed);
    for _ in 0..args.passes {
        farm.train()?;
    }
    let table = farm.merged_table();
    let best = farm.merged_best();
    log::info!(
        "merged q-table: {} states, {} estimates",
        table.len(),
        table.values().map(|row| row.len()).sum::<usize>()
    );
    log::info!("best-decision record: {} states", best.len());
    Ok(())
}
