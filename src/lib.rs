pub mod cards;
pub mod gameplay;
pub mod learning;
pub mod resources;

/// scalar for state values and Q estimates
pub type Utility = f32;

// ============================================================================
// GAME CONSTANTS
// Balancing knobs consumed read-only at board/engine construction. Override
// any of them through gameplay::Settings.
// ============================================================================
/// how many staff cards lie face up on the shared board
pub const MAX_OPEN_CARDS: usize = 4;
/// money earned per unit of insight at the start of every turn
pub const MONEY_PER_INSIGHT: f32 = 0.5;
/// first seat whose money strictly exceeds this wins
pub const MONEY_TO_WIN: u32 = 100;
/// rounds before the game is called with no winner
pub const ROUND_LIMIT: usize = 50;
/// per-role roster capacity of a single seat
pub const ROSTER_CAP: usize = 2;

// ============================================================================
// STATE VALUATION
// Weights for the cached scalar score of a snapshot. Only ratios matter.
// ============================================================================
/// weight of one unit of money
pub const WEIGHT_MONEY: Utility = 100.0;
/// weight of one unit of any non-money resource
pub const WEIGHT_RESOURCE: Utility = 5.0;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
