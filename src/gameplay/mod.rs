pub mod action;
pub use action::*;

pub mod agent;
pub use agent::*;

pub mod board;
pub use board::*;

pub mod counters;
pub use counters::*;

pub mod game;
pub use game::*;

pub mod phase;
pub use phase::*;

pub mod seat;
pub use seat::*;

pub mod settings;
pub use settings::*;

pub mod state;
pub use state::*;
