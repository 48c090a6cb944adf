pub mod card;
pub use card::*;

pub mod catalog;
pub use catalog::*;

pub mod deck;
pub use deck::*;

pub mod role;
pub use role::*;
