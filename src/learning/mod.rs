pub mod farm;
pub use farm::*;

pub mod learner;
pub use learner::*;

pub mod table;
pub use table::*;
