pub mod conversion;
pub use conversion::*;

pub mod ledger;
pub use ledger::*;

pub mod resource;
pub use resource::*;

pub mod scale;
pub use scale::*;
