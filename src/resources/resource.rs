/// the five commodities of the data pipeline, in pipeline order.
/// raw data is refined into marts, marts into dashboards, dashboards
/// into insights, and insights pay out as money.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Resource {
    RawData,
    Mart,
    Dashboard,
    Insight,
    Money,
}

impl Resource {
    pub const fn all() -> &'static [Self] {
        &[
            Self::RawData,
            Self::Mart,
            Self::Dashboard,
            Self::Insight,
            Self::Money,
        ]
    }
    /// everything a seat can choose to produce on its turn
    pub const fn producible() -> &'static [Self] {
        &[Self::RawData, Self::Mart, Self::Dashboard, Self::Insight]
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::RawData => write!(f, "raw_data"),
            Self::Mart => write!(f, "mart"),
            Self::Dashboard => write!(f, "dashboard"),
            Self::Insight => write!(f, "insight"),
            Self::Money => write!(f, "money"),
        }
    }
}

use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
