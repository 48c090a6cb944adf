use crate::resources::Resource;
use serde::Serialize;

/// staff roles. each non-money resource has exactly one producing role;
/// the project manager produces money and is not hireable (yet).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Role {
    DataEngineer,
    SolutionArchitect,
    BiDeveloper,
    BusinessAnalyst,
    ProjectManager,
}

impl Role {
    /// the roles a seat may roster
    pub const fn hireable() -> &'static [Self] {
        &[
            Self::DataEngineer,
            Self::SolutionArchitect,
            Self::BiDeveloper,
            Self::BusinessAnalyst,
        ]
    }
    /// the role whose staff boost production of the given resource
    pub const fn of(resource: Resource) -> Self {
        match resource {
            Resource::RawData => Self::DataEngineer,
            Resource::Mart => Self::SolutionArchitect,
            Resource::Dashboard => Self::BiDeveloper,
            Resource::Insight => Self::BusinessAnalyst,
            Resource::Money => Self::ProjectManager,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::DataEngineer => write!(f, "DE"),
            Self::SolutionArchitect => write!(f, "SA"),
            Self::BiDeveloper => write!(f, "BI"),
            Self::BusinessAnalyst => write!(f, "BA"),
            Self::ProjectManager => write!(f, "PM"),
        }
    }
}
