/// the decision points inside one player's turn, in order. money gain
/// and salary payment are forced steps, not decisions, so they carry no
/// phase of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Generate,
    Hire,
    Fire,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Generate => write!(f, "resource decision"),
            Self::Hire => write!(f, "hire decision"),
            Self::Fire => write!(f, "fire decision"),
        }
    }
}
