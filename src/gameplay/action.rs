use super::board::GameBoard;
use super::seat::Seat;
use crate::cards::Card;
use crate::cards::Role;
use crate::resources::Resource;
use anyhow::Result;
use colored::*;

/// a legal move, identified by kind and parameters alone. the engine
/// only ever offers actions whose preconditions hold, so apply()
/// failing means the legality generator is broken: treat it as a fatal
/// internal-consistency error, never recover.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Empty,
    Generate { resource: Resource },
    Hire { card: Card, role: Role },
    Fire { card: Card, role: Role },
}

impl Action {
    /// mutate the boards in place. context is passed in explicitly
    /// rather than captured at construction, so actions stay plain
    /// comparable values.
    pub fn apply(&self, board: &mut GameBoard, seat: &mut Seat) -> Result<()> {
        match self {
            Self::Empty => Ok(()),
            Self::Generate { resource } => {
                anyhow::ensure!(
                    seat.can_generate(*resource),
                    "illegal action: cannot afford to generate {}",
                    resource
                );
                seat.generate(*resource);
                Ok(())
            }
            Self::Hire { card, role } => {
                anyhow::ensure!(
                    seat.has_vacancy(*role),
                    "illegal action: no {} vacancy",
                    role
                );
                let card = board.staff_mut().take_open(card)?;
                seat.hire(card, *role);
                Ok(())
            }
            Self::Fire { card, role } => {
                let fired = seat.fire(card, *role).ok_or_else(|| {
                    anyhow::anyhow!("illegal action: {} is not rostered as {}", card, role)
                })?;
                board.staff_mut().return_card(fired);
                Ok(())
            }
        }
    }

    pub fn project(&self) -> serde_json::Value {
        match self {
            Self::Empty => serde_json::json!({ "kind": "empty" }),
            Self::Generate { resource } => serde_json::json!({
                "kind": "generate",
                "resource": resource.to_string(),
            }),
            Self::Hire { card, role } => serde_json::json!({
                "kind": "hire",
                "card": card.project(),
                "role": role.to_string(),
            }),
            Self::Fire { card, role } => serde_json::json!({
                "kind": "fire",
                "card": card.project(),
                "role": role.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "{}", "PASS".white()),
            Self::Generate { resource } => {
                write!(f, "{}", format!("GENERATE {}", resource).cyan())
            }
            Self::Hire { card, role } => {
                write!(f, "{}", format!("HIRE {} as {}", card, role).green())
            }
            Self::Fire { card, role } => {
                write!(f, "{}", format!("FIRE {} as {}", card, role).red())
            }
        }
    }
}
