use super::settings::Settings;
use crate::cards::Deck;
use crate::cards::catalog;
use anyhow::Result;

/// the shared game board. today that is just the staff deck; project
/// and specials decks are reserved extension points.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct GameBoard {
    staff: Deck,
}

impl GameBoard {
    pub fn new(settings: &Settings, seed: u64) -> Result<Self> {
        Ok(Self {
            staff: Deck::new(settings.open_cards, catalog(), seed)?,
        })
    }
    /// deal the opening row of staff cards. once per game.
    pub fn setup(&mut self) -> Result<()> {
        self.staff.reopen_all()
    }
    pub fn staff(&self) -> &Deck {
        &self.staff
    }
    pub fn staff_mut(&mut self) -> &mut Deck {
        &mut self.staff
    }
    pub fn project(&self) -> serde_json::Value {
        serde_json::json!({ "staff": self.staff.project() })
    }
}

impl std::fmt::Display for GameBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "staff[{}]", self.staff)
    }
}
