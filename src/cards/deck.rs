use super::card::Card;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// cyclic three-pile card dispenser. the fixed catalog is partitioned at
/// every observable point into drawable (FIFO, hidden), open (face up,
/// held at open_size between transitions) and discard piles.
///
/// reshuffling is reactive: an empty drawable pile is refilled from the
/// discard pile in randomized order at the moment a draw needs it. a
/// deck may therefore transiently report zero drawable cards without
/// being stuck; legality is probed by calling open_card/take_open,
/// never by inspecting pile sizes.
#[derive(Debug, Clone)]
pub struct Deck {
    catalog: Vec<Card>,
    drawable: VecDeque<Card>,
    open: Vec<Card>,
    discard: Vec<Card>,
    open_size: usize,
    shuffles: usize,
    rng: SmallRng,
}

impl Deck {
    pub fn new(open_size: usize, cards: Vec<Card>, seed: u64) -> Result<Self> {
        anyhow::ensure!(
            cards.len() >= open_size,
            "deck underflow: {} cards cannot sustain {} open",
            cards.len(),
            open_size
        );
        Ok(Self {
            drawable: cards.iter().cloned().collect(),
            catalog: cards,
            open: Vec::new(),
            discard: Vec::new(),
            open_size,
            shuffles: 0,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    /// flip the next drawable card face up, reshuffling the discard
    /// pile underneath it whenever the drawable pile runs dry
    pub fn open_card(&mut self) -> Result<()> {
        if self.drawable.is_empty() {
            self.reshuffle();
        }
        let card = self
            .drawable
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("deck underflow: drawable and discard both empty"))?;
        self.open.push(card);
        if self.drawable.is_empty() && !self.discard.is_empty() {
            self.reshuffle();
        }
        Ok(())
    }

    /// claim a face-up card and immediately refill the open row.
    /// asking for a card that is not open is an engine legality bug.
    pub fn take_open(&mut self, card: &Card) -> Result<Card> {
        let at = self
            .open
            .iter()
            .position(|open| open == card)
            .ok_or_else(|| anyhow::anyhow!("illegal action: card is not open: {}", card))?;
        let taken = self.open.remove(at);
        self.open_card()?;
        Ok(taken)
    }

    pub fn return_card(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// flush the open row into the discard pile and deal a fresh one.
    /// used once at game setup.
    pub fn reopen_all(&mut self) -> Result<()> {
        self.discard.extend(self.open.drain(..));
        while self.open.len() < self.open_size {
            self.open_card()?;
        }
        Ok(())
    }

    fn reshuffle(&mut self) {
        self.discard.shuffle(&mut self.rng);
        self.drawable.extend(self.discard.drain(..));
        self.shuffles += 1;
    }

    pub fn open(&self) -> &[Card] {
        &self.open
    }
    pub fn len(&self) -> usize {
        self.catalog.len()
    }
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
    pub fn n_drawable(&self) -> usize {
        self.drawable.len()
    }
    pub fn n_open(&self) -> usize {
        self.open.len()
    }
    pub fn n_discard(&self) -> usize {
        self.discard.len()
    }
    pub fn shuffles(&self) -> usize {
        self.shuffles
    }

    /// order-insensitive digests of the visible piles. drawable order is
    /// hidden information and must not leak into state identity, so only
    /// the open and discard piles (plus the catalog) participate.
    fn visible(&self) -> (Vec<u64>, Vec<u64>) {
        let mut open = self.open.iter().map(Card::signature).collect::<Vec<_>>();
        let mut discard = self.discard.iter().map(Card::signature).collect::<Vec<_>>();
        open.sort_unstable();
        discard.sort_unstable();
        (open, discard)
    }

    pub fn project(&self) -> serde_json::Value {
        let (open, discard) = self.visible();
        serde_json::json!({
            "open": open.iter().map(|s| format!("{:016x}", s)).collect::<Vec<_>>(),
            "discard": discard.iter().map(|s| format!("{:016x}", s)).collect::<Vec<_>>(),
        })
    }
}

impl std::hash::Hash for Deck {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let (open, discard) = self.visible();
        self.catalog.hash(state);
        open.hash(state);
        discard.hash(state);
    }
}
impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.catalog == other.catalog && self.visible() == other.visible()
    }
}
impl Eq for Deck {}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "q:{} o:{} t:{}",
            self.drawable.len(),
            self.open.len(),
            self.discard.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::catalog;
    use crate::cards::role::Role;

    fn five_cards() -> Vec<Card> {
        (0..5)
            .map(|i| Card::new(Role::DataEngineer, i, 1))
            .collect()
    }

    fn conserved(deck: &Deck) -> bool {
        deck.n_drawable() + deck.n_open() + deck.n_discard() == deck.len()
    }

    #[test]
    fn setup_deals_full_open_row() {
        let mut deck = Deck::new(3, five_cards(), 0).unwrap();
        deck.reopen_all().unwrap();
        assert_eq!(deck.n_open(), 3);
        assert_eq!(deck.n_drawable(), 2);
        assert_eq!(deck.n_discard(), 0);
        assert!(conserved(&deck));
    }

    #[test]
    fn conservation_across_lifecycle() {
        let mut deck = Deck::new(4, catalog(), 42).unwrap();
        deck.reopen_all().unwrap();
        assert!(conserved(&deck));
        for _ in 0..100 {
            let card = deck.open()[0].clone();
            let taken = deck.take_open(&card).unwrap();
            assert!(conserved(&deck));
            deck.return_card(taken);
            assert!(conserved(&deck));
            assert_eq!(deck.n_open(), 4);
        }
    }

    #[test]
    fn exhaustion_triggers_single_reshuffle() {
        let mut deck = Deck::new(3, five_cards(), 7).unwrap();
        for _ in 0..5 {
            deck.open_card().unwrap();
        }
        assert_eq!(deck.n_open(), 5);
        assert_eq!(deck.n_drawable(), 0);
        let returned = deck.open.drain(..).collect::<Vec<_>>();
        for card in returned {
            deck.return_card(card);
        }
        assert_eq!(deck.n_discard(), 5);
        let before = deck.shuffles();
        deck.open_card().unwrap();
        assert_eq!(deck.shuffles(), before + 1);
        assert_eq!(deck.n_open(), 1);
        assert!(conserved(&deck));
    }

    #[test]
    fn take_open_refills_to_size() {
        let mut deck = Deck::new(3, five_cards(), 1).unwrap();
        deck.reopen_all().unwrap();
        let card = deck.open()[1].clone();
        deck.take_open(&card).unwrap();
        assert_eq!(deck.n_open(), 3);
        assert!(conserved(&deck));
    }

    #[test]
    fn taking_unopened_card_is_illegal() {
        let mut deck = Deck::new(2, five_cards(), 1).unwrap();
        deck.reopen_all().unwrap();
        let stranger = Card::new(Role::BusinessAnalyst, 5, 5);
        assert!(deck.take_open(&stranger).is_err());
    }

    #[test]
    fn empty_catalog_is_fatal_at_setup() {
        assert!(Deck::new(3, vec![], 0).is_err());
    }

    #[test]
    fn reshuffle_termination() {
        // discard + drawable >= open_size means open_card always succeeds
        let mut deck = Deck::new(3, five_cards(), 3).unwrap();
        deck.reopen_all().unwrap();
        for _ in 0..50 {
            let card = deck.open()[0].clone();
            let taken = deck.take_open(&card).unwrap();
            deck.return_card(taken);
        }
        assert_eq!(deck.n_open(), 3);
        assert!(conserved(&deck));
    }

    #[test]
    fn identity_tracks_visible_piles_only() {
        let mut a = Deck::new(3, five_cards(), 11).unwrap();
        let mut b = Deck::new(3, five_cards(), 99).unwrap();
        // different rng seeds, same visible piles
        a.reopen_all().unwrap();
        b.reopen_all().unwrap();
        assert_eq!(a, b);
    }
}
