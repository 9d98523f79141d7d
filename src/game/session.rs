//! One game of Set: a deck, a table, and whether play can continue.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::selection::{claim, Claim, Selection};
use crate::core::config::GameConfig;
use crate::core::error::SetError;
use crate::core::rng::GameRng;
use crate::zones::{Deck, SlotTriple, Table};

/// Whether a game can continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Cards left to draw, or a set showing.
    Active,
    /// Deck empty and no set on the table.
    Finished,
}

/// A single game.
///
/// Owns its deck and table for the whole game. Rendering reads through
/// `table()`, `deck()` and `is_active()`; claimed sets go through `claim`
/// or `resolve`, or, for a caller managing the board itself, `board_mut`.
///
/// Cloning is O(1): deck and table are persistent vectors.
///
/// ```
/// use set_engine::{GameConfig, GameSession};
///
/// let session = GameSession::from_config(&GameConfig::new().with_seed(42)).unwrap();
/// assert!(session.table().len() >= 12);
/// assert_eq!(session.cards_left() + session.table().len(), 81);
/// assert!(session.table().has_set());
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    deck: Deck,
    table: Table,
    seed: Option<u64>,
}

impl GameSession {
    /// Start a game on `deck` with the standard table size.
    ///
    /// Deals the opening table straight from the deck. The deck should
    /// already be shuffled.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self::with_config(deck, GameConfig::default())
    }

    /// Start a game on `deck`, dealing `config.table_size` cards (or the
    /// whole deck if it is smaller).
    #[must_use]
    pub fn with_config(mut deck: Deck, config: GameConfig) -> Self {
        let table = Table::new(deck.draw_at_most(config.table_size));
        debug!(table = table.len(), deck = deck.len(), "dealt opening table");
        Self {
            config,
            deck,
            table,
            seed: None,
        }
    }

    /// Start a fresh game: build the deck the config describes, shuffle it,
    /// deal, then run the refill protocol so the first table already shows
    /// a set (or holds the whole deck).
    ///
    /// Without a configured seed the shuffle is seeded from entropy; the seed
    /// used is available from `seed()` either way.
    pub fn from_config(config: &GameConfig) -> Result<Self, SetError> {
        config.validate()?;

        let mut deck = Deck::new(config.attribute_count)?;
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        deck.shuffle(&mut rng);

        let mut session = Self::with_config(deck, config.clone());
        session.seed = Some(rng.seed());
        session.refill()?;
        Ok(session)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shuffle seed, when the session built its own deck.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Cards remaining in the deck.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    /// False once the deck is empty and the table shows no set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.deck.is_empty() || self.table.has_set()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_active() {
            GameStatus::Active
        } else {
            GameStatus::Finished
        }
    }

    /// Slots of a set currently on the table, if any.
    #[must_use]
    pub fn hint(&self) -> Option<SlotTriple> {
        self.table.find_set()
    }

    /// Mutable table and deck, for a selection collaborator that runs
    /// `Table::remove_cards` then `Table::fill_table` itself.
    pub fn board_mut(&mut self) -> (&mut Table, &mut Deck) {
        (&mut self.table, &mut self.deck)
    }

    /// Run the refill protocol with this session's sizes.
    pub fn refill(&mut self) -> Result<usize, SetError> {
        let drawn = self.table.fill_table_with(
            &mut self.deck,
            self.config.table_size,
            self.config.refill_step,
        )?;
        if drawn > 0 {
            self.log_if_finished();
        }
        Ok(drawn)
    }

    /// Claim three slots as a set. On success the cards leave the table and
    /// it is refilled; on rejection nothing changes.
    pub fn claim(&mut self, slots: SlotTriple) -> Result<Claim, SetError> {
        let outcome = claim(
            &mut self.table,
            &mut self.deck,
            slots,
            self.config.table_size,
            self.config.refill_step,
        )?;

        if outcome.is_accepted() {
            self.log_if_finished();
        }
        Ok(outcome)
    }

    /// Resolve a player's picks with this session's sizes, the same way
    /// `claim` does.
    pub fn resolve(&mut self, selection: &mut Selection) -> Result<Claim, SetError> {
        let outcome = selection.resolve(&mut self.table, &mut self.deck, &self.config)?;
        if outcome.is_accepted() {
            self.log_if_finished();
        }
        Ok(outcome)
    }

    fn log_if_finished(&self) {
        if !self.is_active() {
            info!(table = self.table.len(), "no sets left, game finished");
        }
    }
}
