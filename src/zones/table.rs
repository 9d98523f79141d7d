//! Cards in play.
//!
//! The `Table` is a slot-indexed sequence: the rendering layer addresses
//! cards by slot, picks three, and on a valid set the engine removes them
//! and runs the refill protocol.
//!
//! ## Refill protocol
//!
//! After any removal, `fill_table` restores the invariant
//! "the table shows a set, or the deck is empty":
//!
//! 1. Top the table back up to the target size (12) if the deck allows.
//! 2. While no set is showing and the deck has cards, deal 3 more.
//!
//! A game ends when the deck is empty and the table shows no set.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::deck::Deck;
use crate::cards::Card;
use crate::core::config::{DEFAULT_REFILL_STEP, DEFAULT_TABLE_SIZE};
use crate::core::error::{ConfigError, SetError};
use crate::rules::is_set_valid;

/// Three slots on the table.
pub type SlotTriple = [usize; 3];

/// The in-play cards, indexed by slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    cards: Vector<Card>,
}

impl Table {
    /// Create a table holding `cards` in slot order.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Cards in slot order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Card at `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Card> {
        self.cards.get(slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove the cards at `slots` and return them in the order given.
    ///
    /// All slots are checked first: each must be in range and appear once,
    /// or the call fails and the table is unchanged.
    ///
    /// Removal runs in descending slot order. Removing from the sequence
    /// shifts every later slot down by one, so deleting a lower slot first
    /// would make the pending higher slots point at the wrong cards.
    /// Remaining cards keep their relative order and slots are compacted.
    pub fn remove_cards(&mut self, slots: &[usize]) -> Result<Vec<Card>, SetError> {
        let len = self.cards.len();
        let mut descending: SmallVec<[usize; 3]> = SmallVec::with_capacity(slots.len());
        for &slot in slots {
            if slot >= len {
                return Err(SetError::InvalidSlot { slot, len });
            }
            descending.push(slot);
        }
        descending.sort_unstable_by(|a, b| b.cmp(a));
        if let Some(pair) = descending.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(SetError::DuplicateSlot(pair[0]));
        }

        let removed = slots.iter().map(|&slot| self.cards[slot]).collect();
        for slot in descending {
            self.cards.remove(slot);
        }
        Ok(removed)
    }

    /// Whether any three cards on the table form a set.
    ///
    /// Brute force over all C(n, 3) triples, stopping at the first hit.
    /// A standard table of 12 is at most 220 checks, so there is no index.
    #[must_use]
    pub fn has_set(&self) -> bool {
        let found = self.find_set();
        trace!(table = self.cards.len(), ?found, "scanned table for a set");
        found.is_some()
    }

    /// First valid triple in slot order (lowest `i`, then `j`, then `k`).
    #[must_use]
    pub fn find_set(&self) -> Option<SlotTriple> {
        triples(self.cards.len()).find(|&slots| self.is_set(slots))
    }

    /// Every valid triple on the table.
    #[must_use]
    pub fn find_all_sets(&self) -> Vec<SlotTriple> {
        triples(self.cards.len())
            .filter(|&slots| self.is_set(slots))
            .collect()
    }

    /// Whether the cards at three slots form a set. Out-of-range slots
    /// never do.
    #[must_use]
    pub fn is_set(&self, [a, b, c]: SlotTriple) -> bool {
        match (self.cards.get(a), self.cards.get(b), self.cards.get(c)) {
            (Some(a), Some(b), Some(c)) => is_set_valid(a, b, c),
            _ => false,
        }
    }

    /// Run the refill protocol with the standard sizes (12 cards, steps
    /// of 3). Returns how many cards were drawn.
    pub fn fill_table(&mut self, deck: &mut Deck) -> Result<usize, SetError> {
        self.fill_table_with(deck, DEFAULT_TABLE_SIZE, DEFAULT_REFILL_STEP)
    }

    /// Run the refill protocol towards `target` cards, adding `step` cards
    /// at a time while no set is showing.
    ///
    /// Requests are clamped to what the deck holds, so this never fails
    /// on a short deck; the last step may deal fewer than `step` cards.
    pub fn fill_table_with(
        &mut self,
        deck: &mut Deck,
        target: usize,
        step: usize,
    ) -> Result<usize, SetError> {
        if step == 0 {
            return Err(ConfigError::RefillStep(step).into());
        }

        let mut drawn = 0;

        let need = target.saturating_sub(self.cards.len()).min(deck.len());
        if need > 0 {
            self.cards.extend(deck.draw_cards(need)?);
            drawn += need;
        }

        while !deck.is_empty() && !self.has_set() {
            let extra = step.min(deck.len());
            self.cards.extend(deck.draw_cards(extra)?);
            drawn += extra;
            trace!(extra, table = self.cards.len(), "no set showing, dealt extra cards");
        }

        debug!(
            drawn,
            table = self.cards.len(),
            deck = deck.len(),
            "refilled table"
        );
        Ok(drawn)
    }
}

/// All unordered slot triples `i < j < k` below `len`, in lexicographic order.
fn triples(len: usize) -> impl Iterator<Item = SlotTriple> {
    (0..len).flat_map(move |i| {
        (i + 1..len).flat_map(move |j| (j + 1..len).map(move |k| [i, j, k]))
    })
}
