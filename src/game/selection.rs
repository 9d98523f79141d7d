//! Player selection: picking three slots and claiming them as a set.
//!
//! The rendering layer forwards clicks as `toggle(slot)`. Clicking a picked
//! slot again un-picks it. The third distinct pick completes the selection,
//! which is then resolved against the table:
//! - valid set: the cards are removed and the table is refilled
//! - anything else: nothing changes
//!
//! Either way the pending selection is cleared.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::Card;
use crate::core::config::GameConfig;
use crate::core::error::{ConfigError, SetError};
use crate::zones::{Deck, SlotTriple, Table};

/// Result of toggling one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pick {
    /// Slot added; fewer than three picked.
    Selected(usize),
    /// Slot was already picked and has been removed.
    Deselected(usize),
    /// Third distinct slot picked; ready to resolve.
    Complete(SlotTriple),
    /// A fourth slot was picked on a complete selection. The selection was
    /// dropped without touching the table.
    Cleared,
}

/// Outcome of claiming three slots as a set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Claim {
    /// Valid set: cards removed and the table refilled.
    Accepted {
        /// The claimed cards, in pick order.
        removed: Vec<Card>,
        /// Cards dealt by the refill.
        drawn: usize,
    },
    /// Not a set. Table and deck untouched.
    Rejected(SlotTriple),
    /// Fewer than three slots picked; nothing to resolve.
    Incomplete,
}

impl Claim {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Claim::Accepted { .. })
    }
}

/// Pending slot picks, at most three.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    slots: SmallVec<[usize; 3]>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Picked slots in pick order.
    #[must_use]
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    #[must_use]
    pub fn contains(&self, slot: usize) -> bool {
        self.slots.contains(&slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The three picked slots, once complete.
    #[must_use]
    pub fn triple(&self) -> Option<SlotTriple> {
        match self.slots.as_slice() {
            &[a, b, c] => Some([a, b, c]),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Pick or un-pick a slot.
    pub fn toggle(&mut self, slot: usize) -> Pick {
        if let Some(pos) = self.slots.iter().position(|&s| s == slot) {
            self.slots.remove(pos);
            return Pick::Deselected(slot);
        }
        if self.slots.len() == 3 {
            self.slots.clear();
            return Pick::Cleared;
        }

        self.slots.push(slot);
        match self.triple() {
            Some(triple) => Pick::Complete(triple),
            None => Pick::Selected(slot),
        }
    }

    /// Claim the picked slots on `table`, refilling from `deck` with the
    /// table size and refill step of `config`.
    ///
    /// An incomplete selection is left as is. A complete one is cleared
    /// whatever the outcome.
    pub fn resolve(
        &mut self,
        table: &mut Table,
        deck: &mut Deck,
        config: &GameConfig,
    ) -> Result<Claim, SetError> {
        let Some(triple) = self.triple() else {
            return Ok(Claim::Incomplete);
        };
        self.clear();
        claim(table, deck, triple, config.table_size, config.refill_step)
    }
}

/// Check three slots and, if they hold a set, remove them and run the
/// refill protocol towards `table_size`.
///
/// Slots must be distinct and on the table, and `refill_step` at least 1;
/// otherwise this is a caller error and nothing changes.
pub fn claim(
    table: &mut Table,
    deck: &mut Deck,
    slots: SlotTriple,
    table_size: usize,
    refill_step: usize,
) -> Result<Claim, SetError> {
    if refill_step == 0 {
        return Err(ConfigError::RefillStep(refill_step).into());
    }
    let len = table.len();
    if let Some(&slot) = slots.iter().find(|&&slot| slot >= len) {
        return Err(SetError::InvalidSlot { slot, len });
    }
    let [a, b, c] = slots;
    if a == b || a == c {
        return Err(SetError::DuplicateSlot(a));
    }
    if b == c {
        return Err(SetError::DuplicateSlot(b));
    }

    if !table.is_set(slots) {
        debug!(?slots, "rejected claim");
        return Ok(Claim::Rejected(slots));
    }

    let removed = table.remove_cards(&slots)?;
    let drawn = table.fill_table_with(deck, table_size, refill_step)?;
    debug!(?slots, drawn, "accepted claim");
    Ok(Claim::Accepted { removed, drawn })
}
