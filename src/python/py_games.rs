//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, SetError};
use crate::game::{Claim, GameSession, Pick, Selection};

use super::py_core::PyCard;

fn to_py_err(err: SetError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a game session plus the player's pending selection.
#[pyclass(name = "SetGame")]
pub struct PySetGame {
    session: GameSession,
    selection: Selection,
}

#[pymethods]
impl PySetGame {
    /// Start a new shuffled game.
    ///
    /// # Arguments
    /// - seed: shuffle seed; random when omitted
    /// - attribute_count: attributes that vary across the deck (1-4)
    #[new]
    #[pyo3(signature = (seed = None, attribute_count = 4))]
    fn new(seed: Option<u64>, attribute_count: u8) -> PyResult<Self> {
        let mut config = GameConfig::new().with_attribute_count(attribute_count);
        config.seed = seed;
        let session = GameSession::from_config(&config).map_err(to_py_err)?;
        Ok(Self {
            session,
            selection: Selection::new(),
        })
    }

    /// Cards on the table in slot order.
    fn table(&self) -> Vec<PyCard> {
        self.session.table().cards().iter().copied().map(PyCard).collect()
    }

    /// Table as a flat uint8 array of value indices, four per card.
    fn table_array<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        let flat: Vec<u8> = self
            .session
            .table()
            .cards()
            .iter()
            .flat_map(|card| card.indices())
            .collect();
        PyArray1::from_slice_bound(py, &flat)
    }

    /// Toggle a slot.
    ///
    /// Returns one of "selected", "deselected", "cleared", "accepted",
    /// "rejected". The third distinct pick is resolved immediately.
    fn pick(&mut self, slot: usize) -> PyResult<&'static str> {
        match self.selection.toggle(slot) {
            Pick::Selected(_) => Ok("selected"),
            Pick::Deselected(_) => Ok("deselected"),
            Pick::Cleared => Ok("cleared"),
            Pick::Complete(_) => {
                match self.session.resolve(&mut self.selection).map_err(to_py_err)? {
                    Claim::Accepted { .. } => Ok("accepted"),
                    Claim::Rejected(_) | Claim::Incomplete => Ok("rejected"),
                }
            }
        }
    }

    /// Pending picked slots.
    fn selection(&self) -> Vec<usize> {
        self.selection.slots().to_vec()
    }

    /// Slots of a set on the table, if one exists.
    fn hint(&self) -> Option<(usize, usize, usize)> {
        self.session.hint().map(|[a, b, c]| (a, b, c))
    }

    /// Cards left in the deck.
    #[getter]
    fn cards_left(&self) -> usize {
        self.session.cards_left()
    }

    /// Shuffle seed of this game.
    #[getter]
    fn seed(&self) -> Option<u64> {
        self.session.seed()
    }

    /// False once the deck is empty and no set is showing.
    fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Copy the game (O(1)).
    fn copy(&self) -> Self {
        Self {
            session: self.session.clone(),
            selection: self.selection.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = if self.session.is_active() {
            "active"
        } else {
            "finished"
        };
        format!(
            "SetGame(table={}, cards_left={}, status={})",
            self.session.table().len(),
            self.session.cards_left(),
            status
        )
    }
}
