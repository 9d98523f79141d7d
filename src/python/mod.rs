//! Python bindings for the Set rules engine.
//!
//! Lets a Python UI (tkinter, pygame, ...) drive the engine: it renders
//! `table()` and forwards clicks to `pick(slot)`.
//!
//! # Quick Start
//!
//! ```python
//! import set_engine
//!
//! game = set_engine.SetGame(seed=42)
//! for slot in game.hint():
//!     print(game.pick(slot))   # selected, selected, accepted
//!
//! print(game.cards_left, game.is_active())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// set_engine: rules engine for the card game Set.
#[pymodule]
fn set_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PySetGame>()?;
    Ok(())
}
