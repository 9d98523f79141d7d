//! Card bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Card;

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a card from value indices (0-2) in attribute order.
    #[new]
    fn new(color: u8, shape: u8, number: u8, fill: u8) -> PyResult<Self> {
        Card::from_indices([color, shape, number, fill])
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn color(&self) -> &'static str {
        self.0.color().name()
    }

    #[getter]
    fn shape(&self) -> &'static str {
        self.0.shape().name()
    }

    /// Glyph count (1-3).
    #[getter]
    fn number(&self) -> usize {
        self.0.number().count()
    }

    #[getter]
    fn fill(&self) -> &'static str {
        self.0.fill().name()
    }

    /// Value indices in attribute order.
    fn indices(&self) -> [u8; 4] {
        self.0.indices()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.id())
    }
}
