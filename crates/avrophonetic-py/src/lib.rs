//! Python bindings for avrophonetic.

use avrophonetic::{parse_grammar, Converter, Mode};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// A compiled Banglish to Bangla transliterator.
#[pyclass(frozen, module = "_avrophonetic")]
struct Transliterator {
    inner: Converter,
}

#[pymethods]
impl Transliterator {
    /// Build from an optional JSON grammar; `bd` enables the BD shortcuts.
    #[new]
    #[pyo3(signature = (grammar_json=None, bd=false))]
    fn new(grammar_json: Option<&str>, bd: bool) -> PyResult<Self> {
        let mode = if bd { Mode::Bd } else { Mode::Strict };
        let mut builder = Converter::builder().mode(mode);
        if let Some(json) = grammar_json {
            let grammar = parse_grammar(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
            builder = builder.grammar(grammar);
        }
        Ok(Self {
            inner: builder.build(),
        })
    }

    /// Transliterate `text`.
    fn parse(&self, text: &str) -> String {
        self.inner.parse(text)
    }

    /// Number of patterns in the compiled grammar.
    #[getter]
    fn pattern_count(&self) -> usize {
        self.inner.parser().pattern_count()
    }
}

/// Transliterate with the embedded grammar in strict mode.
#[pyfunction]
fn to(text: &str) -> String {
    avrophonetic::to(text)
}

/// Transliterate with the embedded grammar in BD mode.
#[pyfunction]
fn to_bd(text: &str) -> String {
    avrophonetic::to_bd(text)
}

#[pymodule]
fn _avrophonetic(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Transliterator>()?;
    m.add_function(wrap_pyfunction!(to, m)?)?;
    m.add_function(wrap_pyfunction!(to_bd, m)?)?;
    Ok(())
}
