//! High-level converter with mode selection and cached defaults.
//!
//! [`Converter`] pairs a grammar with a [`Mode`]. In [`Mode::Bd`] the BD
//! shortcut patterns are merged in front of the configured grammar before it
//! is compiled. Callers that only need the embedded grammar can use the
//! process-wide instances behind [`default_converter`] and
//! [`default_bd_converter`], or the [`to`] and [`to_bd`] shorthands.

use crate::grammar::{bd_extras, default_grammar, merge_grammar, Grammar};
use crate::parser::Parser;
use std::sync::OnceLock;

/// Output mode of a [`Converter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Avro-compatible baseline behavior.
    #[default]
    Strict,
    /// Bangladeshi typing shortcuts layered on top of strict mode.
    Bd,
}

/// Configuration for a [`Converter`].
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    mode: Mode,
    grammar: Option<Grammar>,
}

impl ConverterBuilder {
    /// Sets the output mode. Defaults to [`Mode::Strict`].
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Uses `grammar` instead of the embedded default grammar.
    #[must_use]
    pub fn grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = Some(grammar);
        self
    }

    /// Compiles the configured grammar.
    #[must_use]
    pub fn build(self) -> Converter {
        let base = self.grammar.unwrap_or_else(default_grammar);
        let grammar = match self.mode {
            Mode::Strict => base,
            Mode::Bd => merge_grammar(&bd_extras(), &base),
        };
        Converter {
            mode: self.mode,
            parser: Parser::new(&grammar),
        }
    }
}

/// A compiled transliterator.
#[derive(Debug, Clone)]
pub struct Converter {
    mode: Mode,
    parser: Parser,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// A strict-mode converter over the embedded grammar.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a converter.
    #[must_use]
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::default()
    }

    /// Converts romanized input to Bangla.
    #[must_use]
    pub fn parse(&self, text: &str) -> String {
        self.parser.parse(text)
    }

    /// The mode this converter was built with.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The underlying compiled parser.
    #[must_use]
    pub fn parser(&self) -> &Parser {
        &self.parser
    }
}

static DEFAULT: OnceLock<Converter> = OnceLock::new();
static DEFAULT_BD: OnceLock<Converter> = OnceLock::new();

/// The shared strict-mode converter over the embedded grammar.
///
/// Built on first use.
#[must_use]
pub fn default_converter() -> &'static Converter {
    DEFAULT.get_or_init(Converter::new)
}

/// The shared BD-mode converter over the embedded grammar.
///
/// Built on first use.
#[must_use]
pub fn default_bd_converter() -> &'static Converter {
    DEFAULT_BD.get_or_init(|| Converter::builder().mode(Mode::Bd).build())
}

/// Converts `text` with the embedded grammar in strict mode.
#[must_use]
pub fn to(text: &str) -> String {
    default_converter().parse(text)
}

/// Converts `text` with the embedded grammar in BD mode.
#[must_use]
pub fn to_bd(text: &str) -> String {
    default_bd_converter().parse(text)
}
