//! Grammar-driven phonetic transliteration of romanized Bangla.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::multiple_crate_versions)]

/// Grammar definitions, JSON loading and composition.
///
/// A grammar is the swappable part of the system: find/replace patterns with
/// context rules, plus the character classes those rules refer to.
pub mod grammar;

/// Grammar validation utilities.
///
/// Compilation accepts any grammar; validation reports the mistakes that
/// compilation silently tolerates.
pub mod validate;

/// Vowel/consonant membership and the word-boundary predicate.
pub mod classify;

/// Context rule evaluation around a matched span.
pub mod context;

/// Longest-prefix pattern trie.
pub mod trie;

/// The compiled transliteration scanner.
pub mod parser;

/// Mode selection and cached default converters.
pub mod converter;

pub use converter::{default_bd_converter, default_converter, to, to_bd, Converter, Mode};
pub use grammar::{
    bd_extras, default_grammar, grammar_from_file, grammar_from_reader, merge_grammar,
    parse_grammar, Grammar, GrammarError, Pattern, Rule,
};
pub use parser::{compile, Parser};
pub use validate::{validate, ValidationError};
