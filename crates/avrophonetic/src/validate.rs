//! Validation routines for transliteration grammars.
//!
//! Compiling a [`Grammar`](crate::grammar::Grammar) never fails: unknown rules
//! simply never hold and empty find-strings are skipped. These checks surface
//! such mistakes before a grammar is put to use. They are run by the
//! `avrophonetic` CLI when asked to validate a grammar file.

use crate::classify::CharClasses;
use crate::grammar::{Grammar, GrammarError, Pattern, Rule};

/// Represents a validation failure encountered when checking a grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The descriptive human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new [`ValidationError`] from a message string.
    fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for GrammarError {
    fn from(e: ValidationError) -> Self {
        GrammarError::Validation(e.message)
    }
}

/// Checks the basic shape of a parsed [`Grammar`](crate::grammar::Grammar).
///
/// - Fails if the grammar has no patterns.
/// - Fails on rules with an unknown scope or type.
/// - Fails on `exact` rules without a value.
/// - Warns about patterns with an empty find-string.
/// - Warns about characters declared both vowel and consonant.
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first failure found.
pub fn validate(grammar: &Grammar) -> Result<(), ValidationError> {
    if grammar.patterns.is_empty() {
        return Err(ValidationError::new("grammar has no patterns"));
    }

    check_rules(grammar)?;

    // Non-fatal: compilation skips these
    check_empty_finds(grammar);

    check_character_sets(grammar);

    Ok(())
}

fn check_rules(grammar: &Grammar) -> Result<(), ValidationError> {
    for (index, pattern) in grammar.patterns.iter().enumerate() {
        for rule in &pattern.rules {
            check_rule(rule, pattern, index)?;
        }
    }
    Ok(())
}

fn check_rule(rule: &Rule, pattern: &Pattern, index: usize) -> Result<(), ValidationError> {
    let context = format!("pattern #{index} ('{}')", pattern.find);

    if !rule.has_known_scope() {
        return Err(ValidationError::new(format!(
            "unknown rule scope '{}' in {context}",
            rule.scope
        )));
    }

    if rule.side().is_none() {
        return Err(ValidationError::new(format!(
            "unknown rule type '{}' in {context}",
            rule.rule_type
        )));
    }

    if rule.scope_name() == "exact" && rule.value.as_deref().is_none_or(str::is_empty) {
        return Err(ValidationError::new(format!(
            "'{}' rule without a value in {context}",
            rule.scope
        )));
    }

    Ok(())
}

fn check_empty_finds(grammar: &Grammar) {
    for (index, pattern) in grammar.patterns.iter().enumerate() {
        if pattern.find.is_empty() {
            eprintln!("warning: pattern #{index} has an empty find-string and will never match");
        }
    }
}

fn check_character_sets(grammar: &Grammar) {
    let classes = CharClasses::new(grammar);
    let ambiguous = classes.ambiguous();
    if !ambiguous.is_empty() {
        eprintln!("warning: characters declared both vowel and consonant: {ambiguous:?}");
    }

    if grammar.vowel.is_empty() && grammar.consonant.is_empty() {
        let uses_classes = grammar
            .patterns
            .iter()
            .flat_map(|p| &p.rules)
            .any(|r| matches!(r.scope_name(), "vowel" | "consonant"));
        if uses_classes {
            eprintln!("info: vowel/consonant rules present but no character sets are declared");
        }
    }
}
