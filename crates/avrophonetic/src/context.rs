//! Evaluation of context rules around a matched span.
//!
//! A candidate pattern is only eligible when every one of its rules holds for
//! the characters bordering the match. Boundary conditions (no character
//! before the start of the input, none after its end) are ordinary `false`
//! results, which negation then inverts.

use crate::classify::{is_punctuation_or_boundary, CharClasses};

/// Which side of a match a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The text immediately before the match start.
    Prefix,
    /// The text immediately after the match end.
    Suffix,
}

/// What a rule compares the neighboring text against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// One neighboring character is a grammar vowel.
    Vowel,
    /// One neighboring character is a grammar consonant.
    Consonant,
    /// One neighboring character is whitespace, punctuation or a boundary.
    Punctuation,
    /// The neighboring text equals this literal. Empty never matches.
    Exact(Vec<char>),
}

/// A compiled context rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContextRule {
    /// A recognized check, inverted when `negated`.
    Check {
        /// The comparison to perform.
        scope: Scope,
        /// The side of the match to inspect.
        side: Side,
        /// Whether the outcome is inverted.
        negated: bool,
    },
    /// A known scope with a type that names neither side. There is no
    /// neighbor to inspect, so it holds only when negated.
    Unanchored {
        /// Whether the outcome is inverted.
        negated: bool,
    },
    /// A rule whose scope was not understood. Never holds, even when
    /// written with a negation marker.
    Unrecognized,
}

/// A matched region of the input, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Index of the first matched character.
    pub start: usize,
    /// Number of matched characters.
    pub len: usize,
}

impl Span {
    /// Creates a span.
    #[must_use]
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Index one past the last matched character.
    #[must_use]
    pub fn end(self) -> usize {
        self.start + self.len
    }

    /// The single character bordering the span on `side`, if any.
    #[must_use]
    pub fn neighbor(self, input: &[char], side: Side) -> Option<char> {
        match side {
            Side::Prefix => input.get(self.start.checked_sub(1)?).copied(),
            Side::Suffix => input.get(self.end()).copied(),
        }
    }

    /// The `width` characters bordering the span on `side`, if all of them
    /// lie inside the input.
    #[must_use]
    pub fn neighbors(self, input: &[char], side: Side, width: usize) -> Option<&[char]> {
        match side {
            Side::Prefix => input.get(self.start.checked_sub(width)?..self.start),
            Side::Suffix => input.get(self.end()..self.end().checked_add(width)?),
        }
    }
}

/// Decides whether `rule` holds around `span` in `input`.
#[must_use]
pub fn rule_matches(
    classes: &CharClasses,
    input: &[char],
    span: Span,
    rule: &ContextRule,
) -> bool {
    let (scope, side, negated) = match rule {
        ContextRule::Check {
            scope,
            side,
            negated,
        } => (scope, side, negated),
        ContextRule::Unanchored { negated } => return *negated,
        ContextRule::Unrecognized => return false,
    };

    let holds = match scope {
        Scope::Vowel => span.neighbor(input, *side).is_some_and(|ch| classes.is_vowel(ch)),
        Scope::Consonant => span
            .neighbor(input, *side)
            .is_some_and(|ch| classes.is_consonant(ch)),
        Scope::Punctuation => span
            .neighbor(input, *side)
            .is_some_and(is_punctuation_or_boundary),
        Scope::Exact(value) => {
            !value.is_empty()
                && span
                    .neighbors(input, *side, value.len())
                    .is_some_and(|text| text == value.as_slice())
        }
    };

    holds != *negated
}

/// Returns `true` if `rules` is empty or every rule holds around `span`.
#[must_use]
pub fn rules_match(
    classes: &CharClasses,
    input: &[char],
    span: Span,
    rules: &[ContextRule],
) -> bool {
    rules.iter().all(|rule| rule_matches(classes, input, span, rule))
}
