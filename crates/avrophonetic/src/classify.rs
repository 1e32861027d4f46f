//! Character classification for context rules.
//!
//! [`CharClasses`] answers the vowel/consonant/digit membership questions a
//! grammar defines; [`is_punctuation_or_boundary`] is the fixed word-boundary
//! predicate shared by every grammar.

use crate::grammar::Grammar;
use std::collections::HashSet;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Bangla full stop (dari).
pub const DARI: char = '\u{0964}';
/// Em dash.
pub const EM_DASH: char = '\u{2014}';
/// En dash.
pub const EN_DASH: char = '\u{2013}';

/// Membership sets built once from a grammar's character-set strings.
///
/// A character listed in both the vowel and the consonant string belongs to
/// both sets. Empty strings yield empty sets, so rules on them never hold.
#[derive(Debug, Clone, Default)]
pub struct CharClasses {
    vowels: HashSet<char>,
    consonants: HashSet<char>,
    digits: HashSet<char>,
}

impl CharClasses {
    /// Builds the sets from `grammar.vowel`, `grammar.consonant` and
    /// `grammar.number`.
    #[must_use]
    pub fn new(grammar: &Grammar) -> Self {
        Self {
            vowels: grammar.vowel.chars().collect(),
            consonants: grammar.consonant.chars().collect(),
            digits: grammar.number.chars().collect(),
        }
    }

    /// Returns `true` if `ch` is a declared vowel.
    #[inline]
    #[must_use]
    pub fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(&ch)
    }

    /// Returns `true` if `ch` is a declared consonant.
    #[inline]
    #[must_use]
    pub fn is_consonant(&self, ch: char) -> bool {
        self.consonants.contains(&ch)
    }

    /// Returns `true` if `ch` is a declared digit.
    #[inline]
    #[must_use]
    pub fn is_digit(&self, ch: char) -> bool {
        self.digits.contains(&ch)
    }

    /// Characters that are declared both vowel and consonant, sorted.
    #[must_use]
    pub fn ambiguous(&self) -> Vec<char> {
        let mut both: Vec<char> = self.vowels.intersection(&self.consonants).copied().collect();
        both.sort_unstable();
        both
    }
}

/// Returns `true` for whitespace, punctuation and the script's sentence and
/// dash boundaries.
///
/// Punctuation is any character in a Unicode `P*` general category. Symbols
/// such as `+`, `<` or `$` are not punctuation.
#[must_use]
pub fn is_punctuation_or_boundary(ch: char) -> bool {
    if ch.is_whitespace() || matches!(ch, DARI | EM_DASH | EN_DASH) {
        return true;
    }
    matches!(
        get_general_category(ch),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}
