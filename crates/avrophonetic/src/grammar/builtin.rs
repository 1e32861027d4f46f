//! Grammars compiled into the crate.
//!
//! The default grammar is deliberately small: a few common words, the vowel
//! signs and a handful of consonants. Load a complete Avro-compatible grammar
//! with [`grammar_from_file`](super::grammar_from_file) for full coverage.

use super::{Grammar, Pattern, Rule};

const VOWELS: &str = "aeiouAEIOU";
const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyzBCDFGHJKLMNPQRSTVWXYZ";
const DIGITS: &str = "0123456789";
const CASE_SENSITIVE: &str = "OI";

/// A vowel-sign pattern, used only directly after a consonant.
fn vowel_sign(find: &str, sign: &str) -> Pattern {
    Pattern::new(find, sign).with_rule(Rule::new("consonant", "prefix"))
}

/// Returns the embedded baseline grammar used in strict mode.
#[must_use]
pub fn default_grammar() -> Grammar {
    Grammar {
        vowel: VOWELS.to_owned(),
        consonant: CONSONANTS.to_owned(),
        number: DIGITS.to_owned(),
        case_sensitive: CASE_SENSITIVE.to_owned(),
        patterns: vec![
            // Whole words
            Pattern::new("ami", "আমি"),
            Pattern::new("bangla", "বাংলা"),
            Pattern::new("gan", "গান"),
            Pattern::new("gai", "গাই"),
            Pattern::new("tumi", "তুমি"),
            Pattern::new("tomra", "তোমরা"),
            Pattern::new("kisu", "কিছু"),
            Pattern::new("na", "না"),
            // Vowel signs take precedence over the standalone vowels below
            vowel_sign("a", "া"),
            vowel_sign("i", "ি"),
            vowel_sign("u", "ু"),
            vowel_sign("e", "ে"),
            vowel_sign("o", "ো"),
            Pattern::new("a", "অ"),
            Pattern::new("i", "ই"),
            Pattern::new("u", "উ"),
            Pattern::new("e", "এ"),
            Pattern::new("o", "ও"),
            // Consonants
            Pattern::new("k", "ক"),
            Pattern::new("g", "গ"),
            Pattern::new("n", "ন"),
            Pattern::new("m", "ম"),
            Pattern::new("t", "ত"),
            Pattern::new("b", "ব"),
            Pattern::new("l", "ল"),
            Pattern::new("y", "য়"),
        ],
    }
}

/// Returns the Bangladeshi typing shortcuts layered on top of strict mode.
///
/// Only the patterns are meant to be merged in front of a baseline grammar;
/// the character sets are the default grammar's.
#[must_use]
pub fn bd_extras() -> Grammar {
    Grammar {
        patterns: vec![
            Pattern::new("tmi", "তুমি"),
            Pattern::new("tmra", "তোমরা"),
            Pattern::new("kmn", "কেমন"),
            Pattern::new("valo", "ভালো"),
            Pattern::new("bhalo", "ভালো"),
            Pattern::new("jodi", "যদি"),
            Pattern::new("kisuina", "কিছুই না"),
            Pattern::new("nai", "নাই"),
            Pattern::new("hoy", "হয়"),
            Pattern::new("hoyeche", "হয়েছে"),
            // "ta" at a word boundary is the classifier suffix
            Pattern::new("ta", "টা").with_rule(Rule::new("punctuation", "prefix")),
        ],
        ..default_grammar()
    }
}
