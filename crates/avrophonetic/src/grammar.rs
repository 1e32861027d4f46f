//! Grammar definitions and JSON ingestion.
//!
//! A [`Grammar`] is the declarative description of a transliteration scheme:
//! an ordered list of find/replace [`Pattern`]s plus the character classes the
//! context rules refer to. It mirrors the Avro-style phonetic grammar JSON
//! format and uses [`facet_json`] for deserialization.
//!
//! Grammars are plain data. Compiling one into something that can transliterate
//! text is the job of [`Parser`](crate::parser::Parser).

use facet::Facet;
use std::io::Read;
use std::path::Path;

/// Textual context rules attached to patterns.
pub mod rules;

/// The embedded default and BD shortcut grammars.
pub mod builtin;

pub use builtin::{bd_extras, default_grammar};
pub use rules::Rule;

/// A complete transliteration grammar.
///
/// The order of [`patterns`](Grammar::patterns) only matters when several
/// patterns match the same text at the same position: the first listed whose
/// rules hold is chosen. Several patterns may share one find-string.
///
/// The character-set fields are strings in which every character is a member
/// of the set. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
pub struct Grammar {
    /// Find/replace patterns, in priority order.
    #[facet(default)]
    pub patterns: Vec<Pattern>,

    /// Characters treated as vowels by `vowel` rules.
    #[facet(default)]
    pub vowel: String,

    /// Characters treated as consonants by `consonant` rules.
    #[facet(default)]
    pub consonant: String,

    /// Digit characters of the source alphabet.
    #[facet(default)]
    pub number: String,

    /// Case-sensitive marker characters.
    ///
    /// Carried through loading and merging; matching does not consult it.
    #[facet(rename = "casesensitive")]
    #[facet(default)]
    pub case_sensitive: String,
}

/// A single find/replace pattern with optional context rules.
///
/// An empty `replace` deletes the matched text. A pattern without rules is
/// eligible whenever its `find` string matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
pub struct Pattern {
    /// Source-alphabet text to match. Empty find-strings are never matched.
    pub find: String,

    /// Target-script text emitted for a match.
    #[facet(default)]
    pub replace: String,

    /// Context preconditions; all of them must hold.
    #[facet(default)]
    pub rules: Vec<Rule>,
}

impl Pattern {
    /// Creates an unconditional pattern.
    #[must_use]
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
            rules: Vec::new(),
        }
    }

    /// Appends a context rule and returns the pattern.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns `true` if this pattern has no context rules.
    #[cfg(test)]
    pub(crate) fn is_unconditional(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Grammar {
    /// Creates a grammar with the given patterns and empty character sets.
    #[must_use]
    pub fn with_patterns(patterns: Vec<Pattern>) -> Self {
        Self {
            patterns,
            ..Self::default()
        }
    }

    /// Returns the patterns registered under exactly `find`, in priority order.
    #[cfg(test)]
    pub(crate) fn patterns_for<'a>(
        &'a self,
        find: &'a str,
    ) -> impl Iterator<Item = &'a Pattern> + 'a {
        self.patterns.iter().filter(move |p| p.find == find)
    }
}

/// Parse a JSON grammar document into a [`Grammar`].
///
/// # Errors
///
/// Returns [`GrammarError::JsonParse`] if the text is not valid JSON or does
/// not have the shape of a grammar document.
pub fn parse_grammar(json: &str) -> Result<Grammar, GrammarError> {
    facet_json::from_str(json).map_err(|e| GrammarError::JsonParse(e.to_string()))
}

/// Read a JSON grammar document from any reader.
///
/// # Errors
///
/// Returns [`GrammarError::Io`] if reading fails, or
/// [`GrammarError::JsonParse`] if the content is not a grammar document.
pub fn grammar_from_reader(mut reader: impl Read) -> Result<Grammar, GrammarError> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    parse_grammar(&json)
}

/// Load a JSON grammar document from a file.
///
/// # Errors
///
/// Returns [`GrammarError::Io`] if the file cannot be opened or read, or
/// [`GrammarError::JsonParse`] if the content is not a grammar document.
pub fn grammar_from_file(path: impl AsRef<Path>) -> Result<Grammar, GrammarError> {
    let file = std::fs::File::open(path.as_ref())?;
    grammar_from_reader(std::io::BufReader::new(file))
}

/// Layer `front` on top of `back`.
///
/// The result holds `front`'s patterns followed by `back`'s, so `front` wins
/// ties. Each character-set field is taken from `back` unless `front`
/// provides a non-blank value.
#[must_use]
pub fn merge_grammar(front: &Grammar, back: &Grammar) -> Grammar {
    fn pick(front: &str, back: &str) -> String {
        if front.trim().is_empty() {
            back.to_owned()
        } else {
            front.to_owned()
        }
    }

    let mut patterns = Vec::with_capacity(front.patterns.len() + back.patterns.len());
    patterns.extend(front.patterns.iter().cloned());
    patterns.extend(back.patterns.iter().cloned());

    Grammar {
        patterns,
        vowel: pick(&front.vowel, &back.vowel),
        consonant: pick(&front.consonant, &back.consonant),
        number: pick(&front.number, &back.number),
        case_sensitive: pick(&front.case_sensitive, &back.case_sensitive),
    }
}

/// Errors raised while loading or checking a grammar.
#[derive(Debug)]
pub enum GrammarError {
    /// The grammar source could not be read.
    Io(std::io::Error),

    /// The input was not valid JSON or did not match the grammar shape.
    JsonParse(String),

    /// The grammar parsed but failed validation.
    Validation(String),
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GrammarError::Io(e) => write!(f, "cannot read grammar: {e}"),
            GrammarError::JsonParse(e) => write!(f, "JSON parse error: {e}"),
            GrammarError::Validation(msg) => write!(f, "validation error: {msg}"),
        }
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrammarError::Io(e) => Some(e),
            GrammarError::JsonParse(_) | GrammarError::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for GrammarError {
    fn from(e: std::io::Error) -> Self {
        GrammarError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_grammar() {
        let json = r#"{
            "patterns": [
                {"find": "ami", "replace": "আমি"},
                {
                    "find": "a",
                    "replace": "া",
                    "rules": [{"scope": "consonant", "type": "prefix"}]
                }
            ],
            "vowel": "aeiou",
            "consonant": "bcdfghjklmnpqrstvwxyz",
            "number": "0123456789",
            "casesensitive": "OI"
        }"#;

        let grammar = parse_grammar(json).unwrap();
        assert_eq!(grammar.patterns.len(), 2);
        assert_eq!(grammar.patterns[0].find, "ami");
        assert_eq!(grammar.patterns[1].rules[0].scope, "consonant");
        assert_eq!(grammar.patterns[1].rules[0].rule_type, "prefix");
        assert_eq!(grammar.vowel, "aeiou");
        assert_eq!(grammar.case_sensitive, "OI");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let grammar = parse_grammar(r#"{"patterns": [{"find": "x"}]}"#).unwrap();
        assert_eq!(grammar.patterns[0].replace, "");
        assert!(grammar.patterns[0].rules.is_empty());
        assert!(grammar.vowel.is_empty());
        assert!(grammar.consonant.is_empty());
    }

    #[test]
    fn test_exact_rule_value() {
        let json = r#"{"patterns": [{
            "find": "r",
            "replace": "র",
            "rules": [{"scope": "!exact", "type": "suffix", "value": "ri"}]
        }]}"#;
        let grammar = parse_grammar(json).unwrap();
        let rule = &grammar.patterns[0].rules[0];
        assert_eq!(rule.value.as_deref(), Some("ri"));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = parse_grammar("{\"patterns\": [").unwrap_err();
        assert!(matches!(err, GrammarError::JsonParse(_)));
        assert!(err.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn test_reader_loads_grammar() {
        let json = r#"{"patterns": [{"find": "na", "replace": "না"}]}"#;
        let grammar = grammar_from_reader(json.as_bytes()).unwrap();
        assert_eq!(grammar.patterns[0].replace, "না");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = grammar_from_file("/nonexistent/avrophonetic/grammar.json").unwrap_err();
        assert!(matches!(err, GrammarError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_merge_front_patterns_first() {
        let front = Grammar::with_patterns(vec![Pattern::new("tmi", "তুমি")]);
        let back = Grammar {
            patterns: vec![Pattern::new("tumi", "তুমি")],
            vowel: "aeiou".into(),
            consonant: "bcd".into(),
            number: "0123456789".into(),
            case_sensitive: "OI".into(),
        };

        let merged = merge_grammar(&front, &back);
        let finds: Vec<_> = merged.patterns.iter().map(|p| p.find.as_str()).collect();
        assert_eq!(finds, ["tmi", "tumi"]);
        assert_eq!(merged.vowel, "aeiou");
        assert_eq!(merged.case_sensitive, "OI");
    }

    #[test]
    fn test_merge_front_sets_override_unless_blank() {
        let front = Grammar {
            vowel: "aeiouy".into(),
            consonant: "  ".into(),
            case_sensitive: "OIU".into(),
            ..Grammar::default()
        };
        let back = Grammar {
            vowel: "aeiou".into(),
            consonant: "bcd".into(),
            case_sensitive: "OI".into(),
            ..Grammar::default()
        };

        let merged = merge_grammar(&front, &back);
        assert_eq!(merged.vowel, "aeiouy");
        assert_eq!(merged.consonant, "bcd");
        assert_eq!(merged.case_sensitive, "OIU");
    }

    #[test]
    fn test_patterns_for_keeps_order() {
        let grammar = Grammar::with_patterns(vec![
            Pattern::new("a", "া").with_rule(Rule::new("consonant", "prefix")),
            Pattern::new("k", "ক"),
            Pattern::new("a", "অ"),
        ]);
        let replaces: Vec<_> = grammar.patterns_for("a").map(|p| p.replace.as_str()).collect();
        assert_eq!(replaces, ["া", "অ"]);
    }
}
