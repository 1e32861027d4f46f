//! The transliteration scanner.
//!
//! A [`Parser`] is compiled once from a [`Grammar`] and then converts any
//! number of inputs. Scanning is left to right: at each position the longest
//! registered find-string wins, context rules choose among patterns sharing
//! that find-string, and characters nothing matches are copied through.

use crate::classify::CharClasses;
use crate::context::{rules_match, ContextRule, Span};
use crate::grammar::Grammar;
use crate::trie::PatternTrie;

/// A pattern as stored in the trie: its output and its compiled rules.
#[derive(Debug, Clone)]
struct CompiledPattern {
    replace: String,
    rules: Vec<ContextRule>,
}

/// A compiled grammar ready to transliterate text.
///
/// Immutable after construction; a single instance can be shared across
/// threads and used concurrently.
#[derive(Debug, Clone)]
pub struct Parser {
    grammar: Grammar,
    trie: PatternTrie<CompiledPattern>,
    classes: CharClasses,
}

/// Compiles `grammar` into a [`Parser`].
#[must_use]
pub fn compile(grammar: &Grammar) -> Parser {
    Parser::new(grammar)
}

impl Parser {
    /// Compiles `grammar`. Patterns with an empty find-string are skipped;
    /// a grammar without patterns yields a parser that echoes its input.
    #[must_use]
    pub fn new(grammar: &Grammar) -> Self {
        let mut trie = PatternTrie::new();
        for pattern in &grammar.patterns {
            trie.insert(
                &pattern.find,
                CompiledPattern {
                    replace: pattern.replace.clone(),
                    rules: pattern.rules.iter().map(crate::grammar::Rule::compile).collect(),
                },
            );
        }

        Parser {
            grammar: grammar.clone(),
            trie,
            classes: CharClasses::new(grammar),
        }
    }

    /// The grammar this parser was compiled from.
    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The character classes derived from the grammar.
    #[must_use]
    pub fn classes(&self) -> &CharClasses {
        &self.classes
    }

    /// Number of patterns that were compiled into the trie.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.trie.len()
    }

    /// Transliterates `text`.
    ///
    /// Total over every input: unmatched characters pass through unchanged.
    /// When none of the longest match's candidates has its rules satisfied,
    /// the first candidate is used.
    #[must_use]
    pub fn parse(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let input: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());

        let mut i = 0;
        while i < input.len() {
            let chosen = self
                .trie
                .match_longest(&input, i)
                .and_then(|(len, candidates)| {
                    self.select(&input, Span::new(i, len), candidates)
                        .map(|pattern| (len, pattern))
                });

            match chosen {
                Some((len, pattern)) => {
                    out.push_str(&pattern.replace);
                    i += len;
                }
                None => {
                    out.push(input[i]);
                    i += 1;
                }
            }
        }

        out
    }

    /// Picks the first candidate whose rules hold, falling back to the first
    /// candidate.
    fn select<'a>(
        &self,
        input: &[char],
        span: Span,
        candidates: &'a [CompiledPattern],
    ) -> Option<&'a CompiledPattern> {
        candidates
            .iter()
            .find(|c| rules_match(&self.classes, input, span, &c.rules))
            .or_else(|| candidates.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Pattern, Rule};

    fn grammar(patterns: Vec<Pattern>) -> Grammar {
        Grammar {
            patterns,
            vowel: "aeiou".into(),
            consonant: "bcdfghjklmnpqrstvwxyz".into(),
            ..Grammar::default()
        }
    }

    #[test]
    fn test_words_and_passthrough() {
        let parser = Parser::new(&grammar(vec![
            Pattern::new("ami", "আমি"),
            Pattern::new("bangla", "বাংলা"),
            Pattern::new("gan", "গান"),
            Pattern::new("gai", "গাই"),
        ]));
        assert_eq!(parser.parse("ami bangla gan gai"), "আমি বাংলা গান গাই");
    }

    #[test]
    fn test_empty_input() {
        let parser = Parser::new(&grammar(vec![Pattern::new("a", "অ")]));
        assert_eq!(parser.parse(""), "");
    }

    #[test]
    fn test_empty_grammar_echoes() {
        let parser = Parser::new(&Grammar::default());
        assert_eq!(parser.pattern_count(), 0);
        assert_eq!(parser.parse("anything at all, ১২৩!"), "anything at all, ১২৩!");
    }

    #[test]
    fn test_longest_match_priority() {
        let parser = Parser::new(&grammar(vec![
            Pattern::new("a", "অ"),
            Pattern::new("ami", "আমি"),
        ]));
        assert_eq!(parser.parse("ami"), "আমি");
        assert_eq!(parser.parse("amx"), "অmx");
    }

    #[test]
    fn test_vowel_sign_after_consonant() {
        let parser = Parser::new(&grammar(vec![
            Pattern::new("a", "া").with_rule(Rule::new("consonant", "prefix")),
            Pattern::new("a", "অ"),
            Pattern::new("k", "ক"),
        ]));
        assert_eq!(parser.parse("ka"), "কা");
        assert_eq!(parser.parse("a"), "অ");
        assert_eq!(parser.parse("aa"), "অঅ");
    }

    #[test]
    fn test_rules_see_source_text() {
        // the rule inspects the input, not what has been emitted so far
        let parser = Parser::new(&grammar(vec![
            Pattern::new("k", "ক"),
            Pattern::new("i", "ি").with_rule(Rule::new("consonant", "prefix")),
            Pattern::new("i", "ই"),
        ]));
        assert_eq!(parser.parse("ki"), "কি");
    }

    #[test]
    fn test_punctuation_rule_disambiguates() {
        let parser = Parser::new(&grammar(vec![
            Pattern::new("ta", "টা").with_rule(Rule::new("punctuation", "prefix")),
            Pattern::new("ta", "তা"),
        ]));
        assert_eq!(parser.parse(" ta"), " টা");
        assert_eq!(parser.parse("xta"), "xতা");
    }

    #[test]
    fn test_first_candidate_fallback_policy() {
        let parser = Parser::new(&grammar(vec![
            Pattern::new("a", "FIRST").with_rule(Rule::new("vowel", "prefix")),
            Pattern::new("a", "SECOND").with_rule(Rule::new("digit", "prefix")),
        ]));
        // neither rule holds after 'k'; the first candidate still wins
        assert_eq!(parser.parse("ka"), "kFIRST");
        assert_eq!(parser.parse("ea"), "eFIRST");
    }

    #[test]
    fn test_first_satisfied_candidate_wins() {
        let parser = Parser::new(&grammar(vec![
            Pattern::new("a", "1").with_rule(Rule::new("vowel", "prefix")),
            Pattern::new("a", "2").with_rule(Rule::new("consonant", "prefix")),
            Pattern::new("a", "3").with_rule(Rule::new("consonant", "prefix")),
        ]));
        assert_eq!(parser.parse("ka"), "k2");
    }

    #[test]
    fn test_empty_replacement_deletes() {
        let parser = Parser::new(&grammar(vec![Pattern::new("h", "")]));
        assert_eq!(parser.parse("ahha"), "aa");
    }

    #[test]
    fn test_empty_find_is_skipped() {
        let parser = Parser::new(&grammar(vec![
            Pattern::new("", "X"),
            Pattern::new("a", "অ"),
        ]));
        assert_eq!(parser.pattern_count(), 1);
        assert_eq!(parser.parse("ba"), "bঅ");
    }

    #[test]
    fn test_advances_by_match_length() {
        let parser = Parser::new(&grammar(vec![
            Pattern::new("kh", "খ"),
            Pattern::new("h", "হ"),
        ]));
        assert_eq!(parser.parse("khh"), "খহ");
    }

    #[test]
    fn test_grammar_is_retained() {
        let g = grammar(vec![Pattern::new("a", "অ")]);
        let parser = compile(&g);
        assert_eq!(parser.grammar(), &g);
        assert!(parser.classes().is_vowel('a'));
    }
}
