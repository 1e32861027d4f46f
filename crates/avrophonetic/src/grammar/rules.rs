//! Context rules as they appear in grammar documents.
//!
//! A rule is stored in its textual form (`scope`, `type`, `value`) so that a
//! grammar round-trips exactly as written. [`Rule::compile`] lowers it into the
//! typed [`ContextRule`] the matcher evaluates.

use crate::context::{ContextRule, Scope, Side};
use facet::Facet;

/// Marker prefix that negates a rule scope, e.g. `"!vowel"`.
pub const NEGATION_MARKER: char = '!';

/// Scope names understood by the matcher.
pub const KNOWN_SCOPES: [&str; 4] = ["vowel", "consonant", "punctuation", "exact"];

/// A positional context precondition attached to a [`Pattern`](super::Pattern).
///
/// `scope` is one of `vowel`, `consonant`, `punctuation` or `exact`, optionally
/// negated with a leading `!`. `rule_type` is `prefix` (inspect the text just
/// before the match) or `suffix` (just after it). `value` is the literal text
/// compared by `exact` rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
pub struct Rule {
    /// The character class or comparison this rule checks.
    pub scope: String,

    /// Which side of the match to inspect: `prefix` or `suffix`.
    #[facet(rename = "type")]
    pub rule_type: String,

    /// Literal neighbor text for `exact` rules.
    #[facet(default)]
    pub value: Option<String>,
}

impl Rule {
    /// Creates a rule without a literal value.
    #[must_use]
    pub fn new(scope: impl Into<String>, rule_type: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            rule_type: rule_type.into(),
            value: None,
        }
    }

    /// Creates an `exact` (or `!exact`, when `negated`) rule.
    #[must_use]
    pub fn exact(rule_type: impl Into<String>, value: impl Into<String>, negated: bool) -> Self {
        let scope = if negated { "!exact" } else { "exact" };
        Self {
            scope: scope.to_owned(),
            rule_type: rule_type.into(),
            value: Some(value.into()),
        }
    }

    /// Returns `true` if the scope carries the negation marker.
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.scope.starts_with(NEGATION_MARKER)
    }

    /// Returns the scope name with any negation marker stripped.
    #[must_use]
    pub fn scope_name(&self) -> &str {
        self.scope
            .strip_prefix(NEGATION_MARKER)
            .unwrap_or(&self.scope)
    }

    /// Returns `true` if the scope name is one the matcher understands.
    #[must_use]
    pub fn has_known_scope(&self) -> bool {
        KNOWN_SCOPES.contains(&self.scope_name())
    }

    /// Returns the inspected side, or `None` for an unrecognized type.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        match self.rule_type.as_str() {
            "prefix" => Some(Side::Prefix),
            "suffix" => Some(Side::Suffix),
            _ => None,
        }
    }

    /// Lowers this rule into the form evaluated during matching.
    ///
    /// An unknown scope becomes [`ContextRule::Unrecognized`], which never
    /// holds. A known scope with an unknown type becomes
    /// [`ContextRule::Unanchored`]: it has no neighbor to inspect.
    #[must_use]
    pub fn compile(&self) -> ContextRule {
        let value = self.value.as_deref().unwrap_or_default();
        let scope = match self.scope_name() {
            "vowel" => Scope::Vowel,
            "consonant" => Scope::Consonant,
            "punctuation" => Scope::Punctuation,
            "exact" => Scope::Exact(value.chars().collect()),
            _ => return ContextRule::Unrecognized,
        };
        let negated = self.is_negated();
        match self.side() {
            Some(side) => ContextRule::Check {
                scope,
                side,
                negated,
            },
            None => ContextRule::Unanchored { negated },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule() {
        let json = r#"{"scope": "!punctuation", "type": "suffix"}"#;
        let rule: Rule = facet_json::from_str(json).unwrap();
        assert!(rule.is_negated());
        assert_eq!(rule.scope_name(), "punctuation");
        assert_eq!(rule.side(), Some(Side::Suffix));
        assert_eq!(rule.value, None);
    }

    #[test]
    fn test_compile_known_scopes() {
        assert_eq!(
            Rule::new("consonant", "prefix").compile(),
            ContextRule::Check {
                scope: Scope::Consonant,
                side: Side::Prefix,
                negated: false,
            }
        );
        assert_eq!(
            Rule::exact("suffix", "hi", true).compile(),
            ContextRule::Check {
                scope: Scope::Exact(vec!['h', 'i']),
                side: Side::Suffix,
                negated: true,
            }
        );
    }

    #[test]
    fn test_compile_exact_without_value() {
        let rule = Rule::new("exact", "prefix");
        assert_eq!(
            rule.compile(),
            ContextRule::Check {
                scope: Scope::Exact(Vec::new()),
                side: Side::Prefix,
                negated: false,
            }
        );
    }

    #[test]
    fn test_compile_unknown_is_unrecognized() {
        assert_eq!(Rule::new("number", "prefix").compile(), ContextRule::Unrecognized);
        assert_eq!(Rule::new("!number", "prefix").compile(), ContextRule::Unrecognized);
        assert_eq!(Rule::new("number", "infix").compile(), ContextRule::Unrecognized);
        assert!(!Rule::new("!number", "prefix").has_known_scope());
    }

    #[test]
    fn test_compile_unknown_type_is_unanchored() {
        assert_eq!(
            Rule::new("vowel", "infix").compile(),
            ContextRule::Unanchored { negated: false }
        );
        assert_eq!(
            Rule::new("!vowel", "infix").compile(),
            ContextRule::Unanchored { negated: true }
        );
    }
}
