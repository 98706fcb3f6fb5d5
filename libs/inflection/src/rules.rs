use crate::InflectionError;
use regex::{Regex, RegexBuilder};
use std::fmt;

/// Singular to plural. Order is precedence: irregular forms come before the
/// generic rules that would otherwise shadow them, and the table ends in a
/// rule matching every input.
pub const PLURAL_RULES: &[(&str, &str)] = &[
    ("(m)an$", "${1}en"),
    ("(pe)rson$", "${1}ople"),
    ("(child)$", "${1}ren"),
    ("^(ox)$", "${1}en"),
    ("(ax|test)is$", "${1}es"),
    ("(octop|vir)us$", "${1}i"),
    ("(alias|status|by)$", "${1}es"),
    ("(bu)s$", "${1}ses"),
    ("(buffal|tomat|potat)o$", "${1}oes"),
    ("([ti])um$", "${1}a"),
    ("sis$", "ses"),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    ("(hive)$", "${1}s"),
    ("([^aeiouy]|qu)y$", "${1}ies"),
    ("(x|ch|ss|sh)$", "${1}es"),
    ("(matr|vert|ind)ix|ex$", "${1}ices"),
    ("([m|l])ouse$", "${1}ice"),
    ("(quiz)$", "${1}zes"),
    ("s$", "s"),
    ("$", "s"),
];

/// Plural to singular. Words no rule matches are left as they are.
pub const SINGULAR_RULES: &[(&str, &str)] = &[
    ("(m)en$", "${1}an"),
    ("(pe)ople$", "${1}rson"),
    ("(child)ren$", "${1}"),
    ("([ti])a$", "${1}um"),
    (
        "((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$",
        "${1}${2}sis",
    ),
    ("(hive)s$", "${1}"),
    ("(tive)s$", "${1}"),
    ("(curve)s$", "${1}"),
    ("([lr])ves$", "${1}f"),
    ("([^fo])ves$", "${1}fe"),
    ("([^aeiouy]|qu)ies$", "${1}y"),
    ("(s)eries$", "${1}eries"),
    ("(m)ovies$", "${1}ovie"),
    ("(x|ch|ss|sh)es$", "${1}"),
    ("([m|l])ice$", "${1}ouse"),
    ("(bus)es$", "${1}"),
    ("(o)es$", "${1}"),
    ("(shoe)s$", "${1}"),
    ("(cris|ax|test)es$", "${1}is"),
    ("(octop|vir)i$", "${1}us"),
    ("(alias|status)es$", "${1}"),
    ("^(ox)en", "${1}"),
    ("(vert|ind)ices$", "${1}ex"),
    ("(matr)ices$", "${1}ix"),
    ("(quiz)zes$", "${1}"),
    ("s$", ""),
];

/// A case-insensitive pattern and the template that replaces every match.
///
/// Templates use the `regex` crate syntax, so capture groups are written as
/// `${1}`. Groups that did not take part in the match expand to nothing.
pub struct InflectionRule {
    pattern: Regex,
    replacement: String,
}

impl InflectionRule {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, InflectionError> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| InflectionError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })?;

        Ok(Self {
            pattern,
            replacement: replacement.to_owned(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }

    /// Rewrites the matched part of `word`, leaving the rest untouched.
    pub fn apply(&self, word: &str) -> Option<String> {
        if !self.is_match(word) {
            return None;
        }

        Some(self.pattern.replace_all(word, self.replacement.as_str()).into_owned())
    }
}

impl fmt::Debug for InflectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InflectionRule")
            .field(&self.pattern.as_str())
            .field(&self.replacement)
            .finish()
    }
}

/// Rules evaluated in declaration order, first match wins.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<InflectionRule>,
}

impl RuleTable {
    pub fn new(rules: &[(&str, &str)]) -> Result<Self, InflectionError> {
        let rules = rules
            .iter()
            .map(|(pattern, replacement)| InflectionRule::new(pattern, replacement))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    pub fn plurals() -> Self {
        Self::new(PLURAL_RULES).expect("built-in plural rules compile")
    }

    pub fn singulars() -> Self {
        Self::new(SINGULAR_RULES).expect("built-in singular rules compile")
    }

    /// The first rule matching `word`, if any.
    pub fn find(&self, word: &str) -> Option<&InflectionRule> {
        self.rules.iter().find(|rule| rule.is_match(word))
    }

    pub fn apply(&self, word: &str) -> Option<String> {
        self.find(word).and_then(|rule| rule.apply(word))
    }

    pub fn iter(&self) -> impl Iterator<Item = &InflectionRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_tables_compile_in_declared_order() {
        let plurals = RuleTable::plurals();
        let singulars = RuleTable::singulars();

        assert_eq!(plurals.len(), PLURAL_RULES.len());
        assert_eq!(singulars.len(), SINGULAR_RULES.len());

        for (rule, (pattern, replacement)) in plurals.iter().zip(PLURAL_RULES) {
            assert_eq!(rule.pattern(), *pattern);
            assert_eq!(rule.replacement(), *replacement);
        }
    }

    #[test]
    fn plural_table_ends_in_a_catch_all() {
        let plurals = RuleTable::plurals();
        let last = plurals.iter().last().unwrap();

        assert!(last.is_match(""));
        assert!(last.is_match("anything at all"));
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = RuleTable::new(&[("(m)an$", "${1}en"), ("an$", "ans"), ("$", "s")]).unwrap();

        assert_eq!(table.find("woman").unwrap().pattern(), "(m)an$");
        assert_eq!(table.apply("woman").as_deref(), Some("women"));
        assert_eq!(table.apply("pan").as_deref(), Some("pans"));
    }

    #[test]
    fn matching_ignores_case_and_keeps_the_prefix() {
        let rule = InflectionRule::new("(pe)rson$", "${1}ople").unwrap();

        assert_eq!(rule.apply("SalesPerson").as_deref(), Some("SalesPeople"));
        assert_eq!(rule.apply("PERSON").as_deref(), Some("PEople"));
        assert_eq!(rule.apply("parson"), None);
    }

    #[test]
    fn unmatched_groups_expand_to_nothing() {
        let rule = InflectionRule::new("(?:([^f])fe|([lr])f)$", "${1}${2}ves").unwrap();

        assert_eq!(rule.apply("knife").as_deref(), Some("knives"));
        assert_eq!(rule.apply("shelf").as_deref(), Some("shelves"));
    }

    #[test]
    fn invalid_patterns_are_reported() {
        let err = RuleTable::new(&[("(unclosed", "x")]).unwrap_err();

        assert!(matches!(err, InflectionError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
        assert!(err.to_string().starts_with("Invalid inflection rule pattern `(unclosed`"));
    }
}
